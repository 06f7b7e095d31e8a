//! I/O helpers for solver commands.

pub mod input;
