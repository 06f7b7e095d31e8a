//! Text-puzzle solvers over line-oriented input files.
//!
//! Each subcommand reads one input file and prints a single numeric
//! answer to stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use solvers::core::grid::{SURVEY_SLOPES, Slope};
use solvers::core::policy::Policy;
use solvers::{cli, logging};

#[derive(Parser)]
#[command(
    name = "solvers",
    version,
    about = "Text-puzzle solvers over line-oriented input files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count password lines whose subject satisfies its rule.
    Passwords {
        /// Input file, one `<int>-<int> <char>: <subject>` record per line.
        input: PathBuf,
        /// Predicate applied to each record.
        #[arg(long, value_enum)]
        policy: PolicyChoice,
    },
    /// Count trees met while tobogganing down an ASCII map.
    Toboggan {
        /// Input file, one `.`/`#` map row per line.
        input: PathBuf,
        /// Slope as `<right>,<down>`; repeat to multiply the counts.
        #[arg(long, default_value = "3,1", conflicts_with = "survey")]
        slope: Vec<Slope>,
        /// Traverse the five standard survey slopes and print the product.
        #[arg(long)]
        survey: bool,
    },
}

/// CLI spelling of the two record policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyChoice {
    /// Letter occurrence count within the rule's bounds.
    Occurrence,
    /// Letter at exactly one of the rule's positions.
    Position,
}

impl From<PolicyChoice> for Policy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Occurrence => Policy::OccurrenceCount,
            PolicyChoice::Position => Policy::ExclusivePosition,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Passwords { input, policy } => cli::count_passwords(&input, policy.into()),
        Command::Toboggan {
            input,
            slope,
            survey,
        } => {
            let slopes: &[Slope] = if survey { &SURVEY_SLOPES } else { &slope };
            cli::count_trees(&input, slopes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_passwords_occurrence() {
        let cli = Cli::parse_from(["solvers", "passwords", "input.txt", "--policy", "occurrence"]);
        match cli.command {
            Command::Passwords { input, policy } => {
                assert_eq!(input, PathBuf::from("input.txt"));
                assert_eq!(policy, PolicyChoice::Occurrence);
            }
            _ => panic!("expected passwords command"),
        }
    }

    #[test]
    fn parse_passwords_position() {
        let cli = Cli::parse_from(["solvers", "passwords", "input.txt", "--policy", "position"]);
        match cli.command {
            Command::Passwords { policy, .. } => assert_eq!(policy, PolicyChoice::Position),
            _ => panic!("expected passwords command"),
        }
    }

    #[test]
    fn parse_passwords_requires_policy() {
        let result = Cli::try_parse_from(["solvers", "passwords", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_toboggan_defaults_to_single_slope() {
        let cli = Cli::parse_from(["solvers", "toboggan", "map.txt"]);
        match cli.command {
            Command::Toboggan { slope, survey, .. } => {
                assert_eq!(slope, vec![Slope { right: 3, down: 1 }]);
                assert!(!survey);
            }
            _ => panic!("expected toboggan command"),
        }
    }

    #[test]
    fn parse_toboggan_repeated_slopes() {
        let cli = Cli::parse_from([
            "solvers", "toboggan", "map.txt", "--slope", "1,1", "--slope", "3,1",
        ]);
        match cli.command {
            Command::Toboggan { slope, .. } => {
                assert_eq!(
                    slope,
                    vec![Slope { right: 1, down: 1 }, Slope { right: 3, down: 1 }]
                );
            }
            _ => panic!("expected toboggan command"),
        }
    }

    #[test]
    fn parse_toboggan_rejects_slope_with_survey() {
        let result =
            Cli::try_parse_from(["solvers", "toboggan", "map.txt", "--slope", "1,1", "--survey"]);
        assert!(result.is_err());
    }
}
