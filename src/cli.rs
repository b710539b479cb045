// src/cli.rs

use crate::error::{LotSizingError, LotSizingResult};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: lot-sizing [OPTIONS]

Options:
  -c, --config <PATH>   JSON planner configuration (defaults to the built-in example)
  -o, --output <PATH>   Export the schedule as CSV (overrides the config)
      --no-table        Skip the cost table printout
  -h, --help            Show this message
  -V, --version         Show the version";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Plan {
        config_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        print_table: bool,
    },
    Help,
    Version,
}

/// Parsed command line. Takes any iterator of strings, not just
/// `std::env::args()`, so it can be tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
}

impl Args {
    /// The first item is the program name and is skipped.
    pub fn parse_from<I, S>(args: I) -> LotSizingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut config_path = None;
        let mut output_path = None;
        let mut print_table = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Self { command: Command::Help }),
                "-V" | "--version" => {
                    return Ok(Self {
                        command: Command::Version,
                    })
                }
                "-c" | "--config" => {
                    config_path = Some(PathBuf::from(value_for(&args, i)?));
                    i += 2;
                }
                "-o" | "--output" => {
                    output_path = Some(PathBuf::from(value_for(&args, i)?));
                    i += 2;
                }
                "--no-table" => {
                    print_table = false;
                    i += 1;
                }
                unknown => {
                    return Err(LotSizingError::Config(format!(
                        "unknown argument '{unknown}'"
                    )))
                }
            }
        }

        Ok(Self {
            command: Command::Plan {
                config_path,
                output_path,
                print_table,
            },
        })
    }
}

fn value_for(args: &[String], flag_idx: usize) -> LotSizingResult<&str> {
    args.get(flag_idx + 1)
        .map(String::as_str)
        .ok_or_else(|| LotSizingError::Config(format!("'{}' expects a path", args[flag_idx])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_plans_with_defaults() {
        let args = Args::parse_from(["lot-sizing"]).unwrap();
        assert_eq!(
            args.command,
            Command::Plan {
                config_path: None,
                output_path: None,
                print_table: true,
            }
        );
    }

    #[test]
    fn parses_all_plan_flags() {
        let args = Args::parse_from([
            "lot-sizing",
            "--config",
            "plan.json",
            "-o",
            "out.csv",
            "--no-table",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Command::Plan {
                config_path: Some(PathBuf::from("plan.json")),
                output_path: Some(PathBuf::from("out.csv")),
                print_table: false,
            }
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            Args::parse_from(["lot-sizing", "-c", "x.json", "--help"])
                .unwrap()
                .command,
            Command::Help
        );
        assert_eq!(
            Args::parse_from(["lot-sizing", "-V"]).unwrap().command,
            Command::Version
        );
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(Args::parse_from(["lot-sizing", "--config"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(matches!(
            Args::parse_from(["lot-sizing", "--fast"]),
            Err(LotSizingError::Config(_))
        ));
    }
}
