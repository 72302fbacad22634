use std::sync::Arc;

use chrono::NaiveDate;
use error_stack::{report, ResultExt};
use thiserror::Error;

use crate::application::{default_format::DefaultFormatRoutine, new_sheet::NewSheetRoutine};
use crate::config::sheets_config::LayoutConfig;
use crate::ports::{routine::Routine, spreadsheet_api::SpreadsheetApi};

pub const USAGE: &str = "\
Usage: signif-sheets [COMMAND]

Commands:
  new-sheet [--date YYYY-MM-DD]  Add a formatted sheet named after the date (default: today)
  default-format                 Set the spreadsheet default cell padding
  help                           Print this message

Without a command, new-sheet runs for today.";

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },
    #[error("Command execution failed")]
    ExecutionFailed,
}

impl CommandError {
    fn invalid<S: Into<String>>(details: S) -> Self {
        CommandError::InvalidCommand {
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` means the local date at run time.
    NewSheet { date: Option<NaiveDate> },
    DefaultFormat,
    Help,
}

impl Command {
    /// Parses `args` as given by `std::env::args`, program name first.
    pub fn parse(args: &[String]) -> error_stack::Result<Command, CommandError> {
        match args.get(1).map(|s| s.as_str()) {
            None | Some("new-sheet") => {
                let date = match args.get(2).map(|s| s.as_str()) {
                    None => None,
                    Some("--date") => {
                        let value = args.get(3).ok_or_else(|| {
                            report!(CommandError::invalid("--date requires a value"))
                        })?;
                        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                            .change_context(CommandError::invalid("Invalid --date value"))
                            .attach_printable_lazy(|| {
                                format!("Expected YYYY-MM-DD, got '{}'", value)
                            })?;
                        Some(date)
                    }
                    Some(other) => {
                        return Err(report!(CommandError::invalid(format!(
                            "Unexpected argument '{}'",
                            other
                        ))))
                    }
                };
                if args.len() > 4 {
                    return Err(report!(CommandError::invalid("Too many arguments")));
                }
                Ok(Command::NewSheet { date })
            }
            Some("default-format") if args.len() == 2 => Ok(Command::DefaultFormat),
            Some("default-format") => Err(report!(CommandError::invalid(
                "default-format takes no arguments"
            ))),
            Some("help" | "--help" | "-h") => Ok(Command::Help),
            Some(other) => Err(report!(CommandError::invalid(format!(
                "Unknown command '{}'",
                other
            )))),
        }
    }

    pub fn routine(
        &self,
        spreadsheet: Arc<dyn SpreadsheetApi>,
        layout: LayoutConfig,
        today: NaiveDate,
    ) -> Option<Box<dyn Routine>> {
        match self {
            Command::NewSheet { date } => Some(Box::new(NewSheetRoutine::new(
                spreadsheet,
                layout,
                date.unwrap_or(today),
            ))),
            Command::DefaultFormat => Some(Box::new(DefaultFormatRoutine::new(spreadsheet))),
            Command::Help => None,
        }
    }
}

/// Runs the routine selected by `command`.
pub async fn execute(
    command: &Command,
    spreadsheet: Arc<dyn SpreadsheetApi>,
    layout: LayoutConfig,
    today: NaiveDate,
) -> error_stack::Result<(), CommandError> {
    let Some(routine) = command.routine(spreadsheet, layout, today) else {
        println!("{}", USAGE);
        return Ok(());
    };

    match routine.run().await {
        Ok(()) => {
            log::info!("✅ {}: OK", routine.name());
            Ok(())
        }
        Err(report) => {
            log::error!("❌ {}: {:?}", routine.name(), report);
            Err(report.change_context(CommandError::ExecutionFailed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake_spreadsheet::FakeSpreadsheet;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("signif-sheets")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_default_is_new_sheet_today() {
        assert_eq!(
            Command::parse(&args(&[])).unwrap(),
            Command::NewSheet { date: None }
        );
        assert_eq!(
            Command::parse(&args(&["new-sheet"])).unwrap(),
            Command::NewSheet { date: None }
        );
    }

    #[test]
    fn test_new_sheet_with_date() {
        assert_eq!(
            Command::parse(&args(&["new-sheet", "--date", "2024-03-05"])).unwrap(),
            Command::NewSheet {
                date: NaiveDate::from_ymd_opt(2024, 3, 5)
            }
        );
    }

    #[test]
    fn test_invalid_date() {
        let report = Command::parse(&args(&["new-sheet", "--date", "05/03/2024"])).unwrap_err();
        assert!(matches!(
            report.current_context(),
            CommandError::InvalidCommand { .. }
        ));
        assert!(Command::parse(&args(&["new-sheet", "--date"])).is_err());
        assert!(Command::parse(&args(&["new-sheet", "--later"])).is_err());
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(
            Command::parse(&args(&["default-format"])).unwrap(),
            Command::DefaultFormat
        );
        assert_eq!(Command::parse(&args(&["--help"])).unwrap(), Command::Help);
        assert!(Command::parse(&args(&["default-format", "x"])).is_err());
        assert!(Command::parse(&args(&["run"])).is_err());
    }

    #[tokio::test]
    async fn test_execute_uses_command_date() {
        let fake = Arc::new(FakeSpreadsheet::default());
        let command = Command::NewSheet {
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        execute(&command, fake.clone(), LayoutConfig::default(), today)
            .await
            .unwrap();

        assert_eq!(fake.added.lock().unwrap()[0].0, "05 Mar 2024");
    }

    #[tokio::test]
    async fn test_execute_reports_failure() {
        let fake = Arc::new(FakeSpreadsheet {
            fail_batch_update: true,
            ..Default::default()
        });
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let report = execute(&Command::DefaultFormat, fake, LayoutConfig::default(), today)
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            CommandError::ExecutionFailed
        ));
    }
}
