use thiserror::Error;

/// Step at which a routine stopped. The API error that caused it stays in the report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineError {
    #[error("Could not list existing sheets")]
    ListSheets,
    #[error("Could not add sheet")]
    AddSheet,
    #[error("Could not write header")]
    WriteHeader,
    #[error("Could not apply formatting")]
    ApplyFormatting,
}

/// A single run against the spreadsheet, started from the command line.
#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    /// Label used in log lines.
    fn name(&self) -> &'static str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
