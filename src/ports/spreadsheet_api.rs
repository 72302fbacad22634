use thiserror::Error;

use crate::domain::sheets::{format::FormattingBatch, title::SheetTitle};

#[derive(Error, Debug)]
pub enum SpreadsheetApiError {
    #[error("Failed to build the HTTPS client")]
    FailedToBuildClient,
    #[error("Failed to authenticate with the spreadsheet API")]
    FailedToAuthenticate,
    #[error("Failed to fetch sheet titles")]
    FailedToFetchSheetTitles,
    #[error("Failed to add sheet")]
    FailedToAddSheet,
    #[error("Failed to write range")]
    FailedToWriteRange,
    #[error("Failed to apply formatting batch")]
    FailedToApplyFormatting,
}

/// Outbound calls made against the target spreadsheet.
#[async_trait::async_trait]
pub trait SpreadsheetApi: Send + Sync {
    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetApiError>;

    /// Creates an empty sheet and returns its id.
    async fn add_sheet(
        &self,
        title: &SheetTitle,
        row_count: u32,
        column_count: u32,
    ) -> error_stack::Result<i32, SpreadsheetApiError>;

    /// Writes `rows` as raw values starting at `range`.
    async fn write_values(
        &self,
        range: &str,
        rows: &[Vec<String>],
    ) -> error_stack::Result<(), SpreadsheetApiError>;

    async fn batch_update(
        &self,
        batch: &FormattingBatch,
    ) -> error_stack::Result<(), SpreadsheetApiError>;
}
