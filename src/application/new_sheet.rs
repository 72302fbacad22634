use std::sync::Arc;

use chrono::NaiveDate;
use error_stack::ResultExt;

use crate::config::sheets_config::LayoutConfig;
use crate::domain::sheets::{
    format::{self, FormattingBatch},
    schema::header_rows,
    title::{self, SheetTitle},
};
use crate::ports::{
    routine::{Routine, RoutineError},
    spreadsheet_api::SpreadsheetApi,
};

/// Result of a successful [`NewSheetRoutine`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedSheet {
    pub title: SheetTitle,
    pub sheet_id: i32,
    pub operations: FormattingBatch,
}

/// Creates a dated results sheet with its header and formatting.
pub struct NewSheetRoutine {
    spreadsheet: Arc<dyn SpreadsheetApi>,
    layout: LayoutConfig,
    today: NaiveDate,
}

impl NewSheetRoutine {
    pub fn new(spreadsheet: Arc<dyn SpreadsheetApi>, layout: LayoutConfig, today: NaiveDate) -> Self {
        Self {
            spreadsheet,
            layout,
            today,
        }
    }

    pub async fn create_sheet(&self) -> error_stack::Result<CreatedSheet, RoutineError> {
        let existing_titles = self
            .spreadsheet
            .sheet_titles()
            .await
            .change_context(RoutineError::ListSheets)?;

        let title = title::allocate(self.today, &existing_titles);
        log::info!("Adding sheet: {}", title);

        let sheet_id = self
            .spreadsheet
            .add_sheet(&title, self.layout.row_count, self.layout.column_count)
            .await
            .change_context(RoutineError::AddSheet)?;
        log::debug!("Sheet '{}' created with id {}", title, sheet_id);

        let header = header_rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect::<Vec<Vec<String>>>();

        self.spreadsheet
            .write_values(&title.top_left_range(), &header)
            .await
            .change_context(RoutineError::WriteHeader)?;

        let operations = format::build(sheet_id, self.layout.row_count, self.layout.column_count);
        self.spreadsheet
            .batch_update(&operations)
            .await
            .change_context(RoutineError::ApplyFormatting)
            .attach_printable_lazy(|| format!("Sheet '{}' was created without formatting", title))?;

        Ok(CreatedSheet {
            title,
            sheet_id,
            operations,
        })
    }
}

#[async_trait::async_trait]
impl Routine for NewSheetRoutine {
    fn name(&self) -> &'static str {
        "NewSheetRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let created = self.create_sheet().await?;
        log::info!(
            "Sheet '{}' ready ({} formatting operations)",
            created.title,
            created.operations.len()
        );
        Ok(())
    }
}
