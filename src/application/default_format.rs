use std::sync::Arc;

use error_stack::ResultExt;

use crate::domain::sheets::format::default_format_batch;
use crate::ports::{
    routine::{Routine, RoutineError},
    spreadsheet_api::SpreadsheetApi,
};

/// Sets the spreadsheet-wide default cell padding.
pub struct DefaultFormatRoutine {
    spreadsheet: Arc<dyn SpreadsheetApi>,
}

impl DefaultFormatRoutine {
    pub fn new(spreadsheet: Arc<dyn SpreadsheetApi>) -> Self {
        Self { spreadsheet }
    }
}

#[async_trait::async_trait]
impl Routine for DefaultFormatRoutine {
    fn name(&self) -> &'static str {
        "DefaultFormatRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        log::info!("Updating default cell format");
        self.spreadsheet
            .batch_update(&default_format_batch())
            .await
            .change_context(RoutineError::ApplyFormatting)
    }
}
