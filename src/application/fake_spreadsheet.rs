use std::sync::Mutex;

use error_stack::report;

use crate::domain::sheets::{format::FormattingBatch, title::SheetTitle};
use crate::ports::spreadsheet_api::{SpreadsheetApi, SpreadsheetApiError};

/// In-memory spreadsheet recording every call it receives.
#[derive(Debug, Default)]
pub struct FakeSpreadsheet {
    pub titles: Mutex<Vec<String>>,
    pub added: Mutex<Vec<(String, u32, u32)>>,
    pub written: Mutex<Vec<(String, Vec<Vec<String>>)>>,
    pub batches: Mutex<Vec<FormattingBatch>>,
    pub fail_batch_update: bool,
}

impl FakeSpreadsheet {
    pub fn with_titles(titles: &[&str]) -> Self {
        FakeSpreadsheet {
            titles: Mutex::new(titles.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl SpreadsheetApi for FakeSpreadsheet {
    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetApiError> {
        Ok(self.titles.lock().unwrap().clone())
    }

    async fn add_sheet(
        &self,
        title: &SheetTitle,
        row_count: u32,
        column_count: u32,
    ) -> error_stack::Result<i32, SpreadsheetApiError> {
        let mut titles = self.titles.lock().unwrap();
        let title = title.to_string();
        if titles.contains(&title) {
            return Err(report!(SpreadsheetApiError::FailedToAddSheet));
        }
        titles.push(title.clone());
        self.added
            .lock()
            .unwrap()
            .push((title, row_count, column_count));
        Ok(100 + titles.len() as i32)
    }

    async fn write_values(
        &self,
        range: &str,
        rows: &[Vec<String>],
    ) -> error_stack::Result<(), SpreadsheetApiError> {
        self.written
            .lock()
            .unwrap()
            .push((range.to_string(), rows.to_vec()));
        Ok(())
    }

    async fn batch_update(
        &self,
        batch: &FormattingBatch,
    ) -> error_stack::Result<(), SpreadsheetApiError> {
        if self.fail_batch_update {
            return Err(report!(SpreadsheetApiError::FailedToApplyFormatting));
        }
        self.batches.lock().unwrap().push(batch.clone());
        Ok(())
    }
}
