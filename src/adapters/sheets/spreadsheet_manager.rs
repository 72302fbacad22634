use std::fmt::Debug;

use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{BatchUpdateSpreadsheetRequest, Request, ValueRange},
    Sheets,
};

use super::{
    auth,
    http_client::{self, HttpsConnector},
    request_factory::RequestFactory,
    value_range_factory::ValueRangeFactory,
};
use crate::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::{format::FormattingBatch, title::SheetTitle};
use crate::ports::spreadsheet_api::{SpreadsheetApi, SpreadsheetApiError};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

impl SpreadsheetManager {
    pub async fn new(
        config: SpreadsheetConfig,
    ) -> error_stack::Result<Self, SpreadsheetApiError> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    async fn submit(
        &self,
        requests: Vec<Request>,
    ) -> Result<
        google_sheets4::api::BatchUpdateSpreadsheetResponse,
        google_sheets4::Error,
    > {
        log::trace!("Submitting batch of {} requests", requests.len());
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .map(|(_, response)| response)
    }
}

#[async_trait::async_trait]
impl SpreadsheetApi for SpreadsheetManager {
    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetApiError> {
        log::debug!("Fetching sheet titles of {}", self.config.spreadsheet_id);
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetApiError::FailedToFetchSheetTitles)?;

        let sheets = spreadsheet.sheets.ok_or_else(|| {
            report!(SpreadsheetApiError::FailedToFetchSheetTitles)
                .attach_printable("Sheets not present in spreadsheet response")
        })?;

        Ok(sheets
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|props| props.title))
            .collect())
    }

    async fn add_sheet(
        &self,
        title: &SheetTitle,
        row_count: u32,
        column_count: u32,
    ) -> error_stack::Result<i32, SpreadsheetApiError> {
        log::debug!("Adding sheet '{}'", title);
        let response = self
            .submit(vec![Request::add_sheet(
                &title.to_string(),
                row_count,
                column_count,
            )])
            .await
            .change_context(SpreadsheetApiError::FailedToAddSheet)
            .attach_printable_lazy(|| format!("Failed to add sheet '{}'", title))?;

        response
            .replies
            .and_then(|replies| replies.into_iter().next())
            .and_then(|reply| reply.add_sheet)
            .and_then(|add_sheet| add_sheet.properties)
            .and_then(|properties| properties.sheet_id)
            .ok_or_else(|| {
                report!(SpreadsheetApiError::FailedToAddSheet)
                    .attach_printable("Sheet id not present in addSheet reply")
            })
    }

    async fn write_values(
        &self,
        range: &str,
        rows: &[Vec<String>],
    ) -> error_stack::Result<(), SpreadsheetApiError> {
        log::debug!("Writing {} rows to {}", rows.len(), range);
        self.hub
            .spreadsheets()
            .values_update(ValueRange::from_rows(rows), &self.config.spreadsheet_id, range)
            .value_input_option("RAW")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetApiError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }

    async fn batch_update(
        &self,
        batch: &FormattingBatch,
    ) -> error_stack::Result<(), SpreadsheetApiError> {
        log::debug!("Applying {} formatting operations", batch.len());
        let requests = batch.iter().map(Request::from_operation).collect();

        self.submit(requests)
            .await
            .map(|_| ())
            .change_context(SpreadsheetApiError::FailedToApplyFormatting)
    }
}
