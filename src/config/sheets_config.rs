use crate::domain::sheets::schema::COLUMN_COUNT;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service account key file.
    pub priv_key: Box<str>,
    pub spreadsheet_id: Box<str>,
}

/// Grid size of newly created sheets.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    pub row_count: u32,
    pub column_count: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            row_count: 1000,
            column_count: COLUMN_COUNT as u32,
        }
    }
}
