pub mod routine;
pub mod spreadsheet_api;
