pub mod default_format;
pub mod new_sheet;

#[cfg(test)]
pub(crate) mod fake_spreadsheet;
