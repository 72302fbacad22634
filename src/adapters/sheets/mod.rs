pub mod auth;
pub mod http_client;
pub mod request_factory;
pub mod spreadsheet_manager;
pub mod value_range_factory;
