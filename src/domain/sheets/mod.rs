pub mod format;
pub mod schema;
pub mod threshold;
pub mod title;
