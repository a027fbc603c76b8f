pub mod app;
pub mod edits;
pub mod format;
pub mod logging;
pub mod table;
