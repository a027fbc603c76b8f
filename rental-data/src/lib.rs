pub mod input;
pub mod loader;
pub mod report;

pub use loader::{ApartmentLoadError, load_from_file, load_from_str};
pub use report::{ReportWriteError, write_report, write_report_to_file};
