//! Rendering of control results.

mod console;
mod json;
mod report_format;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use report_format::ReportFormat;
