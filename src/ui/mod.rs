pub mod output;
pub mod report_writer;

pub use output::OutputFormatter;
pub use report_writer::ReportWriter;
