pub mod analyzer;
pub mod classification;
pub mod directory;
pub mod emergency;
pub mod library;
pub mod report;

pub use analyzer::{analyze, NumberExtractor};
pub use classification::NumberClass;
pub use directory::{DirectoryQuery, NumberDirectory, OfflineDirectory};
pub use emergency::EmergencyMatcher;
pub use report::{AnalysisOutcome, ErrorResult, Report, ReportEntry, ReportValue, SCHEMA};
