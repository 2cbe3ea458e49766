pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod ui;

// Public API re-exports
pub use cli::Cli;
pub use config::{AnalysisConfig, CliOverrides, Config, ReportConfig};
pub use error::{AnalyzerError, Result, UserFriendlyError};

pub use extractor::{
    analyze, AnalysisOutcome, ErrorResult, NumberClass, NumberDirectory, NumberExtractor,
    OfflineDirectory, Report, ReportValue,
};
pub use ui::{OutputFormatter, ReportWriter};

use std::path::{Path, PathBuf};

/// Main library interface: one analysis, displayed and optionally saved.
pub struct PhoneAnalyzer {
    config: Config,
    extractor: NumberExtractor,
    output_formatter: OutputFormatter,
}

impl PhoneAnalyzer {
    pub fn new(config: Config) -> Self {
        let extractor = NumberExtractor::new(&config.analysis);
        let output_formatter = OutputFormatter::new(config.report.label_width);

        Self {
            config,
            extractor,
            output_formatter,
        }
    }

    /// Create PhoneAnalyzer instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Ok(Self::new(config))
    }

    pub fn analyze(&self, raw: &str) -> AnalysisOutcome {
        self.extractor.analyze(raw)
    }

    /// Analyze, display, and save into the working directory.
    pub fn run(&self, raw: &str) -> Result<Option<PathBuf>> {
        let writer = ReportWriter::in_current_dir(&self.config.report)?;
        self.run_in(raw, writer)
    }

    /// Same as [`PhoneAnalyzer::run`] with the report saved under `directory`.
    pub fn run_in_directory<P: AsRef<Path>>(&self, raw: &str, directory: P) -> Result<Option<PathBuf>> {
        let writer = ReportWriter::new(directory, &self.config.report);
        self.run_in(raw, writer)
    }

    fn run_in(&self, raw: &str, writer: ReportWriter) -> Result<Option<PathBuf>> {
        let outcome = self.analyze(raw);
        self.output_formatter.display(&outcome);

        let report = match outcome {
            AnalysisOutcome::Report(report) => report,
            AnalysisOutcome::Error(_) => return Ok(None),
        };

        if !self.config.report.save {
            log::info!("Report file disabled, skipping save");
            return Ok(None);
        }

        let path = writer.persist(&report)?;
        println!();
        self.output_formatter
            .success(&format!("Report saved at: {}", path.display()));

        Ok(Some(path))
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &AnalyzerError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_saves_report() {
        let temp_dir = TempDir::new().unwrap();
        let analyzer = PhoneAnalyzer::new(Config::default());

        let saved = analyzer.run_in_directory("+14155552671", temp_dir.path()).unwrap();
        let path = saved.expect("report should be saved");
        assert!(path.exists());
        assert!(path.ends_with("KrsxhNumberReport.txt"));
    }

    #[test]
    fn test_run_skips_save_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let analyzer = PhoneAnalyzer::new(Config::default());

        let saved = analyzer.run_in_directory("not-a-number", temp_dir.path()).unwrap();
        assert!(saved.is_none());
        assert!(!temp_dir.path().join("KrsxhNumberReport.txt").exists());
    }

    #[test]
    fn test_run_respects_save_override() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.merge_with_cli_args(&CliOverrides::new().with_save(Some(false)));
        let analyzer = PhoneAnalyzer::new(config);

        let saved = analyzer.run_in_directory("+14155552671", temp_dir.path()).unwrap();
        assert!(saved.is_none());
        assert!(!temp_dir.path().join("KrsxhNumberReport.txt").exists());
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        PhoneAnalyzer::generate_sample_config(&config_path).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[report]"));
        assert!(content.contains("[analysis]"));
        assert!(Config::load_from_file(&config_path).is_ok());
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
