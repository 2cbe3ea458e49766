use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REPORT_FILE: &str = "KrsxhNumberReport.txt";
pub const DEFAULT_ATTRIBUTION: &str = "🔍 Generated by: @Krsxh";
pub const DEFAULT_LABEL_WIDTH: usize = 26;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub file_name: String,
    pub attribution: String,
    pub label_width: usize,
    pub save: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Region whose short-number table backs the emergency check.
    pub emergency_region: String,
    pub library_label: String,
    pub analyst: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_REPORT_FILE.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
            save: true,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            emergency_region: "IN".to_string(),
            library_label: "phonenumber (Rust)".to_string(),
            analyst: "@Krsxh".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AnalyzerError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| AnalyzerError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["phone-analyzer.toml", ".phone-analyzer.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(save) = cli_args.save {
            self.report.save = save;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| AnalyzerError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| AnalyzerError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let file_name = self.report.file_name.trim();
        if file_name.is_empty() {
            return Err(AnalyzerError::Config {
                message: "Report file name must not be empty".to_string(),
            });
        }

        // The report always lands in the working directory.
        if file_name.contains('/') || file_name.contains('\\') || file_name == ".." {
            return Err(AnalyzerError::Config {
                message: format!("Report file name must not contain a path: {}", file_name),
            });
        }

        if self.report.label_width == 0 || self.report.label_width > 80 {
            return Err(AnalyzerError::Config {
                message: format!(
                    "Label width must be between 1 and 80, got {}",
                    self.report.label_width
                ),
            });
        }

        let region = &self.analysis.emergency_region;
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AnalyzerError::Config {
                message: format!(
                    "Emergency region must be a two-letter uppercase code, got '{}'",
                    region
                ),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub save: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save(mut self, save: Option<bool>) -> Self {
        self.save = save;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report.file_name, "KrsxhNumberReport.txt");
        assert_eq!(config.report.label_width, 26);
        assert!(config.report.save);
        assert_eq!(config.analysis.emergency_region, "IN");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.report.label_width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.file_name = "../report.txt".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.analysis.emergency_region = "india".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.report.label_width = 30;
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.report.label_width, 30);
        assert_eq!(loaded_config.report.attribution, config.report.attribution);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[analysis]\nemergency_region = \"US\"").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.analysis.emergency_region, "US");
        assert_eq!(config.report.file_name, DEFAULT_REPORT_FILE);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(AnalyzerError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        config.merge_with_cli_args(&CliOverrides::new());
        assert!(config.report.save);

        config.merge_with_cli_args(&CliOverrides::new().with_save(Some(false)));
        assert!(!config.report.save);
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(sample.contains("[report]"));
        assert!(sample.contains("[analysis]"));
        assert!(sample.contains("KrsxhNumberReport.txt"));
    }
}
