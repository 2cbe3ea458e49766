use crate::config::ReportConfig;
use crate::error::Result;
use crate::extractor::Report;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes reports as `label: value` lines followed by an attribution.
pub struct ReportWriter {
    output_path: PathBuf,
    attribution: String,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(directory: P, config: &ReportConfig) -> Self {
        Self {
            output_path: directory.as_ref().join(config.file_name.trim()),
            attribution: config.attribution.clone(),
        }
    }

    /// Writer targeting the process working directory.
    pub fn in_current_dir(config: &ReportConfig) -> Result<Self> {
        let directory = std::env::current_dir()?;
        Ok(Self::new(directory, config))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Overwrites any existing file and returns its path.
    pub fn persist(&self, report: &Report) -> Result<PathBuf> {
        let file = fs::File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);

        for entry in report.entries() {
            writeln!(writer, "{}: {}", entry.label, entry.value)?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", self.attribution)?;
        writer.flush()?;

        log::info!(
            "Wrote {} report entries to {}",
            report.len(),
            self.output_path.display()
        );

        Ok(self.output_path.clone())
    }
}
