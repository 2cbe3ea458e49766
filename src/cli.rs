use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phone-analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze a phone number and save a labeled report")]
#[command(
    long_about = "Parses one phone number in international form, prints every attribute \
                  the numbering-plan metadata can derive for it, and saves the same \
                  report to KrsxhNumberReport.txt in the current directory."
)]
#[command(after_help = "EXAMPLES:\n  \
    phone-analyzer\n  \
    phone-analyzer +14155552671\n  \
    phone-analyzer '+44 20 7946 0958' --no-save\n  \
    phone-analyzer --config my-analyzer.toml")]
pub struct Cli {
    /// Phone number to analyze (prompted for when omitted)
    pub number: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the report without writing the report file
    #[arg(long)]
    pub no_save: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_save(self.no_save.then_some(false))
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
