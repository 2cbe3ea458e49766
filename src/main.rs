use clap::Parser;
use phone_analyzer::{AnalyzerError, Cli, OutputFormatter, PhoneAnalyzer, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(&cli);

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let analyzer = match PhoneAnalyzer::from_cli(&cli) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    analyzer.output_formatter().print_banner();

    let raw = match cli.number.as_deref() {
        Some(number) => number.trim().to_string(),
        None => match analyzer.output_formatter().prompt_for_number() {
            Ok(line) => line,
            Err(e) => {
                let e = AnalyzerError::from(e);
                analyzer.handle_error(&e);
                return exit_code_for(&e);
            }
        },
    };

    match analyzer.run(&raw) {
        Ok(_) => 0,
        Err(e) => {
            log::error!("Analysis run failed: {}", e);
            analyzer.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &AnalyzerError) -> i32 {
    match error {
        AnalyzerError::Config { .. } => 2,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "phone-analyzer.toml".to_string());

    match PhoneAnalyzer::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  phone-analyzer --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &AnalyzerError) {
    let formatter = OutputFormatter::new(phone_analyzer::config::DEFAULT_LABEL_WIDTH);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(cli: &Cli) {
    let env = env_logger::Env::default().default_filter_or(cli.log_filter());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli::try_parse_from([
            "phone-analyzer",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(std::fs::read_to_string(&config_path).unwrap().contains("[report]"));
    }

    #[test]
    fn test_exit_codes() {
        let config_error = AnalyzerError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(exit_code_for(&config_error), 2);

        let io_error = AnalyzerError::from(std::io::Error::other("disk full"));
        assert_eq!(exit_code_for(&io_error), 1);
    }
}
