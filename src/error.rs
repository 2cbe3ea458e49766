use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid phone number: {input}")]
    InvalidNumber {
        input: String,
        #[source]
        source: phonenumber::ParseError,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for AnalyzerError {
    fn user_message(&self) -> String {
        match self {
            AnalyzerError::Io(error) => match error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied while writing the report: {}", error)
                }
                _ => format!("File operation failed: {}", error),
            },
            AnalyzerError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            AnalyzerError::InvalidNumber { input, source } => {
                format!("Could not parse '{}': {}", input, source)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            AnalyzerError::Io(_) => Some(
                "Make sure the current directory is writable, or run with --no-save to skip the report file.".to_string()
            ),
            AnalyzerError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            AnalyzerError::InvalidNumber { .. } => Some(
                "Enter the number in international form with a leading '+' and country code (e.g., +14155552671).".to_string()
            ),
        }
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        AnalyzerError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
