use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("Could not read custom params from {path}: {reason}")]
    ConfigReadError { path: String, reason: String },

    #[error("No input file found in {dir}")]
    InputNotFoundError { dir: String },

    #[error("Could not parse {path} as JSON: {reason}")]
    ParseError { path: String, reason: String },

    #[error("Expected input data to be a JSON array of records, got {actual}")]
    TransformTypeError { actual: String },

    #[error("Failed to write results to {path}: {reason}")]
    WriteError { path: String, reason: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Processing,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlgoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AlgoError::ConfigReadError { .. } | AlgoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            AlgoError::InputNotFoundError { .. } | AlgoError::ParseError { .. } => {
                ErrorCategory::Input
            }
            AlgoError::TransformTypeError { .. } => ErrorCategory::Processing,
            AlgoError::WriteError { .. } => ErrorCategory::Output,
            AlgoError::IoError(_) | AlgoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Soft failure: defaults are applied and the run continues.
            AlgoError::ConfigReadError { .. } => ErrorSeverity::Low,
            AlgoError::InputNotFoundError { .. }
            | AlgoError::ParseError { .. }
            | AlgoError::TransformTypeError { .. }
            | AlgoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AlgoError::WriteError { .. }
            | AlgoError::IoError(_)
            | AlgoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AlgoError::ConfigReadError { path, .. } => format!(
                "Check that {} is valid JSON; defaults were applied for this run",
                path
            ),
            AlgoError::InputNotFoundError { dir } => format!(
                "Mount a dataset file under {} (any name except the params file)",
                dir
            ),
            AlgoError::ParseError { path, .. } => {
                format!("Verify that {} contains well-formed JSON", path)
            }
            AlgoError::TransformTypeError { .. } => {
                "Provide the dataset as a top-level JSON array of records".to_string()
            }
            AlgoError::WriteError { path, .. } => format!(
                "Check that {} is on a writable volume with free space",
                path
            ),
            AlgoError::InvalidConfigValueError { field, .. } => {
                format!("Fix the {} argument and retry", field)
            }
            AlgoError::IoError(_) | AlgoError::SerializationError(_) => {
                "Inspect the container filesystem and logs for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AlgoError::ConfigReadError { .. } => {
                "Custom parameters could not be read; defaults were used".to_string()
            }
            AlgoError::InputNotFoundError { dir } => {
                format!("No input data file was found in {}", dir)
            }
            AlgoError::ParseError { path, .. } => {
                format!("The input file {} is not valid JSON", path)
            }
            AlgoError::TransformTypeError { actual } => format!(
                "The dataset must be a JSON array of records, but the file contains {}",
                actual
            ),
            AlgoError::WriteError { path, .. } => {
                format!("Results could not be written to {}", path)
            }
            AlgoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
            AlgoError::IoError(e) => format!("Filesystem error: {}", e),
            AlgoError::SerializationError(e) => format!("JSON serialization error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_is_soft() {
        let err = AlgoError::ConfigReadError {
            path: "/data/inputs/algoCustomData.json".to_string(),
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_fatal_errors_are_not_low() {
        let errors = [
            AlgoError::InputNotFoundError {
                dir: "/data/inputs".to_string(),
            },
            AlgoError::ParseError {
                path: "/data/inputs/data.json".to_string(),
                reason: "trailing comma".to_string(),
            },
            AlgoError::TransformTypeError {
                actual: "an object".to_string(),
            },
            AlgoError::WriteError {
                path: "/data/outputs/results.json".to_string(),
                reason: "read-only file system".to_string(),
            },
        ];
        for err in errors {
            assert_ne!(err.severity(), ErrorSeverity::Low, "{}", err);
        }
    }
}
