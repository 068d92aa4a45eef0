use thiserror::Error;

#[derive(Error, Debug)]
pub enum BearingError {
    #[error("Invalid bearing geometry: {field} = {value} ({reason})")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid rotation speed: {value} RPM ({reason})")]
    InvalidSpeed { value: f64, reason: String },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BearingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl BearingError {
    pub fn invalid_geometry(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_speed(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidSpeed {
            value,
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGeometry { .. } | Self::InvalidSpeed { .. } => ErrorCategory::Input,
            Self::MissingConfig { .. } | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidGeometry { .. } => {
                "Check the bearing dimensions against the manufacturer data sheet, or pass --permissive to compute anyway"
            }
            Self::InvalidSpeed { .. } => "Use a positive, finite rotation speed in RPM",
            Self::MissingConfig { .. } => {
                "Provide the value as a command line flag or in the [bearing]/[operation] section of the config file"
            }
            Self::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            Self::IoError(_) => "Check that the export directory is writable",
            Self::SerializationError(_) => {
                "Non-finite results cannot be exported as numbers; validate the inputs"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidGeometry { field, reason, .. } => {
                format!("The bearing geometry is not physical: {} {}", field, reason)
            }
            Self::InvalidSpeed { value, .. } => {
                format!("Rotation speed {} RPM cannot be analysed", value)
            }
            Self::MissingConfig { field } => format!("Missing value for '{}'", field),
            other => other.to_string(),
        }
    }
}
