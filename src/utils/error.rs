use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Generated C source directory not found: {path}")]
    MissingSourceDir { path: PathBuf },

    #[error("'{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    #[error("Command failed with exit code {code}: {tool}")]
    ToolFailed { tool: String, code: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GenError::ToolNotFound { .. } => ErrorSeverity::High,
            GenError::ToolFailed { .. } => ErrorSeverity::High,
            GenError::MissingSourceDir { .. } => ErrorSeverity::High,
            GenError::IoError(_) => ErrorSeverity::Critical,
            GenError::TemplateError(_) | GenError::RenderError(_) => ErrorSeverity::Critical,
            GenError::SerializationError(_) => ErrorSeverity::Critical,
            GenError::TomlError(_)
            | GenError::ConfigError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GenError::ToolNotFound { tool } if tool == "hvcc" => {
                "Install Heavy (pip install hvcc) and ensure 'hvcc' is on PATH".to_string()
            }
            GenError::ToolNotFound { tool } => {
                format!("Install '{}' and ensure it is on PATH", tool)
            }
            GenError::ToolFailed { tool, .. } => {
                format!("Inspect the output of '{}' above for the underlying failure", tool)
            }
            GenError::MissingSourceDir { .. } => {
                "Run hvcc first, or point the generator at its 'c' output directory".to_string()
            }
            GenError::TomlError(_) => "Check the project config file syntax".to_string(),
            GenError::ConfigError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::MissingConfigError { .. } => {
                "Adjust the offending option and retry".to_string()
            }
            GenError::IoError(_) => {
                "Check filesystem permissions and free space for the output directory".to_string()
            }
            GenError::TemplateError(_) | GenError::RenderError(_) => {
                "This indicates a packaging defect in the embedded templates".to_string()
            }
            GenError::SerializationError(_) => {
                "This indicates a defect in the report serialization".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    /// Process exit code for this error. Subprocess failures reuse the
    /// child's own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::ToolFailed { code, .. } => *code,
            _ => match self.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
