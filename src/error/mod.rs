//! Error handling module for the planner's outer layers
//!
//! The decision builder itself never fails; these errors come from reading
//! probe documents, loading configuration and talking to the terminal.

use thiserror::Error;

/// Main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Configuration file has an extension we do not understand
    #[error("Unsupported config format: {path}. Expected .toml, .yaml or .yml")]
    UnsupportedConfigFormat { path: String },

    /// An option carried a value outside its accepted set
    #[error("Invalid value for option {name}: {value}")]
    InvalidOption { name: String, value: String },

    /// Probe document could not be read
    #[error("Failed to read probe data from {source_name}: {source}")]
    ProbeRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Probe document is not valid ffprobe JSON
    #[error("Failed to parse probe data from {source_name}: {message}")]
    ProbeParse { source_name: String, message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Result type alias for planner operations
pub type PlannerResult<T> = std::result::Result<T, PlannerError>;
