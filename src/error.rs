//! Error types for Workbench
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Workbench
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// A required collaborator was absent at construction time
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    /// A tool name was registered more than once
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Workbench operations
pub type Result<T> = std::result::Result<T, WorkbenchError>;
