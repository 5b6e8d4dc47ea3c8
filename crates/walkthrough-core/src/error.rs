//! Error types for walkthrough-rs.

use thiserror::Error;

/// The main error type for walkthrough-rs operations.
#[derive(Error, Debug)]
pub enum WalkthroughError {
    /// A viewpoint name was referenced that is not registered.
    #[error("viewpoint '{0}' is not registered")]
    UnknownViewpoint(String),

    /// A viewpoint with the given name already exists.
    #[error("viewpoint '{0}' already exists")]
    DuplicateViewpoint(String),

    /// Configuration values are out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The scene asset could not be loaded.
    #[error("failed to load scene '{path}': {reason}")]
    SceneLoad { path: String, reason: String },

    /// The scene asset contains no geometry to frame.
    #[error("scene '{0}' contains no vertices")]
    EmptyScene(String),

    /// The windowing event loop failed.
    #[error("event loop error: {0}")]
    EventLoop(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for walkthrough-rs operations.
pub type Result<T> = std::result::Result<T, WalkthroughError>;
