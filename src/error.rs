//! Error handling for the Blueprint application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Custom error types for Blueprint operations.
///
/// Parser failures (`EmptyInput`, `InvalidFormat`) are pure and always safe
/// to retry with corrected input. Materializer failures are surfaced only
/// after the partially built project root has been rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors during template serialization or deserialization
    #[error("Serialization error: {0}.")]
    SerdeError(#[from] serde_json::Error),

    /// The destination is not an existing, accessible directory
    #[error("Invalid destination path: {}.", .path.display())]
    InvalidPath { path: PathBuf },

    /// A target path collides with something already on disk
    #[error("Path already exists: {}.", .path.display())]
    AlreadyExists { path: PathBuf },

    /// An underlying failure after project root creation began;
    /// always accompanied by a best-effort rollback of the root
    #[error("Project creation failed: {message}.")]
    CreationFailed { message: String },

    /// The structure text contains no usable lines
    #[error("Structure text is empty.")]
    EmptyInput,

    /// The structure text could not be assembled into a tree
    #[error("Invalid structure format: {message}.")]
    InvalidFormat { message: String },

    /// Materialization was cancelled between sibling creations
    #[error("Materialization was cancelled.")]
    Cancelled,

    /// No template with the given identifier exists in the store
    #[error("Template not found: {id}.")]
    TemplateNotFound { id: Uuid },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
