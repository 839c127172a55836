//! Errors for the glue around the generator (presets, snapshots, previews).
//!
//! Generation itself never fails; only file and format handling can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldGenError {
    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a preset file or snapshot
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG preview could not be written
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("preset '{name}' not found in {path}")]
    UnknownPreset { name: String, path: String },

    #[error("preset '{name}' is not a JSON object")]
    InvalidPreset { name: String },
}

pub type Result<T> = std::result::Result<T, WorldGenError>;
