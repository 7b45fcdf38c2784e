// Error types for scale/chord construction and catalog loading.
//
// The fitting engine and relationship analyzer are total over valid inputs,
// so errors only arise at the edges: building a `Scale` or `Chord` from bad
// interval data, looking up a name that isn't in the catalog, or reading a
// catalog JSON file.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HarmonyError>;

#[derive(Error, Debug)]
pub enum HarmonyError {
    /// A scale's interval list is empty or contains a zero step.
    #[error("Invalid scale definition '{name}': {reason}")]
    InvalidScaleDefinition { name: String, reason: String },

    /// A chord's interval list is empty.
    #[error("Invalid chord definition '{name}': {reason}")]
    InvalidChordDefinition { name: String, reason: String },

    /// No scale with this name in the catalog.
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// No chord with this name in the catalog.
    #[error("Unknown chord: {0}")]
    UnknownChord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON failed to parse (this includes definitions rejected by
    /// validation during deserialization).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
