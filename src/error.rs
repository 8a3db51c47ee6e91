use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dataset construction.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Expected a directory but found a file: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read class names from {path}: {source}")]
    ClassNamesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed class names file {path} at line {line}: {message}")]
    ClassNamesParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Folder '{folder}' in split '{split}' has no entry in the class names file")]
    UnknownClassFolder { split: String, folder: String },

    #[error("Image file not found: {path}")]
    ImageNotFound { path: PathBuf },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid few-shot parameters: {message}")]
    InvalidFewShotParams { message: String },

    #[error("Failed to write items: {message}")]
    ItemWrite { message: String },

    #[error("Failed to render inspect report as JSON: {source}")]
    ReportJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
