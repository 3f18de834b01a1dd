pub mod file;
pub mod storage;

use thiserror::Error;

pub use file::{default_export_file_name, deserialize, export_to_path, import_from_path, serialize};
pub use storage::Storage;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid file format")]
    InvalidFormat,
}
