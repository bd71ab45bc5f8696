//! File-backed persistence.
//!
//! Each resource type lives in its own JSON array file managed by a
//! [`RecordStore`].

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::errors::DomainError;

pub mod record_store;

pub use record_store::RecordStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("record store {} is not a valid JSON array: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => {
                DomainError::NotFound(format!("record store {}", path.display()))
            }
            err @ StoreError::Parse { .. } => DomainError::Corrupted(err.to_string()),
            other => DomainError::Other(anyhow::Error::new(other)),
        }
    }
}
