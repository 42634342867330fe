use std::fmt;

use crate::version::VersionId;
use crate::view::ViewId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// A write was rejected by a validation rule. Nothing was persisted.
    Validation(String),
    ViewNotFound(ViewId),
    VersionNotFound(VersionId),
    /// A version references a view that no longer exists. Caller bug;
    /// promotion has no recovery path for it.
    OrphanVersion { version: VersionId, view: ViewId },
    /// A save raced another writer to the same view row.
    ConcurrentWrite {
        id: ViewId,
        expected: u64,
        actual: u64,
    },
    LockPoisoned(&'static str),
    Serde(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Validation(message) => {
                write!(f, "validation error: {}", message)
            }
            HistoryError::ViewNotFound(id) => write!(f, "view {} not found", id),
            HistoryError::VersionNotFound(id) => write!(f, "version {} not found", id),
            HistoryError::OrphanVersion { version, view } => {
                write!(f, "version {} references missing view {}", version, view)
            }
            HistoryError::ConcurrentWrite {
                id,
                expected,
                actual,
            } => write!(
                f,
                "concurrent write detected for view {} (expected version {}, got {})",
                id, expected, actual
            ),
            HistoryError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            HistoryError::Serde(message) => {
                write!(f, "record serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for HistoryError {}
