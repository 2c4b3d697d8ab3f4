use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::model::SheetId;

/// Errors raised by sheet lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet is the only one left and cannot be removed
    LastSheet(SheetId),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::LastSheet(_) => write!(f, "You cannot delete the last sheet."),
        }
    }
}

impl std::error::Error for SheetError {}

/// Errors reported by a live expense feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The feed could not be reached
    Unavailable(String),
    /// The feed answered with a value that is not a usable expense
    InvalidValue(f64),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Unavailable(msg) => write!(f, "expense feed unavailable: {msg}"),
            FeedError::InvalidValue(value) => {
                write!(f, "expense feed returned an invalid value ({value})")
            }
        }
    }
}

impl std::error::Error for FeedError {}

/// Errors raised while exporting a report
#[derive(Debug)]
pub enum ExportError {
    /// There was no active sheet to export
    NoActiveSheet,
    /// The sink refused the artifact
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoActiveSheet => write!(f, "No active sheet to export"),
            ExportError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::NoActiveSheet => None,
            ExportError::Write { source, .. } => Some(source),
        }
    }
}
