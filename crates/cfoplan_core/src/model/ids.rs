//! Unique identifiers for budget sheets

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a Sheet within a running process.
///
/// Derived from the creation-time millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SheetId(pub u64);

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
