//! Entry: one candidate in the tournament.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque candidate identifier (a name or an id). Serialized as a bare string.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Entry {
    fn from(name: String) -> Self {
        Self(name)
    }
}
