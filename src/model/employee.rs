//! Employee record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A plain employee record used as a data holder by the application layer.
///
/// Equality and hashing are structural over all three fields. The identifier
/// is server-assigned; a freshly constructed record carries id 0 until the
/// application layer assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl Employee {
    /// A record without an assigned identifier.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    /// A record with a known identifier.
    pub fn with_id(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id={}, name='{}', email='{}'}}",
            self.id, self.name, self.email
        )
    }
}
