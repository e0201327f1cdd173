// SPDX-License-Identifier: Apache-2.0
//! The `(label, id)` value pair carried by vertices and edge payloads.

use std::fmt;

/// Label shared by all sentinel values.
pub const DUMMY_LABEL: &str = "DUMMY";

/// Id shared by all sentinel values.
pub const DUMMY_ID: i64 = -1;

/// A `(label, id)` pair.
///
/// The id is the identity key used by graph storage; the label is display
/// metadata that also participates in value equality. The sentinel value
/// `("DUMMY", -1)` stands in for "no such value" and is the default payload
/// of a freshly constructed [`crate::Edge`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    /// Human-readable label.
    pub label: String,
    /// Integer identity key.
    pub id: i64,
}

impl Value {
    /// Builds a value from a label and id.
    pub fn new(label: impl Into<String>, id: i64) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }

    /// Returns the `("DUMMY", -1)` sentinel.
    #[must_use]
    pub fn dummy() -> Self {
        Self::new(DUMMY_LABEL, DUMMY_ID)
    }

    /// Returns `true` if this is the sentinel value.
    #[must_use]
    pub fn is_dummy(&self) -> bool {
        self.id == DUMMY_ID && self.label == DUMMY_LABEL
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::dummy()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.label, self.id)
    }
}
