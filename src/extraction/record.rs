//! Extracted records and diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positional field slots per result element
pub const SLOT_COUNT: usize = 7;

/// Number of fields in a record: the name plus every slot
pub const FIELD_COUNT: usize = SLOT_COUNT + 1;

/// One normalized row: a name and exactly [`SLOT_COUNT`] positional fields.
///
/// Missing data is stored as an empty string, never omitted. Slot values are
/// held with embedded double quotes already doubled; the name is stored as
/// trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    slots: [String; SLOT_COUNT],
}

impl Record {
    /// Create a record from a name and its slot values
    pub fn new(name: impl Into<String>, slots: [String; SLOT_COUNT]) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional slot values, index 0 first
    pub fn slots(&self) -> &[String; SLOT_COUNT] {
        &self.slots
    }

    /// All [`FIELD_COUNT`] fields, name first
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.slots.iter().map(String::as_str))
    }
}

/// What was missing from a result element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Name card or its name text was absent
    NameMissing,
    /// No slot carried the positional marker for `index`
    FieldMissing {
        /// Slot index, `0..SLOT_COUNT`
        index: usize,
    },
}

/// A non-fatal extraction diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Zero-based position of the result element in document order
    pub element: usize,
    /// What was missing
    #[serde(flatten)]
    pub kind: AnomalyKind,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AnomalyKind::NameMissing => write!(f, "element {}: no name found", self.element),
            AnomalyKind::FieldMissing { index } => {
                write!(f, "element {}: field {} missing", self.element, index)
            }
        }
    }
}

/// Records of one extraction pass plus what went missing along the way
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// One record per result element, in document order
    pub records: Vec<Record>,
    /// Non-fatal diagnostics, in the order encountered
    pub anomalies: Vec<Anomaly>,
}
