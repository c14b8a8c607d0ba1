//! CSV document assembly
//!
//! Rows are written as `Name,"F0",…,"F6"`: the name is emitted as is, every
//! positional field is wrapped in double quotes even when empty. Slot values
//! arrive from the extractor with embedded quotes already doubled. Commas and
//! newlines inside a name are not escaped.

use crate::extraction::Record;
use std::fmt;

/// Header line naming the eight columns
pub const HEADER: &str =
    "Champion Name, Gender, Position(s), Species, Resource, Range Type, Region(s), Release Year";

/// Filename the document is delivered under
pub const FILENAME: &str = "loldle_data.csv";

/// MIME type used for browser downloads
pub const MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Double every `"` so the text can sit inside a quoted CSV field
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Render one record as a CSV row, without a line terminator
pub fn format_row(record: &Record) -> String {
    let slots = record.slots();
    let mut row = String::with_capacity(
        record.name().len() + slots.iter().map(|s| s.len() + 3).sum::<usize>(),
    );
    row.push_str(record.name());
    for slot in slots {
        row.push_str(",\"");
        row.push_str(slot);
        row.push('"');
    }
    row
}

/// Header plus one row per record, joined by `\n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    rows: usize,
}

impl Document {
    /// Build a document from records in extraction order
    pub fn from_records(records: &[Record]) -> Self {
        let mut text = String::from(HEADER);
        for record in records {
            text.push('\n');
            text.push_str(&format_row(record));
        }
        Self {
            text,
            rows: records.len(),
        }
    }

    /// Document text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// UTF-8 bytes handed to a sink
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of record rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Logical line count: the header plus one line per record
    pub fn line_count(&self) -> usize {
        self.rows + 1
    }

    /// Take the document text
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
