//! Record extraction module
//!
//! This module turns a DOM snapshot of the answers board into records,
//! one per result element, plus the diagnostics collected on the way.

pub mod extractor;
pub mod record;

pub use extractor::Extractor;
pub use record::{Anomaly, AnomalyKind, Extraction, Record, FIELD_COUNT, SLOT_COUNT};
