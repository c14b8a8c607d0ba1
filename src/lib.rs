//! loldle-export - LoLdle answer board to CSV
//!
//! This crate reads the classic-mode answers board of a rendered LoLdle page
//! and turns each guessed champion into one CSV row.
//!
//! # Features
//!
//! - **Snapshot DOM**: extraction runs on an immutable tree, built from saved
//!   HTML or, on wasm32, from the live page
//! - **Data-driven matching**: container, item, and slot markers live in a
//!   [`SelectorSet`] that can be loaded from JSON
//! - **Tolerant extraction**: missing names or slots become empty cells and
//!   are reported as [`Anomaly`] values
//! - **Pluggable sinks**: file, writer, memory, or browser download
//!
//! # Architecture
//!
//! ```text
//! HTML / live DOM ──▶ DomNode snapshot ──▶ Extractor ──▶ Document ──▶ Sink
//!                                              │
//!                                              ▼
//!                                          Anomalies
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use loldle_export::{dom::parse_html, export, MemorySink, SelectorSet};
//!
//! let page = r#"<div class="answers-container classic-answers-container">
//!   <div class="classic-answer"><div class="square-container">
//!     <div class="square"><span class="champion-icon-name">Ahri</span></div>
//!     <div class="square 0">Female</div>
//!   </div></div>
//! </div>"#;
//!
//! let mut sink = MemorySink::new();
//! let report = export(&parse_html(page), &SelectorSet::default(), &mut sink)?;
//! assert_eq!(report.records, 1);
//! assert!(sink.last_text().unwrap().ends_with(r#"Ahri,"Female","","","","","","""#));
//! # Ok::<(), loldle_export::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dom;
pub mod error;
pub mod export;
pub mod extraction;
pub mod pipeline;
pub mod selectors;
pub mod sink;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

// Re-exports for convenience
pub use dom::{DomNode, ElementNode};
pub use error::{Error, Result};
pub use export::{Document, FILENAME, HEADER};
pub use extraction::{Anomaly, AnomalyKind, Extraction, Extractor, Record};
pub use pipeline::{build_document, export, ExportReport};
pub use selectors::SelectorSet;
pub use sink::{Delivery, FileSink, MemorySink, Sink, UnsupportedSink, WriterSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
