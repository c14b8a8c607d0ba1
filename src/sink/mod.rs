//! Output sinks
//!
//! A sink receives the finished document and a filename and delivers it
//! somewhere: a file, a writer, memory, or a browser download. A host that
//! cannot deliver reports [`Delivery::Unsupported`], which is not an error.

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDownloadSink;

use crate::error::SinkError;
use crate::export::Document;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Outcome of a delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum Delivery {
    /// The document was handed over
    Delivered {
        /// Where it went (path, stream name, or filename)
        location: String,
        /// Bytes written
        bytes: usize,
    },
    /// The host cannot deliver files; nothing was written
    Unsupported,
}

/// Destination for a finished document
pub trait Sink {
    /// Deliver `document` under `filename`
    fn deliver(&mut self, document: &Document, filename: &str) -> Result<Delivery, SinkError>;
}

/// Writes the document into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Sink for FileSink {
    #[instrument(skip(self, document), fields(dir = %self.dir.display()))]
    fn deliver(&mut self, document: &Document, filename: &str) -> Result<Delivery, SinkError> {
        let io_err = |source| SinkError::Io {
            filename: filename.to_string(),
            source,
        };
        if !self.dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        }
        let path = self.dir.join(filename);
        std::fs::write(&path, document.as_bytes()).map_err(io_err)?;
        debug!("Wrote {} bytes to {}", document.as_bytes().len(), path.display());

        Ok(Delivery::Delivered {
            location: path.display().to_string(),
            bytes: document.as_bytes().len(),
        })
    }
}

/// Writes the document to any writer, e.g. stdout
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer`, naming it `label` in delivery reports
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn deliver(&mut self, document: &Document, filename: &str) -> Result<Delivery, SinkError> {
        let bytes = document.as_bytes();
        self.writer
            .write_all(bytes)
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush())
            .map_err(|source| SinkError::Io {
                filename: filename.to_string(),
                source,
            })?;

        Ok(Delivery::Delivered {
            location: self.label.clone(),
            bytes: bytes.len(),
        })
    }
}

/// Keeps every delivered document in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    deliveries: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered `(filename, bytes)` pairs, oldest first
    pub fn deliveries(&self) -> &[(String, Vec<u8>)] {
        &self.deliveries
    }

    /// Most recent delivery as text
    pub fn last_text(&self) -> Option<String> {
        self.deliveries
            .last()
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Sink for MemorySink {
    fn deliver(&mut self, document: &Document, filename: &str) -> Result<Delivery, SinkError> {
        let bytes = document.as_bytes().to_vec();
        let len = bytes.len();
        self.deliveries.push((filename.to_string(), bytes));
        Ok(Delivery::Delivered {
            location: filename.to_string(),
            bytes: len,
        })
    }
}

/// A host without any way to save files
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSink;

impl Sink for UnsupportedSink {
    fn deliver(&mut self, _document: &Document, _filename: &str) -> Result<Delivery, SinkError> {
        Ok(Delivery::Unsupported)
    }
}
