//! One export pass
//!
//! Snapshot in, delivered CSV out. The pass is synchronous and keeps no
//! state: each call re-reads the snapshot and makes a fresh delivery.

use crate::dom::ElementNode;
use crate::error::Result;
use crate::export::{Document, FILENAME};
use crate::extraction::{Anomaly, Extractor};
use crate::selectors::SelectorSet;
use crate::sink::{Delivery, Sink};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Summary of a completed export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Number of record rows written
    pub records: usize,
    /// Non-fatal diagnostics collected during extraction
    pub anomalies: Vec<Anomaly>,
    /// What the sink did with the document
    pub delivery: Delivery,
}

/// Build the document for `root` without delivering it
pub fn build_document(
    root: &ElementNode,
    selectors: &SelectorSet,
) -> Result<(Document, Vec<Anomaly>)> {
    let extraction = Extractor::new(selectors).extract(root)?;
    Ok((Document::from_records(&extraction.records), extraction.anomalies))
}

/// Extract, serialize, and deliver under [`FILENAME`].
///
/// A missing container returns an error before the sink is touched.
#[instrument(skip_all)]
pub fn export<S: Sink + ?Sized>(
    root: &ElementNode,
    selectors: &SelectorSet,
    sink: &mut S,
) -> Result<ExportReport> {
    let (document, anomalies) = build_document(root, selectors).map_err(|err| {
        error!("{}", err);
        err
    })?;

    let delivery = sink.deliver(&document, FILENAME)?;
    match &delivery {
        Delivery::Delivered { location, bytes } => {
            info!("Exported {} rows ({} bytes) to {}", document.rows(), bytes, location)
        }
        Delivery::Unsupported => debug!("Sink cannot save files, document dropped"),
    }

    Ok(ExportReport {
        records: document.rows(),
        anomalies,
        delivery,
    })
}
