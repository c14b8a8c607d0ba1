//! In-page entry point (wasm32 + `wasm` feature)
//!
//! Load the module on the answers page and call `exportAnswers()` from the
//! console. Diagnostics go to the browser console; the page keeps running
//! whatever happens.

use crate::dom::web::snapshot_document;
use crate::pipeline::export;
use crate::selectors::SelectorSet;
use crate::sink::{BrowserDownloadSink, Delivery};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Snapshot the page, build the CSV, and trigger the download
#[wasm_bindgen(js_name = exportAnswers)]
pub fn export_answers() {
    let Some(root) = snapshot_document() else {
        console::error_1(&JsValue::from_str("No document to export from"));
        return;
    };

    match export(&root, &SelectorSet::default(), &mut BrowserDownloadSink::new()) {
        Ok(report) => {
            for anomaly in &report.anomalies {
                console::log_1(&JsValue::from_str(&anomaly.to_string()));
            }
            if report.delivery == Delivery::Unsupported {
                console::warn_1(&JsValue::from_str("Download not supported in this browser"));
            }
        }
        Err(err) => console::error_1(&JsValue::from_str(&err.to_string())),
    }
}
