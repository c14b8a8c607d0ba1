//! Browser download sink (wasm32 only)
//!
//! Wraps the document in a CSV blob and clicks a temporary `<a download>`
//! link. Browsers whose anchors lack the `download` property get
//! [`Delivery::Unsupported`] and no link is inserted.

use super::{Delivery, Sink};
use crate::error::SinkError;
use crate::export::{Document, MIME_TYPE};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Triggers a file save in the current page
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloadSink;

impl BrowserDownloadSink {
    /// Create the sink
    pub fn new() -> Self {
        Self
    }
}

fn js_err(err: JsValue) -> SinkError {
    SinkError::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Sink for BrowserDownloadSink {
    fn deliver(&mut self, document: &Document, filename: &str) -> Result<Delivery, SinkError> {
        let Some(page) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(Delivery::Unsupported);
        };
        let Some(body) = page.body() else {
            return Ok(Delivery::Unsupported);
        };

        let link: HtmlAnchorElement = page
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|el| js_err(el.into()))?;
        let supported = js_sys::Reflect::get(&link, &JsValue::from_str("download"))
            .map(|value| !value.is_undefined())
            .unwrap_or(false);
        if !supported {
            debug!("Anchor download attribute unsupported, skipping save");
            return Ok(Delivery::Unsupported);
        }

        let parts = js_sys::Array::of1(&JsValue::from_str(document.as_str()));
        let options = BlobPropertyBag::new();
        options.set_type(MIME_TYPE);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        link.set_href(&url);
        link.set_download(filename);
        body.append_child(&link).map_err(js_err)?;
        link.click();
        body.remove_child(&link).map_err(js_err)?;
        Url::revoke_object_url(&url).map_err(js_err)?;

        Ok(Delivery::Delivered {
            location: filename.to_string(),
            bytes: document.as_bytes().len(),
        })
    }
}
