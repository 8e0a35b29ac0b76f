use serde::Deserialize;
use web_sys::Document;

use crate::util::cwarn;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "lightbox-config";

/// Ids, selectors and toggles for the lightbox. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub overlay_id: String,
    pub image_id: String,
    /// Optional explicit close button; absent markup is fine.
    pub close_control_id: String,
    pub zoomable_selector: String,
    pub image_box_selector: String,
    /// Attribute naming the full-resolution image, preferred over `currentSrc`/`src`.
    pub zoom_src_attribute: String,
    /// Class added to `<body>` while the overlay is open.
    pub scroll_lock_class: String,
    pub close_on_image_click: bool,
    pub debug: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            overlay_id: "lightbox".into(),
            image_id: "lightbox-img".into(),
            close_control_id: "lightbox-close".into(),
            zoomable_selector: ".zoomable".into(),
            image_box_selector: ".imgbox".into(),
            zoom_src_attribute: "data-zoom-src".into(),
            scroll_lock_class: "no-scroll".into(),
            close_on_image_click: true,
            debug: false,
        }
    }
}

impl LightboxConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults on absence or bad JSON.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                cwarn(&format!("lightbox: ignoring #{CONFIG_ELEMENT_ID}: {err}"));
                Self::default()
            }
        }
    }
}
