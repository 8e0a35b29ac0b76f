use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, Node};

use crate::config::LightboxConfig;
use crate::controller::OverlaySurface;
use crate::resolve::ZoomNode;

impl ZoomNode for Element {
    fn closest(&self, selector: &str) -> Option<Self> {
        Element::closest(self, selector).ok().flatten()
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector).ok().flatten()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn current_src(&self) -> Option<String> {
        self.dyn_ref::<HtmlImageElement>().map(|img| img.current_src())
    }

    fn src(&self) -> Option<String> {
        match self.dyn_ref::<HtmlImageElement>() {
            Some(img) => Some(img.src()),
            None => self.get_attribute("src"),
        }
    }

    fn id(&self) -> String {
        Element::id(self)
    }
}

// Text-node targets resolve to their parent element.
pub fn origin_element(target: Option<EventTarget>) -> Option<Element> {
    let target = target?;
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element(),
    }
}

// Looked up by id on every call so late-rendered markup still works.
pub struct DomSurface {
    document: Document,
    overlay_id: String,
    image_id: String,
    scroll_lock_class: String,
}

impl DomSurface {
    pub fn new(document: Document, config: &LightboxConfig) -> Self {
        Self {
            document,
            overlay_id: config.overlay_id.clone(),
            image_id: config.image_id.clone(),
            scroll_lock_class: config.scroll_lock_class.clone(),
        }
    }

    fn parts(&self) -> Option<(HtmlElement, Element)> {
        let overlay = self
            .document
            .get_element_by_id(&self.overlay_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let image = self.document.get_element_by_id(&self.image_id)?;
        Some((overlay, image))
    }

    fn lock_scroll(&self, locked: bool) {
        if self.scroll_lock_class.is_empty() {
            return;
        }
        if let Some(body) = self.document.body() {
            let list = body.class_list();
            let _ = if locked {
                list.add_1(&self.scroll_lock_class)
            } else {
                list.remove_1(&self.scroll_lock_class)
            };
        }
    }
}

impl OverlaySurface for DomSurface {
    fn show(&self, src: &str) -> bool {
        let Some((overlay, image)) = self.parts() else {
            return false;
        };
        let _ = image.set_attribute("src", src);
        let _ = overlay.style().set_property("display", "flex");
        let _ = overlay.set_attribute("aria-hidden", "false");
        self.lock_scroll(true);
        true
    }

    fn hide(&self) -> bool {
        let Some((overlay, image)) = self.parts() else {
            return false;
        };
        let _ = overlay.style().set_property("display", "none");
        let _ = overlay.set_attribute("aria-hidden", "true");
        let _ = image.remove_attribute("src");
        self.lock_scroll(false);
        true
    }
}
