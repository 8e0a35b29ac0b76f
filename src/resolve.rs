use crate::model::pick_source;

// The slice of the Element API resolution needs; also implemented by the test tree.
pub trait ZoomNode: Sized {
    fn closest(&self, selector: &str) -> Option<Self>;
    fn query(&self, selector: &str) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn current_src(&self) -> Option<String>;
    fn src(&self) -> Option<String>;
    fn id(&self) -> String;
}

#[derive(Clone, Copy, Debug)]
pub struct Selectors<'a> {
    pub zoomable: &'a str,
    pub image_box: &'a str,
    pub zoom_src_attribute: &'a str,
}

// Zoomable ancestor first, else the image box's own zoomable.
pub fn zoom_target_from<N: ZoomNode>(origin: &N, sel: &Selectors<'_>) -> Option<N> {
    if let Some(z) = origin.closest(sel.zoomable) {
        return Some(z);
    }
    origin.closest(sel.image_box)?.query(sel.zoomable)
}

pub fn zoom_source<N: ZoomNode>(target: &N, sel: &Selectors<'_>) -> Option<String> {
    pick_source(
        target.attribute(sel.zoom_src_attribute),
        target.current_src(),
        target.src(),
    )
}
