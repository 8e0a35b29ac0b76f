// In-memory stand-ins for the DOM used by the native unit tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::controller::OverlaySurface;
use crate::resolve::ZoomNode;

struct Inner {
    tag: String,
    attrs: Vec<(String, String)>,
    current_src: RefCell<Option<String>>,
    parent: RefCell<Weak<Inner>>,
    children: RefCell<Vec<FakeNode>>,
}

#[derive(Clone)]
pub struct FakeNode(Rc<Inner>);

impl FakeNode {
    pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Self {
        FakeNode(Rc::new(Inner {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            current_src: RefCell::new(None),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    pub fn append(&self, child: FakeNode) -> FakeNode {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
        child
    }

    pub fn set_current_src(&self, src: &str) {
        *self.0.current_src.borrow_mut() = Some(src.to_string());
    }

    pub fn same_node(&self, other: &FakeNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn parent(&self) -> Option<FakeNode> {
        self.0.parent.borrow().upgrade().map(FakeNode)
    }

    // Supports the single-token selectors the lightbox uses: `.class`, `#id`, `[attr]`, `tag`.
    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.attribute("class")
                .is_some_and(|c| c.split_whitespace().any(|t| t == class))
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id() == id
        } else if let Some(attr) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            self.attribute(attr).is_some()
        } else {
            self.0.tag.eq_ignore_ascii_case(selector)
        }
    }
}

impl ZoomNode for FakeNode {
    fn closest(&self, selector: &str) -> Option<Self> {
        let mut cur = Some(self.clone());
        while let Some(node) = cur {
            if node.matches(selector) {
                return Some(node);
            }
            cur = node.parent();
        }
        None
    }

    fn query(&self, selector: &str) -> Option<Self> {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.query(selector) {
                return Some(found);
            }
        }
        None
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn current_src(&self) -> Option<String> {
        self.0.current_src.borrow().clone()
    }

    fn src(&self) -> Option<String> {
        self.attribute("src")
    }

    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    Show(String),
    Hide,
}

// Records every surface mutation. Detached mimics missing overlay markup.
#[derive(Clone)]
pub struct FakeSurface {
    attached: Rc<Cell<bool>>,
    pub calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl FakeSurface {
    pub fn attached() -> Self {
        FakeSurface {
            attached: Rc::new(Cell::new(true)),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn detached() -> Self {
        let surface = FakeSurface::attached();
        surface.set_attached(false);
        surface
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }
}

impl OverlaySurface for FakeSurface {
    fn show(&self, src: &str) -> bool {
        if !self.attached.get() {
            return false;
        }
        self.calls.borrow_mut().push(SurfaceCall::Show(src.to_string()));
        true
    }

    fn hide(&self) -> bool {
        if !self.attached.get() {
            return false;
        }
        self.calls.borrow_mut().push(SurfaceCall::Hide);
        true
    }
}
