use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

use crate::config::LightboxConfig;
use crate::controller::OverlayController;
use crate::dom::{origin_element, DomSurface};
use crate::model::{Interaction, OverlayState};
use crate::util::{clog, set_debug};

pub type SharedController = Rc<RefCell<OverlayController<DomSurface>>>;

pub fn build_controller(document: &Document, config: LightboxConfig) -> SharedController {
    set_debug(config.debug);
    let surface = DomSurface::new(document.clone(), &config);
    Rc::new(RefCell::new(OverlayController::new(OverlayState::default(), surface, config)))
}

// Document-level listeners driving one controller. Dropping it removes them.
pub struct LightboxListeners {
    document: Document,
    interact_cb: Closure<dyn FnMut(Event)>,
    dismiss_cb: Closure<dyn FnMut(Event)>,
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
    attached: bool,
}

impl LightboxListeners {
    pub fn install_from_page(document: &Document) -> Self {
        let config = LightboxConfig::from_document(document);
        Self::install(document, build_controller(document, config))
    }

    pub fn install(document: &Document, controller: SharedController) -> Self {
        // Capture phase: resolve the zoom target before page handlers or defaults run.
        let interact_cb = {
            let ctrl = controller.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let Some(kind) = Interaction::from_event_type(&e.type_()) else {
                    return;
                };
                let Some(origin) = origin_element(e.target()) else {
                    return;
                };
                let Ok(mut c) = ctrl.try_borrow_mut() else {
                    return;
                };
                let disposition = c.interact(kind, &origin);
                drop(c);
                if disposition.suppresses() {
                    e.prevent_default();
                    e.stop_propagation();
                    e.stop_immediate_propagation();
                }
            }) as Box<dyn FnMut(_)>)
        };
        for ty in Interaction::EVENT_TYPES {
            let _ = document.add_event_listener_with_callback_and_bool(
                ty,
                interact_cb.as_ref().unchecked_ref(),
                true,
            );
        }

        // Bubble phase: an opening click was already stopped above, so it never lands here.
        let dismiss_cb = {
            let ctrl = controller.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let Some(origin) = origin_element(e.target()) else {
                    return;
                };
                if let Ok(mut c) = ctrl.try_borrow_mut() {
                    c.dismiss_click(&origin);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let _ = document.add_event_listener_with_callback("click", dismiss_cb.as_ref().unchecked_ref());

        let keydown_cb = {
            let ctrl = controller.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Ok(mut c) = ctrl.try_borrow_mut() {
                    c.key(&e.key());
                }
            }) as Box<dyn FnMut(_)>)
        };
        let _ = document.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());

        clog(&format!(
            "lightbox: listeners installed, close policy {:?}",
            controller.borrow().policy()
        ));
        Self {
            document: document.clone(),
            interact_cb,
            dismiss_cb,
            keydown_cb,
            attached: true,
        }
    }

    pub fn detach(mut self) {
        self.remove_all();
    }

    fn remove_all(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        for ty in Interaction::EVENT_TYPES {
            let _ = self.document.remove_event_listener_with_callback_and_bool(
                ty,
                self.interact_cb.as_ref().unchecked_ref(),
                true,
            );
        }
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.dismiss_cb.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown_cb.as_ref().unchecked_ref());
        clog("lightbox: listeners detached");
    }
}

impl Drop for LightboxListeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
