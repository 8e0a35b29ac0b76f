use crate::config::LightboxConfig;
use crate::model::{is_escape_key, Disposition, Interaction, OverlayAction, OverlayState};
use crate::resolve::{zoom_source, zoom_target_from, Selectors, ZoomNode};
use crate::util::clog;

// Both calls return false when the overlay markup is missing.
pub trait OverlaySurface {
    fn show(&self, src: &str) -> bool;
    fn hide(&self) -> bool;
}

// Backdrop and close control always close; the enlarged image depends on the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosePolicy {
    BackdropImageOrControl,
    BackdropOrControl,
}

impl ClosePolicy {
    pub fn from_config(config: &LightboxConfig) -> Self {
        if config.close_on_image_click {
            ClosePolicy::BackdropImageOrControl
        } else {
            ClosePolicy::BackdropOrControl
        }
    }
}

pub struct OverlayController<S> {
    state: OverlayState,
    surface: S,
    config: LightboxConfig,
    policy: ClosePolicy,
}

impl<S: OverlaySurface> OverlayController<S> {
    pub fn new(state: OverlayState, surface: S, config: LightboxConfig) -> Self {
        let policy = ClosePolicy::from_config(&config);
        Self { state, surface, config, policy }
    }

    #[cfg(test)]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn policy(&self) -> ClosePolicy {
        self.policy
    }

    fn selectors(&self) -> Selectors<'_> {
        Selectors {
            zoomable: &self.config.zoomable_selector,
            image_box: &self.config.image_box_selector,
            zoom_src_attribute: &self.config.zoom_src_attribute,
        }
    }

    pub fn open(&mut self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        if !self.surface.show(src) {
            clog("lightbox: overlay markup missing, open ignored");
            return false;
        }
        self.state.apply(OverlayAction::Open { src: src.to_string() });
        clog(&format!("lightbox: open {src}"));
        true
    }

    // Clears the state even if the markup vanished while open.
    pub fn close(&mut self) -> bool {
        let Some(src) = self.state.source() else {
            return false;
        };
        clog(&format!("lightbox: close {src}"));
        if !self.surface.hide() {
            clog("lightbox: overlay markup missing on close");
        }
        self.state.apply(OverlayAction::Close);
        true
    }

    pub fn interact<N: ZoomNode>(&mut self, kind: Interaction, origin: &N) -> Disposition {
        let sel = self.selectors();
        let Some(target) = zoom_target_from(origin, &sel) else {
            return Disposition::Ignore;
        };
        if !kind.commits() {
            return Disposition::Suppress;
        }
        let src = zoom_source(&target, &sel);
        match src {
            Some(src) if self.open(&src) => Disposition::SuppressAndOpen,
            _ => Disposition::Suppress,
        }
    }

    pub fn dismiss_click<N: ZoomNode>(&mut self, origin: &N) -> bool {
        if !self.state.is_open() {
            return false;
        }
        let id = origin.id();
        let hit = id == self.config.overlay_id
            || (id == self.config.image_id && self.policy == ClosePolicy::BackdropImageOrControl)
            || origin
                .closest(&format!("#{}", self.config.close_control_id))
                .is_some();
        hit && self.close()
    }

    pub fn key(&mut self, key: &str) -> bool {
        is_escape_key(key) && self.close()
    }
}
