// Overlay state and event classification. No DOM access here.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    /// Image currently shown in the overlay. `None` while closed.
    source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    Open { src: String },
    Close,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Applies an action in place. Returns whether anything changed.
    pub fn apply(&mut self, action: OverlayAction) -> bool {
        match action {
            OverlayAction::Open { src } => {
                // An empty source never opens; keeps `is_open` tied to a real image.
                if src.is_empty() || self.source.as_deref() == Some(src.as_str()) {
                    return false;
                }
                self.source = Some(src);
                true
            }
            OverlayAction::Close => self.source.take().is_some(),
        }
    }
}

/// The three DOM events that run target resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    PointerDown,
    TouchStart,
    Click,
}

impl Interaction {
    pub const EVENT_TYPES: [&'static str; 3] = ["mousedown", "touchstart", "click"];

    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "mousedown" => Some(Interaction::PointerDown),
            "touchstart" => Some(Interaction::TouchStart),
            "click" => Some(Interaction::Click),
            _ => None,
        }
    }

    /// Only a click commits a transition; the others just pre-empt browser defaults.
    pub fn commits(self) -> bool {
        matches!(self, Interaction::Click)
    }
}

/// What the listener should do with the event it was handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Ignore,
    Suppress,
    SuppressAndOpen,
}

impl Disposition {
    pub fn suppresses(self) -> bool {
        !matches!(self, Disposition::Ignore)
    }
}

/// First non-empty candidate wins: zoom override, rendered source, static source.
pub fn pick_source(
    zoom_override: Option<String>,
    current_src: Option<String>,
    src: Option<String>,
) -> Option<String> {
    [zoom_override, current_src, src]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
}

pub fn is_escape_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}
