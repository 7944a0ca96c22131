use crate::foundation::core::{ElementRect, Viewport};

/// Host notifications a tracking session reacts to.
///
/// Scrolls and resizes both invalidate sampled geometry, so a session treats
/// them identically; the distinction is kept so hosts can forward their
/// native events unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewEvent {
    /// The scroll position changed.
    Scrolled,
    /// The viewport geometry changed.
    Resized,
}

/// Capability a session reads geometry through.
///
/// Contract: `element_rect` returns the tracked element's current
/// viewport-relative rectangle, or `None` while the element is not mounted.
/// A `None` sample is a benign no-op for the session; the previous progress
/// stays in place. `viewport` must always answer.
pub trait GeometrySource {
    fn element_rect(&self) -> Option<ElementRect>;
    fn viewport(&self) -> Viewport;
}
