use crate::foundation::error::{ScrollyError, ScrollyResult};

pub use kurbo::{Point, Rect, Vec2};

/// Vertical extent of the host viewport, in CSS pixels.
///
/// The engine only tracks the vertical axis, so the viewport reduces to its
/// height. A zero height is representable (collapsed embed frames report it)
/// and handled by the sampler; negative or non-finite heights are rejected.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> ScrollyResult<Self> {
        if !height.is_finite() || height < 0.0 {
            return Err(ScrollyError::validation(
                "Viewport height must be finite and >= 0",
            ));
        }
        Ok(Self { height })
    }
}

/// Layout rectangle of a tracked element, reduced to the vertical axis.
///
/// `top` is the signed distance from the viewport's top edge to the element's
/// top edge (negative once the element has scrolled past it). `height` is the
/// element's layout height. Both are read back from the host on demand; the
/// engine never stores stale copies.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Reduce a full 2D layout rect (viewport-relative) to the vertical axis.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            height: rect.height(),
        }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
