use crate::foundation::core::{ElementRect, Viewport};
use crate::foundation::math::clamp01;

/// Geometric model mapping element geometry to raw progress.
///
/// The two models serve structurally different interactions and keep
/// different zero/one anchors, so they remain selectable per session rather
/// than being folded into one formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackMode {
    /// Pinned content scrubbed through its extra height: 0 when the element
    /// reaches the viewport top, 1 once its bottom reaches the viewport
    /// bottom. Content no taller than the viewport has nothing to scrub
    /// through and snaps 0 -> 1 the moment its top crosses the viewport top.
    #[default]
    Sticky,
    /// Content revealed once as it crosses the viewport: 0 when the top edge
    /// enters at the bottom of the screen, 1 when it reaches the top.
    Viewport,
}

/// Compute the unsmoothed progress for one geometry sample.
///
/// `offset_px` biases the element's `top` before either model is applied,
/// shifting where the interaction starts and completes. Output is always
/// clamped to `[0, 1]`.
pub fn raw_progress(
    mode: TrackMode,
    rect: ElementRect,
    viewport: Viewport,
    offset_px: f64,
) -> f64 {
    let top = rect.top - offset_px;

    match mode {
        TrackMode::Sticky => {
            let scroll_distance = rect.height - viewport.height;
            if scroll_distance <= 0.0 {
                // Nothing to scrub through: binary completion, not a ramp.
                if top <= 0.0 { 1.0 } else { 0.0 }
            } else {
                clamp01(-top / scroll_distance)
            }
        }
        TrackMode::Viewport => {
            if viewport.height <= 0.0 {
                return 0.0;
            }
            clamp01((viewport.height - top) / viewport.height)
        }
    }
}
