/// Tunables for stacked-narrative styling.
///
/// Defaults reproduce the studio hero look: phrases flip through a shared
/// anchor in depth, fading and blurring as they leave the active slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StackOpts {
    /// Opacity lost per unit of phase distance.
    pub fade_rate: f64,
    /// Vertical travel in pixels per unit of phase distance.
    pub rise_px: f64,
    /// Backward tilt in degrees per unit of phase distance.
    pub tilt_deg: f64,
    /// Scale lost per unit of phase distance.
    pub scale_rate: f64,
    /// Lower bound the scale never drops below.
    pub min_scale: f64,
    /// Blur in pixels per unit of phase distance.
    pub blur_px: f64,
    /// Z travel in pixels per unit of phase distance.
    pub depth_px: f64,
    /// Half-width of the distance band that counts as active.
    pub active_band: f64,
}

impl Default for StackOpts {
    fn default() -> Self {
        Self {
            fade_rate: 1.5,
            rise_px: 100.0,
            tilt_deg: 45.0,
            scale_rate: 0.5,
            min_scale: 0.5,
            blur_px: 8.0,
            depth_px: 100.0,
            active_band: 0.6,
        }
    }
}

/// Derived visual values for one phase of a stacked narrative.
///
/// Lengths are CSS pixels, rotation is degrees, opacity and scale are
/// plain factors. Signed values keep the sign of the phase distance, so a
/// passed phase and an upcoming one move in opposite directions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StackedStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub depth: f64,
    pub rotate_x_deg: f64,
    pub scale: f64,
    pub blur: f64,
    pub active: bool,
}

/// Fractional phase position for a stacked narrative.
///
/// The half-phase shrink makes the final phase land fully in place exactly
/// at progress 1 instead of being half flipped away.
pub fn global_index(progress: f64, phase_count: usize) -> f64 {
    progress * (phase_count as f64 - 0.5)
}

impl StackOpts {
    /// Style phase `phase_index` given the narrative's fractional position.
    ///
    /// Distance 0 is the fully active slot: opaque, unblurred, untilted,
    /// scale 1. Everything degrades linearly with distance until the clamped
    /// floors (opacity 0, `min_scale`) catch it.
    pub fn style_at(&self, global_index: f64, phase_index: usize) -> StackedStyle {
        let dist = global_index - phase_index as f64;
        let abs = dist.abs();

        StackedStyle {
            opacity: (1.0 - abs * self.fade_rate).max(0.0),
            translate_y: dist * -self.rise_px,
            depth: dist * self.depth_px,
            rotate_x_deg: dist * -self.tilt_deg,
            scale: (1.0 - abs * self.scale_rate).max(self.min_scale),
            blur: abs * self.blur_px,
            active: abs < self.active_band,
        }
    }
}
