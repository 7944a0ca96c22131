use crate::foundation::math::{clamp01, lerp};

/// Linear ramp over a sub-window of a phase.
///
/// `value(t)` is 0 until `t` passes `start`, then grows at `gain` per unit
/// of `t`, clamped to `[0, 1]` at both ends. Staggering several ramps with
/// increasing starts is how a phase's lines enter one after another.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub start: f64,
    pub gain: f64,
}

impl Ramp {
    pub fn new(start: f64, gain: f64) -> Self {
        Self { start, gain }
    }

    /// Ramp that opens at `start` and saturates exactly at `t = 1`.
    ///
    /// `start` is clamped to `[0, 1]`; at exactly 1 the window is empty and
    /// the ramp never opens.
    pub fn until_end(start: f64) -> Self {
        let start = start.clamp(0.0, 1.0);
        let span = (1.0 - start).max(f64::MIN_POSITIVE);
        Self {
            start,
            gain: span.recip(),
        }
    }

    /// Evaluate the ramp at phase-local progress `t`.
    pub fn value(&self, t: f64) -> f64 {
        clamp01((clamp01(t) - self.start) * self.gain)
    }
}

/// Fade from an opacity floor up to fully opaque.
///
/// Elements that should never vanish entirely start at `floor` and reach 1
/// as the phase completes.
pub fn floor_fade(floor: f64, t: f64) -> f64 {
    lerp(floor, 1.0, clamp01(t))
}

/// Entrance travel: `rise_px` below the resting position at `t = 0`,
/// settled at 0 by `t = 1`.
pub fn entrance_lift(t: f64, rise_px: f64) -> f64 {
    (1.0 - clamp01(t)) * rise_px
}

/// Entrance scale: `base` at `t = 0`, growing by `grow` as the phase
/// completes.
pub fn entrance_scale(t: f64, base: f64, grow: f64) -> f64 {
    base + clamp01(t) * grow
}
