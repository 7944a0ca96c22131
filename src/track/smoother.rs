use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::foundation::math::lerp;

/// Default convergence threshold: once the remaining error is below this the
/// displayed value snaps to the target exactly instead of creeping forever.
pub const SNAP_EPSILON: f64 = 1e-4;

/// Exponential low-pass filter over a scalar target.
///
/// Each [`tick`](Smoother::tick) moves the displayed value a fixed fraction
/// of the remaining distance toward the target, so per-event jitter in the
/// target becomes continuous motion in the output. For a factor `f` and a
/// constant target, the remaining error decays as `(1 - f)^n`; once it drops
/// under the snap threshold the value lands on the target exactly.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    value: f64,
    factor: f64,
    epsilon: f64,
}

impl Smoother {
    /// Build a smoother starting at 0 with the default snap threshold.
    ///
    /// `factor` is the per-tick interpolation weight: values near 0 are slow
    /// and floaty, 1 follows the target instantly. Must lie in `(0, 1]`.
    pub fn new(factor: f64) -> ScrollyResult<Self> {
        Self::with_epsilon(factor, SNAP_EPSILON)
    }

    /// Build a smoother with an explicit snap threshold.
    pub fn with_epsilon(factor: f64, epsilon: f64) -> ScrollyResult<Self> {
        if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
            return Err(ScrollyError::validation(
                "smoothing factor must be in (0, 1]",
            ));
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ScrollyError::validation("snap epsilon must be > 0"));
        }
        Ok(Self {
            value: 0.0,
            factor,
            epsilon,
        })
    }

    /// Advance one frame toward `target` and return the new displayed value.
    pub fn tick(&mut self, target: f64) -> f64 {
        let diff = target - self.value;
        if diff.abs() < self.epsilon {
            self.value = target;
        } else {
            self.value = lerp(self.value, target, self.factor);
        }
        self.value
    }

    /// Current displayed value without advancing.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True once the displayed value has landed on `target` exactly.
    ///
    /// A host may stop scheduling frames when this holds and resume on the
    /// next target change; motion resumes from the landed value either way.
    pub fn is_settled(&self, target: f64) -> bool {
        self.value == target
    }

    /// Jump the displayed value without animating (session re-seeding).
    pub fn reset(&mut self, value: f64) {
        self.value = value;
    }
}
