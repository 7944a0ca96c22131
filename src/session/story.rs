use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::host::source::{GeometrySource, ViewEvent};
use crate::track::sampler::{TrackMode, raw_progress};
use crate::track::smoother::{SNAP_EPSILON, Smoother};

/// Options controlling a [`StorySession`].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryOpts {
    /// Geometric model mapping element position to progress.
    pub mode: TrackMode,
    /// Per-frame smoothing weight in `(0, 1]`; lower values feel floatier.
    pub smoothing: f64,
    /// Pixel bias subtracted from the element's sampled top edge.
    pub offset_px: f64,
    /// Remaining-error threshold at which smoothing lands exactly.
    pub epsilon: f64,
}

impl Default for StoryOpts {
    fn default() -> Self {
        Self {
            mode: TrackMode::Sticky,
            smoothing: 0.1,
            offset_px: 0.0,
            epsilon: SNAP_EPSILON,
        }
    }
}

impl StoryOpts {
    /// Check option ranges without building a session.
    pub fn validate(&self) -> ScrollyResult<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(ScrollyError::validation(
                "StoryOpts smoothing must be in (0, 1]",
            ));
        }
        if !self.offset_px.is_finite() {
            return Err(ScrollyError::validation("StoryOpts offset_px must be finite"));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ScrollyError::validation("StoryOpts epsilon must be > 0"));
        }
        Ok(())
    }
}

/// The value pair a presentation layer consumes each frame.
///
/// `progress` is the latest raw sample, `smooth_progress` the filtered value
/// that trails it. Use raw for placement that must stay glued to the scroll
/// position and smooth for anything that moves on screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoryOutput {
    pub progress: f64,
    pub smooth_progress: f64,
}

/// Per-element tracking session: geometry events in, progress pair out.
///
/// A session owns its [`GeometrySource`] and two scalars. Host notifications
/// update the raw value through [`notify`](Self::notify); the host's frame
/// loop calls [`on_frame`](Self::on_frame) to advance the smoothed value one
/// tick. Construction samples eagerly, so the raw value is correct before the
/// first event arrives. After [`detach`](Self::detach) every entry point is
/// inert and both values stay frozen.
#[derive(Clone, Debug)]
pub struct StorySession<S: GeometrySource> {
    source: S,
    mode: TrackMode,
    offset_px: f64,
    raw: f64,
    smoother: Smoother,
    attached: bool,
}

impl<S: GeometrySource> StorySession<S> {
    /// Attach to a geometry source and take the eager initial sample.
    pub fn attach(source: S, opts: StoryOpts) -> ScrollyResult<Self> {
        opts.validate()?;
        let smoother = Smoother::with_epsilon(opts.smoothing, opts.epsilon)?;
        let mut session = Self {
            source,
            mode: opts.mode,
            offset_px: opts.offset_px,
            raw: 0.0,
            smoother,
            attached: true,
        };
        session.sample();
        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    /// React to a host notification by resampling geometry.
    ///
    /// Scrolls and resizes both invalidate the previous sample, so they take
    /// the same path. Inert after detach.
    pub fn notify(&mut self, event: ViewEvent) {
        if !self.attached {
            return;
        }
        self.sample();
    }

    /// Advance the smoothed value one animation frame and return it.
    ///
    /// Inert after detach: the frozen value is returned unchanged.
    pub fn on_frame(&mut self) -> f64 {
        if !self.attached {
            return self.smoother.value();
        }
        self.smoother.tick(self.raw)
    }

    /// Latest raw progress sample in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.raw
    }

    /// Smoothed progress as of the last frame tick.
    pub fn smooth_progress(&self) -> f64 {
        self.smoother.value()
    }

    /// Both values as one record.
    pub fn output(&self) -> StoryOutput {
        StoryOutput {
            progress: self.raw,
            smooth_progress: self.smoother.value(),
        }
    }

    /// End the session. Subsequent notifications and frame ticks are inert.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable host access, for hosts driven through the session (the
    /// simulator scrolls its [`crate::host::sim::SimHost`] this way).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn sample(&mut self) {
        // A missing element is a benign no-op; the previous value stays.
        let Some(rect) = self.source.element_rect() else {
            return;
        };
        let viewport = self.source.viewport();
        self.raw = raw_progress(self.mode, rect, viewport, self.offset_px);
    }
}
