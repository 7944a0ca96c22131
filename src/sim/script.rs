use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::session::story::StoryOpts;
use crate::track::sampler::TrackMode;
use crate::track::smoother::SNAP_EPSILON;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Scroll position change applied at the start of a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollKey {
    pub frame: u64,
    pub y: f64,
}

/// A scripted scroll timeline: one element, one viewport, keyed scrolls.
///
/// The scroll position holds between keys, so a script lists only the
/// frames where it changes. This is the JSON-facing model driven by the
/// `simulate` CLI command and the simulation runner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimScript {
    pub viewport_height: f64,
    /// Element top edge in document space.
    pub element_top: f64,
    pub element_height: f64,
    #[serde(default)]
    pub mode: TrackMode,
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    #[serde(default)]
    pub offset_px: f64,
    #[serde(default = "default_phase_count")]
    pub phase_count: usize,
    /// Number of animation frames to run.
    pub frames: u64,
    #[serde(default)]
    pub scroll: Vec<ScrollKey>,
}

fn default_smoothing() -> f64 {
    0.1
}

fn default_phase_count() -> usize {
    1
}

impl SimScript {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollyResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollyError::serde(format!("parse sim script JSON: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollyError::validation(format!("open sim script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check script invariants before running.
    pub fn validate(&self) -> ScrollyResult<()> {
        if !self.element_top.is_finite() {
            return Err(ScrollyError::validation("script element_top must be finite"));
        }
        if !self.element_height.is_finite() || self.element_height < 0.0 {
            return Err(ScrollyError::validation(
                "script element_height must be finite and >= 0",
            ));
        }
        if !self.viewport_height.is_finite() || self.viewport_height < 0.0 {
            return Err(ScrollyError::validation(
                "script viewport_height must be finite and >= 0",
            ));
        }
        self.story_opts().validate()?;
        if self.phase_count == 0 {
            return Err(ScrollyError::validation("script phase_count must be >= 1"));
        }
        if self.frames == 0 {
            return Err(ScrollyError::validation("script frames must be >= 1"));
        }

        let mut prev: Option<u64> = None;
        for key in &self.scroll {
            if key.frame >= self.frames {
                return Err(ScrollyError::validation(format!(
                    "scroll key frame {} is past the end ({} frames)",
                    key.frame, self.frames
                )));
            }
            if !key.y.is_finite() {
                return Err(ScrollyError::validation(format!(
                    "scroll key at frame {} has a non-finite y",
                    key.frame
                )));
            }
            if let Some(prev) = prev
                && key.frame <= prev
            {
                return Err(ScrollyError::validation(
                    "scroll keys must be strictly increasing by frame",
                ));
            }
            prev = Some(key.frame);
        }
        Ok(())
    }

    /// Session options the script describes.
    pub fn story_opts(&self) -> StoryOpts {
        StoryOpts {
            mode: self.mode,
            smoothing: self.smoothing,
            offset_px: self.offset_px,
            epsilon: SNAP_EPSILON,
        }
    }
}
