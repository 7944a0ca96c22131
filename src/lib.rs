//! Scrolly is a scroll-driven storytelling engine.
//!
//! It turns scroll geometry into the numbers a scrollytelling page animates
//! with: a normalized progress scalar, a smoothed copy of it, a narrative
//! phase index, and the per-phase style values (opacity, travel, tilt,
//! scale, blur) presentation layers apply. The public API is
//! session-oriented:
//!
//! - Implement (or reuse) a [`GeometrySource`] for your host
//! - Attach a [`StorySession`] to it
//! - Forward scroll/resize notifications, tick once per animation frame
//! - Read the progress pair back and derive styles from it
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: sampling, smoothing, phase math, and styling are
//!   pure; the same inputs always produce the same numbers.
//! - **No IO in the core**: files are touched only by the explicit
//!   load/save entry points on decks and scripts.
//!
//! For a standalone walkthrough of the concepts and architecture, see
//! [`crate::guide`].
#![forbid(unsafe_code)]

pub mod content;
pub mod foundation;
/// High-level, standalone documentation for scrolly's concepts and architecture.
pub mod guide;
pub mod host;
pub mod session;
pub mod sim;
pub mod style;
pub mod track;

pub use crate::content::deck::{
    Align, ContentDeck, HeroPhrase, NavItem, ShowcasePhase, parse_hex_rgb,
};
pub use crate::content::seed::studio_deck;
pub use crate::foundation::core::{ElementRect, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{ScrollyError, ScrollyResult};
pub use crate::host::sim::SimHost;
pub use crate::host::source::{GeometrySource, ViewEvent};
pub use crate::session::story::{StoryOpts, StoryOutput, StorySession};
pub use crate::sim::run::{SimSample, run_script};
pub use crate::sim::script::{ScrollKey, SimScript};
pub use crate::style::reveal::{Ramp, entrance_lift, entrance_scale, floor_fade};
pub use crate::style::stack::{StackOpts, StackedStyle, global_index};
pub use crate::track::phase::{active_phase, phase_local_progress, phase_progress};
pub use crate::track::sampler::{TrackMode, raw_progress};
pub use crate::track::smoother::{SNAP_EPSILON, Smoother};
