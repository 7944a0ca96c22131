//! # Scrolly guide
//!
//! This module is a standalone, end-to-end walkthrough of scrolly's
//! architecture and public API. It is intentionally detailed so host
//! integrations (browser bridges, native shells, tests) can build on a shared
//! mental model of what "tracking a scroll story" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository
//! `README.md`. If you are integrating or extending the engine, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`GeometrySource`](crate::GeometrySource): the host capability a session reads geometry through
//! - [`ElementRect`](crate::ElementRect) / [`Viewport`](crate::Viewport): the vertical-axis geometry sample
//! - [`TrackMode`](crate::TrackMode): which geometric model maps geometry to progress
//! - [`StorySession`](crate::StorySession): per-element state machine; events in, progress pair out
//! - [`Smoother`](crate::Smoother): exponential low-pass filter ticked once per animation frame
//! - [`active_phase`](crate::active_phase) / [`phase_local_progress`](crate::phase_local_progress): narrative phase indexing
//! - [`StackOpts`](crate::StackOpts) / [`Ramp`](crate::Ramp): derived per-phase style values
//!
//! The tracking pipeline is explicitly staged:
//!
//! 1. Sample geometry into raw progress: [`raw_progress`](crate::raw_progress)
//! 2. Filter it per frame: [`StorySession::on_frame`](crate::StorySession::on_frame)
//! 3. Partition into phases and derive styles: [`StackOpts::style_at`](crate::StackOpts::style_at)
//!
//! ---
//!
//! ## The two geometric models
//!
//! [`TrackMode::Sticky`](crate::TrackMode) is for pinned sections taller than
//! the viewport. While the section is pinned, the reader scrubs through its
//! extra height: progress is the scrolled-past distance divided by
//! `height - viewport_height`, clamped to `[0, 1]`. A section with no extra
//! height has nothing to scrub, so progress snaps straight from 0 to 1 the
//! moment its top crosses the viewport top.
//!
//! [`TrackMode::Viewport`](crate::TrackMode) is for one-shot reveals:
//! progress is how far the element's top edge has climbed from the bottom of
//! the viewport to its top, `(viewport_height - top) / viewport_height`. A
//! zero-height viewport reports zero progress rather than dividing by zero.
//!
//! Both models subtract the session's `offset_px` from the sampled top edge
//! first, shifting where the interaction starts and completes.
//!
//! ---
//!
//! ## The smoothing contract
//!
//! Raw progress changes in steps, one per scroll event. Animating from it
//! directly looks stuttery, so sessions keep a second value that chases the
//! raw one: every frame it moves a fixed fraction (`smoothing`) of the
//! remaining distance. The filter never overshoots and never oscillates, and
//! once the remaining error drops under the snap threshold the value lands
//! on the target exactly, so "settled" is a real state rather than an
//! asymptote. Hosts can stop scheduling frames on
//! [`Smoother::is_settled`](crate::Smoother::is_settled) and resume on the
//! next notification.
//!
//! Use `progress` for placement that must stay glued to the scroll position
//! (progress bars, scrub heads) and `smooth_progress` for anything that
//! visibly moves.
//!
//! ---
//!
//! ## A session end to end
//!
//! The following example drives a session by hand with the deterministic
//! in-memory host. A browser bridge would do exactly the same calls from its
//! scroll/resize listeners and its animation-frame callback.
//!
//! ```rust,no_run
//! use scrolly::{SimHost, StoryOpts, StorySession, TrackMode, ViewEvent};
//!
//! # fn main() -> scrolly::ScrollyResult<()> {
//! // A 2000px pinned section at the top of the document, 1000px viewport.
//! let mut host = SimHost::new(0.0, 2000.0, 1000.0)?;
//! host.set_scroll_y(250.0);
//!
//! let mut session = StorySession::attach(
//!     host,
//!     StoryOpts {
//!         mode: TrackMode::Sticky,
//!         ..StoryOpts::default()
//!     },
//! )?;
//! // The eager attach sample: 250px into a 1000px scrub.
//! assert_eq!(session.progress(), 0.25);
//!
//! session.source_mut().set_scroll_y(500.0);
//! session.notify(ViewEvent::Scrolled);
//! assert_eq!(session.progress(), 0.5);
//!
//! let smooth = session.on_frame();
//! assert!(smooth > 0.0 && smooth < session.progress());
//!
//! session.detach();
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - Construction validates options and takes the eager initial sample, so
//!   the raw value is correct before the first event.
//! - A missing element (`element_rect()` returning `None`) is a benign
//!   no-op; the previous value stays.
//! - After [`StorySession::detach`](crate::StorySession::detach) every entry
//!   point is inert and both values stay frozen.
//!
//! ---
//!
//! ## Phases and styles
//!
//! A story with `n` beats splits the `[0, 1]` progress range into `n` equal
//! buckets. [`active_phase`](crate::active_phase) says which bucket the
//! reader is in (progress 1 belongs to the last bucket, not a phantom one
//! past the end); [`phase_local_progress`](crate::phase_local_progress)
//! rescales the position inside that bucket back to `[0, 1]`; and
//! [`phase_progress`](crate::phase_progress) answers the same question for
//! an arbitrary phase's window, saturating outside it.
//!
//! On top of the phase values sit two pure style mappers:
//!
//! - [`StackOpts::style_at`](crate::StackOpts::style_at) flips phases
//!   through a shared depth anchor. Each phase's signed distance from the
//!   narrative position drives opacity, vertical travel, z-depth, tilt,
//!   scale, and blur; the defaults reproduce the studio hero look.
//! - [`Ramp`](crate::Ramp), [`floor_fade`](crate::floor_fade),
//!   [`entrance_lift`](crate::entrance_lift), and
//!   [`entrance_scale`](crate::entrance_scale) stagger a single phase's
//!   content in: each line opens later in the phase-local window and lands
//!   by its end.
//!
//! All style outputs are plain numbers (pixels, degrees, factors). The crate
//! computes values for a host renderer; it never rasterizes.
//!
//! ---
//!
//! ## Content decks
//!
//! [`ContentDeck`](crate::ContentDeck) is the validated, JSON-facing model
//! of what a page says: hero phrases, showcase phases, navigation items.
//! Tracking never reads it; sessions only need the phase counts. The
//! built-in [`studio_deck`](crate::studio_deck) ships real content so the
//! CLI and demos run without a file on disk, and
//! [`ContentDeck::validate`](crate::ContentDeck::validate) enforces the
//! invariants hosts rely on (non-empty sections, `#rrggbb` colors, unique
//! contiguous 1-based orders).
//!
//! ---
//!
//! ## Deterministic simulation and the CLI
//!
//! [`SimScript`](crate::SimScript) describes a scroll timeline: one element,
//! one viewport, keyed scroll positions that hold between keys.
//! [`run_script`](crate::run_script) drives a real session through a
//! [`SimHost`](crate::SimHost) and records a [`SimSample`](crate::SimSample)
//! per frame. This is how the engine's behavior is exercised end to end
//! without a browser, and what the `scrolly` binary exposes:
//!
//! - `scrolly simulate --in script.json --out samples.json` runs a script
//!   and dumps the samples
//! - `scrolly seed --out deck.json` writes the built-in studio deck
//! - `scrolly validate --in deck.json` checks a deck and prints a summary
//!
//! Because the simulation is deterministic, sample files diff cleanly and
//! make good regression fixtures.
