//! Session-oriented tracking API.
//!
//! The public entrypoint is [`story::StorySession`]: attach it to a
//! [`crate::host::source::GeometrySource`], forward host notifications, tick
//! it from the frame loop, read the progress pair back.

pub mod story;
