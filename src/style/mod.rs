//! Derived visual values.
//!
//! Progress in, per-phase style numbers out. [`stack`] flips phases through
//! a shared depth anchor; [`reveal`] staggers a phase's own content in. Both
//! are pure mappers over the values the tracking core produces.

pub mod reveal;
pub mod stack;
