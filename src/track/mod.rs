//! The tracking core: geometry to normalized progress, smoothing, phases.
//!
//! Everything in this area is pure and total. Geometry comes in through the
//! value types of [`crate::foundation::core`]; the session layer owns state
//! and scheduling.

pub mod phase;
pub mod sampler;
pub mod smoother;
