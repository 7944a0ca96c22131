//! Deterministic scroll simulation.
//!
//! Scripts describe a scroll timeline; the runner drives a real session
//! through a [`crate::host::sim::SimHost`] and records what a page would
//! have seen each frame. This is the crate's executable end-to-end surface.

pub mod run;
pub mod script;
