//! Host capability boundary.
//!
//! The engine never talks to a browser or windowing layer directly; it reads
//! geometry through [`source::GeometrySource`] and reacts to
//! [`source::ViewEvent`] notifications pushed by the host. [`sim::SimHost`]
//! is the deterministic implementation used by tests and the CLI.

pub mod sim;
pub mod source;
