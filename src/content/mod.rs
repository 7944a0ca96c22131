//! Narrative content model.
//!
//! Decks describe what a page says; tracking only cares how far through it
//! the reader is. [`deck`] is the validated JSON boundary, [`seed`] the
//! built-in studio content.

pub mod deck;
pub mod seed;
