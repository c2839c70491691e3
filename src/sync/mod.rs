//! Pacing primitives for showdown consumers.
//!
//! A [`Gate`] counts interested parties and lets a task wait until every
//! one of them has left. A [`GatedLoop`] repeats a body on a background
//! task, passing through its gate before every iteration.
mod gate;
mod gated;

pub use gate::*;
pub use gated::*;
