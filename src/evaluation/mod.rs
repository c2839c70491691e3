//! Hand power for showdown comparisons.
//!
//! Every ranking metric reduces a hand to a single [`Power`] word so that
//! showdown comparisons are plain integer comparisons:
//!
//! - [`Metric::High`]: standard poker, larger is stronger
//! - [`Metric::Lowball`]: ace-to-five lowball, smaller is stronger
//! - [`power_badugi`]: four-card badugi, smaller is stronger
//!
//! Larger pools are reduced to their best five-card selection by [`Variant`],
//! which also reports the winning [`Combo`] so callers can reveal exactly the
//! cards that mattered.
mod badugi;
mod category;
mod combo;
mod error;
mod metric;
mod occupancy;
mod power;
mod variant;

pub use badugi::*;
pub use category::*;
pub use combo::*;
pub use error::*;
pub use metric::*;
pub use occupancy::*;
pub use power::*;
pub use variant::*;
