//! Chip distribution at showdown.
//!
//! A showdown resolves one or more scoring [`Mode`]s. Each mode has its own
//! [`Podium`] of tied positions and its own list of [`Pot`]s, main pot first.
//! Every pot goes to the strongest tie group holding at least one eligible
//! seat, split evenly, with odd chips going to the lowest positions.
mod error;
mod event;
mod podium;
mod pot;
mod seat;
mod showdown;

pub use error::*;
pub use event::*;
pub use podium::*;
pub use pot::*;
pub use seat::*;
pub use showdown::*;
