//! Ambient background animation for the folio page.
//!
//! Provides the drifting starfield drawn behind the page content. The
//! engine owns its surface dimensions and particle collection and is
//! stepped explicitly once per drawn frame by the application loop, so
//! the simulation can be driven deterministically in tests.

mod rng;
mod starfield;

pub use rng::SimpleRng;
pub use starfield::{FALL_RATE, STAR_COUNT, Star, Starfield, WRAP_RESET_Y};
