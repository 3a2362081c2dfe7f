//! Text presentation components.
//!
//! Components are plain structs of display options ("props"). They read the
//! game state and the display tables and produce text; they never mutate.

mod indicators;
mod narrative;
mod panels;

pub use indicators::*;
pub use narrative::*;
pub use panels::*;
