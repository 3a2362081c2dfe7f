//! # Escape Rules
//!
//! The rules crate for La Fuga - item catalog, character roster, day/time and
//! work assignment definitions, and the game state with its mutations.
//! This crate is the single source of truth for game data and does not contain
//! any presentation logic.

pub mod config;
pub mod entities;
pub mod error;
pub mod game_state;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use game_state::*;
pub use mechanics::*;
