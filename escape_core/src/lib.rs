//! # Escape Core
//!
//! The runtime of La Fuga. This crate owns the play session built on
//! `escape_rules`, notifies observers about state changes, and turns game
//! data into text for the player.
//!
//! ## Core Components
//!
//! - **store**: Owned game store with action dispatch and selector subscriptions
//! - **events**: Actions accepted by the store and the change sets they produce
//! - **display**: Pure lookups from items, scores, periods and jobs to labels, icons and colors
//! - **presentation**: Plain-text components (narrative view, indicators, panels)
//!
//! ## Design Philosophy
//!
//! - **Owned State**: The store is a value passed by reference, never a global
//! - **Total Operations**: Store actions accept any input and never fail
//! - **Stateless Display**: Display functions are deterministic table lookups

pub mod display;
pub mod error;
pub mod events;
pub mod presentation;
pub mod store;

pub use display::*;
pub use error::*;
pub use events::*;
pub use presentation::*;
pub use store::*;
