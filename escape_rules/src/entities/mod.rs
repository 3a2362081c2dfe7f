//! Entity definitions: the item catalog and the character roster.

mod characters;
mod items;

pub use characters::*;
pub use items::*;
