//! Display mappings - pure lookups from game values to labels, icons and colors.
//!
//! Every function here is deterministic and side-effect free, apart from a
//! `warn!` when a lenient lookup falls back to a default.

mod items;
mod relationships;
mod time;
mod work;

pub use items::*;
pub use relationships::*;
pub use time::*;
pub use work::*;

pub use escape_rules::LookupPolicy;
