//! Standings and pairing engine for a Swiss-system tournament.
//!
//! Both functions are pure: they take a consistent snapshot of the roster and
//! the match history and derive the ranked standings and the next round's
//! pairings from it. Nothing here touches the store.

mod pairings;
mod standings;

pub use pairings::*;
pub use standings::*;

#[cfg(test)]
#[path = "properties_tests.rs"]
mod properties_tests;

#[cfg(test)]
pub(crate) mod fixtures;
