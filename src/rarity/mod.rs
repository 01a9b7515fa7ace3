//! Core rarity engine
//!
//! Pure, side-effect-free transformation from artwork usage statistics to a
//! rarity tier plus the full probability breakdown. The only ambient state
//! is the random source used for the roll, which is injectable.

/// Quality scoring, probability derivation, and weighted tier selection
pub mod engine;
/// Combined artwork statistics and rarity outcome orchestration
pub mod stats;
/// Rarity tier enumeration and probability tables
pub mod tier;

pub use engine::RaritySelector;
pub use stats::{ArtworkStats, RarityOutcome};
pub use tier::{RarityTable, RarityTier};
