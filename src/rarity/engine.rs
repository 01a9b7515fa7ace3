//! Quality scoring, tier probability derivation, and weighted rarity rolls
//!
//! Higher quality artwork (more pixels filled, more colors used) shifts
//! probability mass from Common toward the rarer tiers. Every function here
//! is total: out-of-range inputs are clamped, never rejected.

use crate::rarity::tier::{RarityTable, RarityTier};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fixed palette size used as the color diversity ceiling
///
/// Deliberately not parameterized by the actual palette: artwork drawn with
/// more than 16 distinct colors is clamped to a full color factor.
pub const PALETTE_SIZE: usize = 16;

/// Weight of pixel coverage in the quality score
pub const PIXEL_WEIGHT: f64 = 0.7;

/// Weight of color diversity in the quality score
pub const COLOR_WEIGHT: f64 = 0.3;

/// Base probability for a tier at quality score zero
///
/// The base table sums to 1.00 by construction.
pub const fn base_probability(tier: RarityTier) -> f64 {
    match tier {
        RarityTier::Common => 0.60,
        RarityTier::Uncommon => 0.25,
        RarityTier::Rare => 0.10,
        RarityTier::Epic => 0.04,
        RarityTier::Legendary => 0.01,
    }
}

/// Linear sensitivity of a tier's odds to the quality score
///
/// Negative weights penalize the tier at high scores, positive weights
/// boost it.
pub const fn boost_weight(tier: RarityTier) -> f64 {
    match tier {
        RarityTier::Common => -0.4,
        RarityTier::Uncommon => 0.2,
        RarityTier::Rare => 0.6,
        RarityTier::Epic => 1.0,
        RarityTier::Legendary => 1.5,
    }
}

/// Continuous quality score in `[0, 1]` blending pixel coverage and color diversity
///
/// Pixel coverage dominates color diversity 70/30. Both factors are clamped
/// to 1, so the output stays in range for any input, including pixel or
/// color counts beyond the canvas or palette capacity.
pub fn quality_score(pixels_used: usize, colors_used: usize, canvas_size: usize) -> f64 {
    let size = canvas_size.max(1);
    let max_pixels = (size * size) as f64;

    let pixel_factor = ((pixels_used as f64) / max_pixels).min(1.0);
    let color_factor = ((colors_used as f64) / (PALETTE_SIZE as f64)).min(1.0);

    COLOR_WEIGHT.mul_add(color_factor, PIXEL_WEIGHT * pixel_factor)
}

/// Normalized tier probability table for a given quality score
///
/// Each raw tier value is `base * (1 + score * weight)`, floored at zero,
/// then the table is normalized to sum to 1. A zero raw sum is substituted
/// with 1 so normalization cannot divide by zero.
pub fn probabilities_for_score(score: f64) -> RarityTable {
    let mut raw = [0.0_f64; RarityTier::COUNT];

    for (slot, tier) in raw.iter_mut().zip(RarityTier::ORDER) {
        let boosted = base_probability(tier) * score.mul_add(boost_weight(tier), 1.0);
        *slot = boosted.max(0.0);
    }

    let sum: f64 = raw.iter().sum();
    let sum = if sum > 0.0 { sum } else { 1.0 };

    for value in &mut raw {
        *value /= sum;
    }

    RarityTable::from_values(raw)
}

/// Normalized tier probability table for the given usage statistics
pub fn tier_probabilities(pixels_used: usize, colors_used: usize, canvas_size: usize) -> RarityTable {
    probabilities_for_score(quality_score(pixels_used, colors_used, canvas_size))
}

/// Draw one tier from a probability table using the supplied random source
///
/// Walks tiers in fixed order accumulating probability until the draw falls
/// below the running sum. If floating-point rounding leaves the cumulative
/// tail short of the draw, the walk falls through to Common so a tier is
/// always returned.
pub fn roll_tier<R: Rng + ?Sized>(table: &RarityTable, rng: &mut R) -> RarityTier {
    let draw = rng.random::<f64>();

    let mut cumulative = 0.0;
    for tier in RarityTier::ORDER {
        cumulative += table.get(tier);
        if draw < cumulative {
            return tier;
        }
    }

    RarityTier::Common
}

/// Draw one tier for the given usage statistics from the process-wide random source
pub fn roll_rarity(pixels_used: usize, colors_used: usize, canvas_size: usize) -> RarityTier {
    let table = tier_probabilities(pixels_used, colors_used, canvas_size);
    roll_tier(&table, &mut rand::rng())
}

/// Seeded random selector for reproducible rarity rolls
pub struct RaritySelector {
    rng: StdRng,
}

impl RaritySelector {
    /// Create a deterministic selector from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll a tier for the given usage statistics
    pub fn roll(&mut self, pixels_used: usize, colors_used: usize, canvas_size: usize) -> RarityTier {
        let table = tier_probabilities(pixels_used, colors_used, canvas_size);
        self.roll_table(&table)
    }

    /// Roll a tier from an already-computed probability table
    pub fn roll_table(&mut self, table: &RarityTable) -> RarityTier {
        roll_tier(table, &mut self.rng)
    }
}
