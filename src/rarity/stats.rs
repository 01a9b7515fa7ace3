//! Combined rarity statistics for a piece of artwork
//!
//! Ties the sparse pixel coverage map to the engine: count usage, score it,
//! derive the odds table, and roll the tier, returning all three pieces so a
//! caller can display the odds alongside the final roll or verify the stated
//! probabilities by simulation.

use crate::canvas::PixelMap;
use crate::rarity::engine::{RaritySelector, probabilities_for_score, quality_score};
use crate::rarity::tier::{RarityTable, RarityTier};
use std::collections::HashSet;

/// Usage statistics derived from a pixel coverage map
///
/// `quality_score` is rounded to two decimal places for display; the
/// unrounded score feeds the probability computation internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtworkStats {
    /// Number of occupied cells
    pub pixels_used: usize,
    /// Number of distinct color values
    pub colors_used: usize,
    /// Quality score rounded to two decimal places
    pub quality_score: f64,
}

/// Result of a full rarity computation: the rolled tier, the display
/// statistics, and the probability table the roll was drawn from
#[derive(Debug, Clone)]
pub struct RarityOutcome {
    /// The rolled rarity tier
    pub rarity: RarityTier,
    /// Display statistics for the artwork
    pub stats: ArtworkStats,
    /// Normalized per-tier probabilities at the artwork's quality point
    pub probabilities: RarityTable,
}

/// Count distinct color values across all entries of a coverage map
///
/// An empty map yields zero.
pub fn count_unique_colors(pixels: &PixelMap) -> usize {
    pixels.values().collect::<HashSet<_>>().len()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the full rarity outcome for a coverage map
///
/// The quality score is computed once: the raw value drives the probability
/// table and the roll, and only the copy placed in the returned statistics
/// is rounded. Occupied cells are counted directly from the map, so keys
/// outside the canvas still count toward `pixels_used` and are clamped by
/// the score rather than rejected.
pub fn compute_rarity_stats(
    pixels: &PixelMap,
    canvas_size: usize,
    selector: &mut RaritySelector,
) -> RarityOutcome {
    let pixels_used = pixels.len();
    let colors_used = count_unique_colors(pixels);

    let score = quality_score(pixels_used, colors_used, canvas_size);
    let probabilities = probabilities_for_score(score);
    let rarity = selector.roll_table(&probabilities);

    RarityOutcome {
        rarity,
        stats: ArtworkStats {
            pixels_used,
            colors_used,
            quality_score: round_to_hundredths(score),
        },
        probabilities,
    }
}
