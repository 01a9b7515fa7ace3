//! Plain-text rendering of rarity reports and simulation summaries

use crate::rarity::engine::PALETTE_SIZE;
use crate::rarity::stats::RarityOutcome;
use crate::rarity::tier::{RarityTable, RarityTier};
use std::fmt::Write;

/// Render the scoring report for one piece of artwork
pub fn render_report(label: &str, outcome: &RarityOutcome, canvas_size: usize) -> String {
    let max_pixels = canvas_size * canvas_size;

    let mut out = String::new();
    let _ = writeln!(out, "{label}");
    let _ = writeln!(
        out,
        "  Pixels Used: {} / {max_pixels}",
        outcome.stats.pixels_used
    );
    let _ = writeln!(
        out,
        "  Colors Used: {} / {PALETTE_SIZE}",
        outcome.stats.colors_used
    );
    let _ = writeln!(out, "  Quality Score: {:.2}", outcome.stats.quality_score);
    let _ = writeln!(out, "  Rolled Rarity: {}", outcome.rarity);
    let _ = writeln!(out, "  Probabilities:");
    for (tier, probability) in outcome.probabilities.iter() {
        let _ = writeln!(out, "    {tier}: {:.2}%", probability * 100.0);
    }
    out
}

/// Render observed simulation rates against the expected probability table
pub fn render_simulation(
    expected: &RarityTable,
    counts: &[u64; RarityTier::COUNT],
    trials: u64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Simulation ({trials} rolls):");
    for (tier, probability) in expected.iter() {
        let observed = counts.get(tier.index()).copied().unwrap_or(0);
        let observed_rate = if trials > 0 {
            (observed as f64) / (trials as f64)
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "    {tier}: expected {:.2}%, observed {:.2}% ({observed} rolls)",
            probability * 100.0,
            observed_rate * 100.0
        );
    }
    out
}
