//! Rarity tier enumeration and the fixed-size probability table keyed by it

use std::fmt;

/// Closed set of rarity tiers assigned to minted artwork
///
/// The set is fixed: every probability table covers exactly these five
/// variants and the cumulative roll walks them in `ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RarityTier {
    /// Baseline tier, dominant at low quality scores
    Common,
    /// Second tier
    Uncommon,
    /// Third tier
    Rare,
    /// Fourth tier
    Epic,
    /// Rarest tier, most boosted by quality
    Legendary,
}

impl RarityTier {
    /// Number of tiers
    pub const COUNT: usize = 5;

    /// Tiers in cumulative roll order, from most to least common
    pub const ORDER: [Self; Self::COUNT] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    /// Position of this tier within `ORDER`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier name as embedded in NFT attribute values
    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Probability assigned to each rarity tier
///
/// The key set never changes, so the table is a fixed array indexed by
/// `RarityTier::index` rather than a dynamic map. Tables produced by the
/// engine are normalized: each value is non-negative and the five values
/// sum to 1 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityTable {
    values: [f64; RarityTier::COUNT],
}

impl RarityTable {
    /// Build a table directly from per-tier values in `ORDER` order
    ///
    /// No normalization is applied; callers hold the sum-to-one invariant
    /// themselves when it matters.
    pub const fn from_values(values: [f64; RarityTier::COUNT]) -> Self {
        Self { values }
    }

    /// Probability for a single tier
    pub fn get(&self, tier: RarityTier) -> f64 {
        self.values.get(tier.index()).copied().unwrap_or(0.0)
    }

    /// Sum of all five probabilities
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterate tiers with their probabilities in roll order
    pub fn iter(&self) -> impl Iterator<Item = (RarityTier, f64)> + '_ {
        RarityTier::ORDER.iter().map(|&tier| (tier, self.get(tier)))
    }
}

impl fmt::Display for RarityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (tier, probability) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{tier}: {:.2}%", probability * 100.0)?;
            first = false;
        }
        Ok(())
    }
}
