//! Fixed-size bitset for tracking palette color presence

use bitvec::prelude::*;
use std::fmt;

/// Bitset recording which palette entries are present on a grid
///
/// Uses 1-based indexing to match cell labels, where label 0 means an empty
/// cell and label `i + 1` refers to palette entry `i`. Provides O(1)
/// membership testing and a cheap popcount for color-diversity statistics.
#[derive(Clone, Debug)]
pub struct PaletteBitset {
    bits: BitVec,
    max_colors: usize,
}

impl PaletteBitset {
    /// Create a bitset with no colors present
    pub fn new(max_colors: usize) -> Self {
        Self {
            bits: bitvec![0; max_colors],
            max_colors,
        }
    }

    /// Insert a color label
    ///
    /// Takes 1-based cell labels, storing at label-1 internally. Label 0
    /// (empty cell) and out-of-range labels are ignored.
    pub fn insert(&mut self, label: usize) {
        if label > 0 && label <= self.max_colors {
            self.bits.set(label - 1, true);
        }
    }

    /// Test color membership by 1-based label
    pub fn contains(&self, label: usize) -> bool {
        if label > 0 {
            self.bits.get(label - 1).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Test if no colors are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count colors in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all present labels as a vector
    ///
    /// Returns 1-based labels matching the grid cell encoding.
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().map(|index| index + 1).collect()
    }
}

impl fmt::Display for PaletteBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaletteBitset({} colors: {:?})", self.count(), self.to_vec())
    }
}
