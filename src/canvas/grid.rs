//! Dense palette-labelled pixel grid and the sparse coverage map interchange form

use crate::canvas::bitset::PaletteBitset;
use crate::canvas::color::Rgba;
use ndarray::Array2;
use std::collections::HashMap;

/// Coordinate key for one canvas cell
///
/// `x` is the column and `y` the row, matching the `"x,y"` keys of the
/// sparse coverage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Cell {
    /// Create a cell coordinate
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Sparse pixel coverage map: only occupied cells are recorded
///
/// Coordinate keys are unique and order is irrelevant. This is the
/// interchange form the rarity engine consumes.
pub type PixelMap = HashMap<Cell, Rgba>;

/// Square pixel grid with integer-labelled cells and a color palette
///
/// Cells store `0` for empty or `i + 1` for palette entry `i`. Palette
/// labels are assigned deterministically (sorted color order) when building
/// from a coverage map, and first-seen order when drawing incrementally.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    cells: Array2<usize>,
    palette: Vec<Rgba>,
    size: usize,
}

impl PixelGrid {
    /// Create an empty grid of the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
            palette: Vec::new(),
            size,
        }
    }

    /// Build a dense grid from a sparse coverage map
    ///
    /// Entries outside the `size x size` canvas are ignored; the grid cannot
    /// represent them. Palette labels follow sorted color order so identical
    /// maps always produce identical grids.
    pub fn from_pixel_map(pixels: &PixelMap, size: usize) -> Self {
        let mut colors: Vec<Rgba> = pixels
            .iter()
            .filter(|(cell, _)| (cell.x as usize) < size && (cell.y as usize) < size)
            .map(|(_, &color)| color)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        colors.sort_unstable();

        let mut grid = Self {
            cells: Array2::zeros((size, size)),
            palette: colors,
            size,
        };

        for (&cell, &color) in pixels {
            grid.set(cell, color);
        }

        grid
    }

    /// Grid dimension
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Palette of colors that have been drawn on this grid
    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    /// Color at a cell, or `None` for empty or out-of-bounds cells
    pub fn get(&self, cell: Cell) -> Option<Rgba> {
        let label = self
            .cells
            .get([cell.y as usize, cell.x as usize])
            .copied()
            .unwrap_or(0);
        if label == 0 {
            None
        } else {
            self.palette.get(label - 1).copied()
        }
    }

    /// Draw a color at a cell
    ///
    /// Out-of-bounds cells are ignored. New colors extend the palette; the
    /// palette is never shrunk by overdrawing or erasing.
    pub fn set(&mut self, cell: Cell, color: Rgba) {
        let (row, col) = (cell.y as usize, cell.x as usize);
        if row >= self.size || col >= self.size {
            return;
        }

        let label = match self.palette.iter().position(|&known| known == color) {
            Some(index) => index + 1,
            None => {
                self.palette.push(color);
                self.palette.len()
            }
        };

        if let Some(slot) = self.cells.get_mut([row, col]) {
            *slot = label;
        }
    }

    /// Erase a cell, leaving it empty
    pub fn erase(&mut self, cell: Cell) {
        if let Some(slot) = self.cells.get_mut([cell.y as usize, cell.x as usize]) {
            *slot = 0;
        }
    }

    /// Erase every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of occupied cells
    pub fn pixels_used(&self) -> usize {
        self.cells.iter().filter(|&&label| label > 0).count()
    }

    /// Number of distinct colors currently present on the grid
    ///
    /// Recounted from the cells rather than the palette, since erasing can
    /// remove the last cell of a color while its palette entry remains.
    pub fn colors_used(&self) -> usize {
        let mut present = PaletteBitset::new(self.palette.len());
        for &label in &self.cells {
            present.insert(label);
        }
        present.count()
    }

    /// Convert back to the sparse coverage map form
    pub fn to_pixel_map(&self) -> PixelMap {
        let mut pixels = PixelMap::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let label = self.cells.get([row, col]).copied().unwrap_or(0);
                if label > 0 {
                    if let Some(&color) = self.palette.get(label - 1) {
                        pixels.insert(Cell::new(col as u32, row as u32), color);
                    }
                }
            }
        }
        pixels
    }
}
