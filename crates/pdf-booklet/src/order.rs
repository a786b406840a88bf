//! Page ordering for saddle-stitched booklets
//!
//! Physical sheet 1 carries the outermost pages (last and first on the front,
//! second and second-to-last on the back); later sheets nest inward. After
//! duplex printing, folding the stack in half and stapling the fold, the pages
//! read in order.

use crate::constants::PAGES_PER_SHEET;
use crate::validate::PageCount;

/// Two source pages printed side by side on one sheet face (zero-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetPair {
    pub left: usize,
    pub right: usize,
}

impl SheetPair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl From<(usize, usize)> for SheetPair {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

/// Which face of the physical sheet a pair is printed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetSide {
    /// Recto, printed first
    Front,
    /// Verso, printed on the flip side and turned 180°
    Back,
}

impl SheetSide {
    /// Pairs alternate front, back, front, back...
    pub fn for_pair_index(pair_index: usize) -> Self {
        if pair_index % 2 == 0 {
            SheetSide::Front
        } else {
            SheetSide::Back
        }
    }

    pub fn is_back(self) -> bool {
        self == SheetSide::Back
    }
}

impl std::fmt::Display for SheetSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSide::Front => f.pad("front"),
            SheetSide::Back => f.pad("back"),
        }
    }
}

/// Print order for a validated page count: `page_count / 2` pairs,
/// front then back for each sheet.
pub fn booklet_page_order(page_count: PageCount) -> Vec<SheetPair> {
    page_order_unchecked(page_count.get())
}

/// Print order without validation.
///
/// Callers must pass a multiple of 4; other counts give a meaningless order.
pub fn page_order_unchecked(page_count: usize) -> Vec<SheetPair> {
    let sheets = page_count / PAGES_PER_SHEET;
    let mut pairs = Vec::with_capacity(sheets * 2);

    for i in 0..sheets {
        let first = 2 * i;
        let last = page_count - 1 - 2 * i;
        // Front: last remaining page on the left, first on the right
        pairs.push(SheetPair::new(last, first));
        // Back: the pages that follow first and precede last
        pairs.push(SheetPair::new(first + 1, last - 1));
    }

    pairs
}
