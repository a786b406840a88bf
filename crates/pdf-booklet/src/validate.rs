//! Page-count gate run before any imposition work

use crate::constants::{PAGES_PER_SHEET, PAGES_PER_SIDE};
use crate::types::*;

/// A page count that can be folded into a booklet: positive and a multiple of 4.
///
/// Only [`validate_page_count`] constructs one, so holding a `PageCount` means
/// the gate has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCount(usize);

impl PageCount {
    pub fn get(self) -> usize {
        self.0
    }

    /// Physical sheets needed (each carries four pages)
    pub fn sheets(self) -> usize {
        self.0 / PAGES_PER_SHEET
    }

    /// Sides in the output PDF (one per sheet face)
    pub fn output_pages(self) -> usize {
        self.0 / PAGES_PER_SIDE
    }
}

impl TryFrom<usize> for PageCount {
    type Error = BookletError;

    fn try_from(count: usize) -> Result<Self> {
        validate_page_count(count)
    }
}

impl std::fmt::Display for PageCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Check that `count` pages can form a booklet.
///
/// Anything other than a positive multiple of 4 is rejected with
/// [`BookletError::InvalidPageCount`], which carries the nearest valid counts.
/// Documents are never padded with blank pages here.
pub fn validate_page_count(count: usize) -> Result<PageCount> {
    if count > 0 && count % PAGES_PER_SHEET == 0 {
        return Ok(PageCount(count));
    }

    let (lower, upper) = nearest_valid_page_counts(count);
    log::warn!(
        "Rejecting {} page document: not a multiple of {}",
        count,
        PAGES_PER_SHEET
    );
    Err(BookletError::InvalidPageCount {
        actual: count,
        lower,
        upper,
    })
}

/// Nearest valid booklet sizes strictly below and strictly above `count`.
///
/// There is no valid size below 4, so `lower` is `None` for counts up to 4.
/// `upper` is `None` when the next multiple of 4 does not fit in a `usize`.
pub fn nearest_valid_page_counts(count: usize) -> (Option<usize>, Option<usize>) {
    let below = count.saturating_sub(1) / PAGES_PER_SHEET * PAGES_PER_SHEET;
    let lower = (below >= PAGES_PER_SHEET).then_some(below);
    let upper = (count / PAGES_PER_SHEET)
        .checked_add(1)
        .and_then(|sheets| sheets.checked_mul(PAGES_PER_SHEET));
    (lower, upper)
}
