use crate::impose::impose_booklet;
use crate::options::BookletOptions;
use crate::order::{SheetSide, booklet_page_order};
use crate::types::*;
use crate::validate::{PageCount, validate_page_count};
use lopdf::Document;
use std::fmt;

/// One sheet face of the imposition plan, with 1-based page numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedSide {
    pub sheet_number: usize,
    pub side: SheetSide,
    pub left_page: usize,
    pub right_page: usize,
}

impl fmt::Display for PlannedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sheet {} {:<5}  p.{} | p.{}",
            self.sheet_number, self.side, self.left_page, self.right_page
        )
    }
}

/// Sheet-by-sheet listing of what prints where
pub fn imposition_plan(page_count: PageCount) -> Vec<PlannedSide> {
    booklet_page_order(page_count)
        .into_iter()
        .enumerate()
        .map(|(pair_index, pair)| PlannedSide {
            sheet_number: pair_index / 2 + 1,
            side: SheetSide::for_pair_index(pair_index),
            left_page: pair.left + 1,
            right_page: pair.right + 1,
        })
        .collect()
}

/// Generate a preview of the booklet
/// Returns a document with at most `max_sheets` physical sheets (two faces each)
pub async fn generate_preview(
    document: &Document,
    options: &BookletOptions,
    max_sheets: usize,
) -> Result<Document> {
    options.validate()?;
    let page_count = validate_page_count(document.get_pages().len())?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        impose_booklet(&document, page_count, &options, Some(max_sheets))
    })
    .await?
}
