//! Booklet imposition - arranging pages for a folded, stapled booklet
//!
//! This module orchestrates the imposition process:
//! 1. Load and merge source documents
//! 2. Validate the page count
//! 3. Compute the page order and per-sheet layouts
//! 4. Render each sheet face to the output PDF

mod io;
mod merge;

pub use io::{default_output_path, load_multiple_pdfs, load_pdf, save_pdf};
pub use merge::merge_documents;

use crate::layout::{layout_sheet, sheet_dimensions_pt};
use crate::options::BookletOptions;
use crate::order::booklet_page_order;
use crate::render::{SourcePage, finalize_document, render_sheet};
use crate::types::*;
use crate::validate::{PageCount, validate_page_count};
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;
use std::path::Path;

/// Build the booklet for `source`.
///
/// The page count is checked before any work starts; a count that is not a
/// positive multiple of 4 fails with [`BookletError::InvalidPageCount`].
/// Any failure while composing aborts the whole booklet.
pub async fn make_booklet(source: &Document, options: &BookletOptions) -> Result<Document> {
    options.validate()?;
    let page_count = validate_page_count(source.get_pages().len())?;

    let source = source.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_booklet(&source, page_count, &options, None))
        .await?
}

/// Load, merge, impose and save in one go.
///
/// Returns the number of sheet faces written.
pub async fn generate_booklet(
    inputs: &[impl AsRef<Path>],
    output: impl AsRef<Path>,
    options: &BookletOptions,
) -> Result<usize> {
    let documents = load_multiple_pdfs(inputs).await?;
    let merged = tokio::task::spawn_blocking(move || merge_documents(documents)).await??;

    let booklet = make_booklet(&merged, options).await?;
    let faces = booklet.get_pages().len();

    save_pdf(booklet, output).await?;
    Ok(faces)
}

/// Impose the booklet, optionally stopping after `max_sheets` physical sheets
pub(crate) fn impose_booklet(
    source: &Document,
    page_count: PageCount,
    options: &BookletOptions,
    max_sheets: Option<usize>,
) -> Result<Document> {
    let source_pages = measure_pages(source)?;
    if source_pages.len() != page_count.get() {
        return Err(BookletError::Config(format!(
            "expected {} pages, document has {}",
            page_count,
            source_pages.len()
        )));
    }

    let (sheet_width_pt, sheet_height_pt) = sheet_dimensions_pt(options.sheet_format);
    let mut pairs = booklet_page_order(page_count);
    if let Some(max_sheets) = max_sheets {
        pairs.truncate(max_sheets.saturating_mul(2));
    }

    log::info!(
        "Imposing {} pages onto {} sheets ({:.1} x {:.1} pt)",
        page_count,
        page_count.sheets(),
        sheet_width_pt,
        sheet_height_pt
    );

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(pairs.len());
    let mut resource_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for (pair_index, pair) in pairs.iter().enumerate() {
        let left = &source_pages[pair.left];
        let right = &source_pages[pair.right];

        let layout = layout_sheet(
            sheet_width_pt,
            sheet_height_pt,
            pair_index,
            *pair,
            left.page_box.dimensions(),
            right.page_box.dimensions(),
            options.scaling_mode,
        );

        log::debug!(
            "Sheet {} {}: pages {} | {}",
            layout.sheet_number(),
            layout.side,
            pair.left + 1,
            pair.right + 1
        );

        let page_id = render_sheet(
            &mut output,
            source,
            &source_pages,
            &layout,
            pages_tree_id,
            options.fold_line,
            &mut resource_cache,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Measure every source page up front so a malformed page fails the job
/// before anything is rendered.
fn measure_pages(source: &Document) -> Result<Vec<SourcePage>> {
    source
        .get_pages()
        .values()
        .enumerate()
        .map(|(index, &id)| SourcePage::measure(source, index, id))
        .collect()
}
