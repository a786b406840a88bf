use crate::types::*;
use crate::validate::{PageCount, validate_page_count};
use lopdf::Document;

/// Calculate statistics for a booklet made from `documents` (merged in order).
///
/// Fails with the same page-count error the imposition itself would raise.
pub fn calculate_statistics(documents: &[Document]) -> Result<BookletStatistics> {
    let source_pages: usize = documents.iter().map(|doc| doc.get_pages().len()).sum();
    let page_count = validate_page_count(source_pages)?;
    Ok(statistics_for(page_count))
}

/// Statistics for an already validated page count
pub fn statistics_for(page_count: PageCount) -> BookletStatistics {
    BookletStatistics {
        source_pages: page_count.get(),
        sheets: page_count.sheets(),
        output_pages: page_count.output_pages(),
    }
}
