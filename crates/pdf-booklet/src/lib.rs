pub mod constants;
pub mod impose;
pub mod layout;
mod options;
mod order;
mod preview;
pub mod render;
mod stats;
mod types;
mod validate;

pub use impose::{
    default_output_path, generate_booklet, load_multiple_pdfs, load_pdf, make_booklet,
    merge_documents, save_pdf,
};
pub use layout::{calculate_scale, layout_sheet, place_in_slot, sheet_dimensions_pt};
pub use options::*;
pub use order::{SheetPair, SheetSide, booklet_page_order, page_order_unchecked};
pub use preview::{PlannedSide, generate_preview, imposition_plan};
pub use stats::{calculate_statistics, statistics_for};
pub use types::*;
pub use validate::{PageCount, nearest_valid_page_counts, validate_page_count};
