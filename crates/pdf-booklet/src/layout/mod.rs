//! Layout calculation for booklet sheets
//!
//! Pure geometry between page ordering and PDF rendering:
//! - Sheet dimensions for a sheet format
//! - Half-sheet slots (left and right)
//! - Content placement (scaling, centering, back-side rotation)

mod placement;
mod types;

pub use placement::*;
pub use types::*;
