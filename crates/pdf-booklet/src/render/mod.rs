//! PDF rendering modules for booklet imposition
//!
//! This module handles all PDF-specific operations:
//! - Measuring source pages and turning them into Form XObjects
//! - Building composed sheet pages
//! - Page tree bookkeeping (inheritance, finalizing output documents)
//! - Deep copying PDF objects

mod page;
mod tree;
mod xobject;

pub use page::render_sheet;
pub use tree::{finalize_document, inherited_attribute, materialize_page, pages_root_id};
pub use xobject::{PageBox, SourcePage, copy_object_deep, create_page_xobject, get_page_box};
