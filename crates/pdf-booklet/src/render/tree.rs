//! Page tree helpers
//!
//! Pages may inherit `Resources`, `MediaBox`, `CropBox` and `Rotate` from any
//! ancestor `Pages` node. Anything that moves a page out of its tree has to
//! copy those attributes onto the page first.

use crate::constants::{INHERITABLE_PAGE_KEYS, MAX_PAGE_TREE_DEPTH};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Look up `key` on a page, walking up the `Parent` chain when the page
/// itself does not define it.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    let mut node = page_dict;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        let parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

/// Copy of a page dictionary with every inheritable attribute made explicit
pub fn materialize_page(doc: &Document, page_id: ObjectId) -> Result<Dictionary> {
    let page_dict = doc.get_dictionary(page_id)?;
    let mut materialized = page_dict.clone();

    for key in INHERITABLE_PAGE_KEYS {
        if materialized.has(key) {
            continue;
        }
        if let Some(value) = inherited_attribute(doc, page_dict, key) {
            materialized.set(key.to_vec(), value.clone());
        }
    }

    Ok(materialized)
}

/// Object ID of the root `Pages` node
pub fn pages_root_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_dictionary(catalog_id)?;
    Ok(catalog.get(b"Pages")?.as_reference()?)
}

/// Create pages tree and catalog, finalize document structure
pub fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
