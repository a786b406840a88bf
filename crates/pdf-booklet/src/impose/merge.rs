//! Merging several documents into one source document
//!
//! Objects of each appended document are renumbered past the current
//! maximum ID, then every page is re-parented under the first document's
//! page tree root with its inherited attributes made explicit. Whatever the
//! new page tree no longer reaches is dropped.

use crate::render::{materialize_page, pages_root_id};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Concatenate documents in order. A single document is returned unchanged.
pub fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let mut documents = documents.into_iter();
    let mut dest = documents.next().ok_or(BookletError::NoPages)?;

    let mut rest = documents.peekable();
    if rest.peek().is_none() {
        return Ok(dest);
    }

    let mut page_ids: Vec<ObjectId> = dest.get_pages().values().copied().collect();

    for source in rest {
        let offset = dest.max_id;
        let source_max_id = source.max_id;
        let source_pages: Vec<ObjectId> = source.get_pages().values().copied().collect();
        log::debug!(
            "Appending {} pages (object offset {})",
            source_pages.len(),
            offset
        );

        for (id, object) in source.objects {
            dest.objects
                .insert(remap_id(id, offset), remap_object_refs(object, offset));
        }
        page_ids.extend(source_pages.into_iter().map(|id| remap_id(id, offset)));
        dest.max_id = dest.max_id.max(source_max_id + offset);
    }

    let pages_id = pages_root_id(&dest)?;

    // Materialize everything first: the old tree is still intact
    let pages = page_ids
        .iter()
        .map(|&id| materialize_page(&dest, id).map(|dict| (id, dict)))
        .collect::<Result<Vec<_>>>()?;

    for (id, mut dict) in pages {
        dict.set("Parent", Object::Reference(pages_id));
        dest.objects.insert(id, Object::Dictionary(dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;
    let pages_dict = dest.get_dictionary_mut(pages_id)?;
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count));

    // Catalogs and page tree nodes of the appended documents are now unreachable
    let pruned = dest.prune_objects();
    log::debug!("Pruned {} unreferenced objects", pruned.len());

    log::info!("Merged document has {} pages", count);
    Ok(dest)
}

fn remap_id(id: ObjectId, offset: u32) -> ObjectId {
    (id.0 + offset, id.1)
}

/// Recursively shift object references by `offset`
fn remap_object_refs(obj: Object, offset: u32) -> Object {
    match obj {
        Object::Reference(id) => Object::Reference(remap_id(id, offset)),
        Object::Array(arr) => Object::Array(
            arr.into_iter()
                .map(|o| remap_object_refs(o, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = remap_object_refs(std::mem::replace(value, Object::Null), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = remap_object_refs(std::mem::replace(value, Object::Null), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}
