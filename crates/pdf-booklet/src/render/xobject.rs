//! XObject creation for booklet sheets
//!
//! Each source page becomes a Form XObject, which is then drawn onto its
//! half of the output sheet with a scaling transformation.

use crate::types::{BookletError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::tree::inherited_attribute;

// =============================================================================
// Page Measurement
// =============================================================================

/// A page's MediaBox, normalized so width and height are positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    /// Lower-left x
    pub llx: f32,
    /// Lower-left y
    pub lly: f32,
    pub width: f32,
    pub height: f32,
}

impl PageBox {
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn to_array(self) -> Vec<Object> {
        vec![
            Object::Real(self.llx),
            Object::Real(self.lly),
            Object::Real(self.llx + self.width),
            Object::Real(self.lly + self.height),
        ]
    }
}

/// A measured source page, ready to be embedded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    /// Zero-based position in the source document
    pub index: usize,
    pub id: ObjectId,
    pub page_box: PageBox,
}

impl SourcePage {
    pub fn measure(doc: &Document, index: usize, id: ObjectId) -> Result<Self> {
        Ok(Self {
            index,
            id,
            page_box: get_page_box(doc, id, index)?,
        })
    }
}

/// Read a page's MediaBox (inherited if needed).
///
/// A page without a usable MediaBox cannot be placed, so this is a hard
/// failure rather than a guessed default.
pub fn get_page_box(doc: &Document, page_id: ObjectId, index: usize) -> Result<PageBox> {
    let malformed = |reason: &str| BookletError::MalformedPage {
        index,
        reason: reason.to_string(),
    };

    let page_dict = doc
        .get_dictionary(page_id)
        .map_err(|e| malformed(&format!("page object unreadable: {}", e)))?;

    let media_box = inherited_attribute(doc, page_dict, b"MediaBox")
        .ok_or_else(|| malformed("no MediaBox"))?;
    let media_box = resolve(doc, media_box)
        .as_array()
        .map_err(|_| malformed("MediaBox is not an array"))?;

    if media_box.len() != 4 {
        return Err(malformed("MediaBox must have four numbers"));
    }
    let mut coords = [0.0f32; 4];
    for (slot, obj) in coords.iter_mut().zip(media_box) {
        *slot = extract_number(resolve(doc, obj))
            .ok_or_else(|| malformed("MediaBox contains a non-numeric entry"))?;
    }

    let [x1, y1, x2, y2] = coords;
    let page_box = PageBox {
        llx: x1.min(x2),
        lly: y1.min(y2),
        width: (x2 - x1).abs(),
        height: (y2 - y1).abs(),
    };

    if page_box.width <= 0.0 || page_box.height <= 0.0 {
        return Err(malformed("MediaBox has zero area"));
    }

    Ok(page_box)
}

/// Follow a single indirect reference, if any
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// Resources are deep-copied through `cache`, so fonts and images shared by
/// several source pages land in the output only once.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page: &SourcePage,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page.id)?;

    let content_data = get_page_content(source, page_dict, page.index)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(page.page_box.to_array()));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_dict, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the decoded content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary, index: usize) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr, index),
            obj => decode_content_stream(obj, index),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr, index),
        _ => Err(BookletError::MalformedPage {
            index,
            reason: "Contents is neither a stream nor an array".to_string(),
        }),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(
    doc: &Document,
    refs: &[Object],
    index: usize,
) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            let content = decode_content_stream(doc.get_object(*id)?, index)?;
            result.extend_from_slice(&content);
            result.push(b'\n');
        }
    }

    Ok(result)
}

fn decode_content_stream(obj: &Object, index: usize) -> Result<Vec<u8>> {
    let stream = obj.as_stream().map_err(|_| BookletError::MalformedPage {
        index,
        reason: "content is not a stream".to_string(),
    })?;

    if !stream.dict.has(b"Filter") {
        return Ok(stream.content.clone());
    }

    stream
        .decompressed_content()
        .map_err(|e| BookletError::MalformedPage {
            index,
            reason: format!("cannot decode content stream: {}", e),
        })
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before recursing, so reference cycles resolve
/// to the object being copied instead of looping.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary_deep(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary_deep(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary_deep(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
