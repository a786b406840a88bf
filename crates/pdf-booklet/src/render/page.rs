//! Sheet rendering: two source pages composed onto one output page

use crate::constants::{FOLD_LINE_DASH, FOLD_LINE_WIDTH};
use crate::layout::{SheetLayout, SlotPlacement};
use crate::types::{BookletError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{SourcePage, create_page_xobject};

/// Render one sheet face to the output document.
///
/// Back sides get `/Rotate 180` on the output page, turning the whole composed
/// sheet so it lines up with the front under long-edge duplex printing.
pub fn render_sheet(
    output: &mut Document,
    source: &Document,
    source_pages: &[SourcePage],
    layout: &SheetLayout,
    parent_pages_id: ObjectId,
    fold_line: bool,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(layout.width_pt),
            Object::Real(layout.height_pt),
        ]),
    );
    if layout.rotation_degrees != 0 {
        page_dict.set("Rotate", Object::Integer(layout.rotation_degrees));
    }

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, placement) in layout.placements().into_iter().enumerate() {
        let page = source_pages.get(placement.source_page).ok_or_else(|| {
            BookletError::MalformedPage {
                index: placement.source_page,
                reason: format!(
                    "page is out of range for a {} page document",
                    source_pages.len()
                ),
            }
        })?;

        let xobject_name = format!("P{}", idx);
        let xobject_id = create_page_xobject(output, source, page, cache)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(placement_command(&xobject_name, placement, page));
    }

    if fold_line {
        content_ops.push(fold_line_command(layout));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream command that draws a page XObject at its placement.
///
/// The XObject's BBox keeps the source MediaBox origin, so the translation
/// subtracts the scaled origin to land the box's corner on the target rect.
fn placement_command(xobject_name: &str, placement: &SlotPlacement, page: &SourcePage) -> String {
    let scale = placement.scale;
    let tx = placement.content_rect.x - page.page_box.llx * scale;
    let ty = placement.content_rect.y - page.page_box.lly * scale;
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        scale, scale, tx, ty, xobject_name
    )
}

/// Dashed vertical line where the sheet is folded
fn fold_line_command(layout: &SheetLayout) -> String {
    let x = layout.width_pt / 2.0;
    format!(
        "q 0 0 0 RG {} w {} {} 0 m {} {} l S Q\n",
        FOLD_LINE_WIDTH, FOLD_LINE_DASH, x, x, layout.height_pt
    )
}
