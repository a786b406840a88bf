#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

pub const LETTER: (i64, i64) = (612, 792);

/// Build a document of `num_pages` Letter pages whose content streams read
/// `% page N` (1-based), so tests can tell where each source page landed.
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_test_pdf_with_sizes(&vec![LETTER; num_pages])
}

pub fn create_test_pdf_with_sizes(sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (i, &(width, height)) in sizes.iter().enumerate() {
        let content = format!("% page {}\nq Q\n", i + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn write_test_pdf(doc: &mut Document, path: &std::path::Path) {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(path, writer).unwrap();
}

/// Output page IDs in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// 1-based source page numbers drawn as P0 and P1 on an output page
pub fn placed_pages(doc: &Document, page_id: ObjectId) -> (usize, usize) {
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();

    let page_number = |name: &[u8]| {
        let id = xobjects.get(name).unwrap().as_reference().unwrap();
        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        source_page_number(&stream.content)
    };

    (page_number(b"P0"), page_number(b"P1"))
}

/// Page rotation, or 0 when the page has no /Rotate entry
pub fn rotation(doc: &Document, page_id: ObjectId) -> i64 {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"Rotate")
        .map(|r| r.as_i64().unwrap())
        .unwrap_or(0)
}

pub fn media_box(doc: &Document, page_id: ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

/// Scale and translation `(s, tx, ty)` of each `cm ... Do` draw on an output page
pub fn draw_transforms(doc: &Document, page_id: ObjectId) -> Vec<(f32, f32, f32)> {
    let content = doc.get_page_content(page_id).unwrap();
    String::from_utf8_lossy(&content)
        .lines()
        .filter(|line| line.ends_with("Do Q"))
        .map(|line| {
            let operands: Vec<f32> = line
                .split_whitespace()
                .skip(1)
                .take(6)
                .map(|v| v.parse().unwrap())
                .collect();
            (operands[0], operands[4], operands[5])
        })
        .collect()
}

fn source_page_number(content: &[u8]) -> usize {
    let text = String::from_utf8_lossy(content);
    text.lines()
        .find_map(|line| line.strip_prefix("% page "))
        .and_then(|n| n.trim().parse().ok())
        .unwrap()
}
