//! Single styled table on A4 landscape pages.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::{ExportCell, ExportError, ExportTable};

const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 36.0;
const ROW_HEIGHT: f32 = 18.0;
const FONT_SIZE: f32 = 8.0;
const TITLE_SIZE: f32 = 12.0;
const CELL_PADDING: f32 = 3.0;
// Helvetica average glyph width relative to the font size
const GLYPH_WIDTH: f32 = 0.5;

pub const TITLE: &str = "Table export";

pub fn encode_pdf(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let layout = Layout::new(table.headers.len());
    let mut kids: Vec<Object> = Vec::new();
    let mut chunks: Vec<&[Vec<ExportCell>]> = table.rows.chunks(layout.rows_per_page).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    for (page_no, chunk) in chunks.iter().enumerate() {
        let content = page_content(table, chunk, &layout, page_no == 0)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), Object::Real(PAGE_WIDTH), Object::Real(PAGE_HEIGHT)],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

struct Layout {
    column_width: f32,
    max_chars: usize,
    rows_per_page: usize,
}

impl Layout {
    fn new(columns: usize) -> Self {
        let usable_width = PAGE_WIDTH - 2.0 * MARGIN;
        let column_width = usable_width / columns.max(1) as f32;
        let max_chars =
            ((column_width - 2.0 * CELL_PADDING) / (FONT_SIZE * GLYPH_WIDTH)).max(1.0) as usize;
        // title band and header row are reserved on every page
        let usable_height = PAGE_HEIGHT - 2.0 * MARGIN - TITLE_SIZE * 2.0 - ROW_HEIGHT;
        let rows_per_page = ((usable_height / ROW_HEIGHT) as usize).max(1);
        Self {
            column_width,
            max_chars,
            rows_per_page,
        }
    }
}

fn page_content(
    table: &ExportTable,
    rows: &[Vec<ExportCell>],
    layout: &Layout,
    with_title: bool,
) -> Result<Vec<u8>, ExportError> {
    let mut ops = Vec::new();
    let left = MARGIN;
    let table_width = layout.column_width * table.headers.len().max(1) as f32;
    let mut top = PAGE_HEIGHT - MARGIN;

    if with_title {
        text(&mut ops, "F2", TITLE_SIZE, left, top - TITLE_SIZE, TITLE);
    }
    top -= TITLE_SIZE * 2.0;

    // header band
    ops.push(Operation::new("rg", reals(&[0.2, 0.29, 0.37])));
    ops.push(Operation::new(
        "re",
        reals(&[left, top - ROW_HEIGHT, table_width, ROW_HEIGHT]),
    ));
    ops.push(Operation::new("f", vec![]));
    ops.push(Operation::new("rg", reals(&[1.0, 1.0, 1.0])));
    for (col, header) in table.headers.iter().enumerate() {
        let x = left + col as f32 * layout.column_width + CELL_PADDING;
        let y = top - ROW_HEIGHT + (ROW_HEIGHT - FONT_SIZE) / 2.0;
        text(&mut ops, "F2", FONT_SIZE, x, y, &fit(header, layout.max_chars));
    }

    ops.push(Operation::new("rg", reals(&[0.0, 0.0, 0.0])));
    for (i, row) in rows.iter().enumerate() {
        let row_top = top - ROW_HEIGHT * (i as f32 + 1.0);
        if i % 2 == 1 {
            ops.push(Operation::new("rg", reals(&[0.95, 0.95, 0.95])));
            ops.push(Operation::new(
                "re",
                reals(&[left, row_top - ROW_HEIGHT, table_width, ROW_HEIGHT]),
            ));
            ops.push(Operation::new("f", vec![]));
            ops.push(Operation::new("rg", reals(&[0.0, 0.0, 0.0])));
        }
        for (col, cell) in row.iter().enumerate() {
            let x = left + col as f32 * layout.column_width + CELL_PADDING;
            let y = row_top - ROW_HEIGHT + (ROW_HEIGHT - FONT_SIZE) / 2.0;
            text(&mut ops, "F1", FONT_SIZE, x, y, &fit(&cell.display(), layout.max_chars));
        }
    }

    // grid
    let bottom = top - ROW_HEIGHT * (rows.len() as f32 + 1.0);
    ops.push(Operation::new("RG", reals(&[0.75, 0.75, 0.75])));
    ops.push(Operation::new("w", reals(&[0.5])));
    for line in 0..=rows.len() + 1 {
        let y = top - ROW_HEIGHT * line as f32;
        ops.push(Operation::new("m", reals(&[left, y])));
        ops.push(Operation::new("l", reals(&[left + table_width, y])));
    }
    for col in 0..=table.headers.len() {
        let x = left + layout.column_width * col as f32;
        ops.push(Operation::new("m", reals(&[x, top])));
        ops.push(Operation::new("l", reals(&[x, bottom])));
    }
    ops.push(Operation::new("S", vec![]));

    Ok(Content { operations: ops }.encode()?)
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), Object::Real(size)],
    ));
    ops.push(Operation::new("Td", reals(&[x, y])));
    ops.push(Operation::new("Tj", vec![Object::string_literal(latin1(value))]));
    ops.push(Operation::new("ET", vec![]));
}

fn reals(values: &[f32]) -> Vec<Object> {
    values.iter().map(|v| Object::Real(*v)).collect()
}

/// The standard Type1 fonts only cover Latin-1
fn latin1(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' })
        .collect()
}

fn fit(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::tests::sample_rows;

    #[test]
    fn test_pdf_is_loadable() {
        let table = ExportTable::from_rows(&sample_rows(), 0, 10).unwrap();
        let bytes = encode_pdf(&table).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_tables_span_pages() {
        let layout = Layout::new(3);
        let rows: Vec<Vec<ExportCell>> = (0..layout.rows_per_page * 2 + 1)
            .map(|i| vec![ExportCell::Number(i.to_string()); 3])
            .collect();
        let table = ExportTable {
            headers: vec!["S.No".into(), "a".into(), "b".into()],
            rows,
        };
        let doc = Document::load_mem(&encode_pdf(&table).unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefghij", 5), "ab...");
    }
}
