use ::csv::{QuoteStyle, WriterBuilder};

use super::{ExportCell, ExportError, ExportTable};

/// Text cells are always quoted (inner quotes doubled); numbers, booleans and
/// empty cells are written verbatim. Headers follow the text rule.
pub fn encode_csv(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    // quoting is decided per cell below, the writer must not add its own
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(table.headers.iter().map(|h| quote(h)))?;
    for row in &table.rows {
        writer.write_record(row.iter().map(field))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

fn field(cell: &ExportCell) -> String {
    match cell {
        ExportCell::Text(s) => quote(s),
        other => other.display(),
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::tests::sample_rows;

    #[test]
    fn test_only_text_is_quoted() {
        let table = ExportTable::from_rows(&sample_rows(), 0, 10).unwrap();
        let out = String::from_utf8(encode_csv(&table).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], r#""S.No","name","price","active","note""#);
        assert_eq!(lines[1], r#"1,"Shoes, red",49.5,true,"#);
        assert_eq!(lines[2], r#"2,"Cap ""classic""",10,,"#);
    }
}
