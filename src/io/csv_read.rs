use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::catalog::{MODEL_COLUMN, PRICE_COLUMN, VARIANT_COLUMN};
use crate::error::Result;
use crate::extract::RawRow;

/// Reads the raw model rows from one per-category CSV file.
///
/// Columns are located by header name, so extra columns and column order are
/// irrelevant; a column missing from the header reads as an empty field on
/// every row. A UTF-8 byte-order mark at the start of the file is stripped
/// so it cannot corrupt the first header name.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let contents = fs::read_to_string(path)?;
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let model = column_index(&headers, MODEL_COLUMN);
    let variant = column_index(&headers, VARIANT_COLUMN);
    let price = column_index(&headers, PRICE_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawRow {
            model: field(&record, model),
            variant: field(&record, variant),
            price: field(&record, price),
        });
    }
    Ok(rows)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

fn field(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|idx| record.get(idx))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn write_and_read(contents: &str) -> Vec<RawRow> {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("category.csv");
        fs::write(&path, contents).expect("CSV fixture written");
        read_rows(&path).expect("CSV parsed")
    }

    #[test]
    fn reads_fields_by_header_name() {
        let rows = write_and_read(
            "Model,Variant,2026 Price Range (SRP)\n\
             mu-X,LS-E 4x4 AT,P2510000 - P2940000\n",
        );

        assert_eq!(
            rows,
            vec![RawRow::new("mu-X", "LS-E 4x4 AT", "P2510000 - P2940000")]
        );
    }

    #[test]
    fn strips_a_leading_byte_order_mark() {
        let rows = write_and_read(
            "\u{feff}Model,Variant,2026 Price Range (SRP)\n\
             D-MAX,LS 4x4 MT,P1070000\n",
        );

        assert_eq!(rows[0].model, "D-MAX");
    }

    #[test]
    fn ignores_column_order_and_extra_columns() {
        let rows = write_and_read(
            "Notes,2026 Price Range (SRP),Model,Variant\n\
             internal,P1070000,D-MAX,LS\n",
        );

        assert_eq!(rows[0].model, "D-MAX");
        assert_eq!(rows[0].variant, "LS");
        assert_eq!(rows[0].price, "P1070000");
    }

    #[test]
    fn missing_columns_and_short_rows_read_as_empty() {
        let rows = write_and_read(
            "Model,Variant\n\
             D-MAX\n",
        );

        assert_eq!(rows[0].model, "D-MAX");
        assert_eq!(rows[0].variant, "");
        assert_eq!(rows[0].price, "");
    }
}
