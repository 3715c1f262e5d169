use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::extract::RawRow;

/// Workbook handle used for category-by-category extraction.
pub type CatalogWorkbook = Xlsx<BufReader<File>>;

/// Opens the workbook holding one worksheet per category.
pub fn open_catalog_workbook(path: &Path) -> Result<CatalogWorkbook> {
    Ok(open_workbook(path)?)
}

/// Reads the raw model rows from one worksheet, or `None` when the sheet is
/// not present in the workbook.
///
/// The first row is the header and is skipped; the first three columns are
/// model, variant, and raw price, by position.
pub fn read_sheet_rows<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    sheet: &str,
) -> Result<Option<Vec<RawRow>>> {
    let range = match workbook.worksheet_range(sheet) {
        Some(range) => range.map_err(ToolError::from)?,
        None => return Ok(None),
    };

    let rows = range
        .rows()
        .skip(1)
        .map(|row| RawRow {
            model: cell_to_string(row.first()),
            variant: cell_to_string(row.get(1)),
            price: cell_to_string(row.get(2)),
        })
        .collect();

    Ok(Some(rows))
}

/// Coerces a cell to display text: strings pass through, numbers render in
/// their shortest form, empty and absent cells become the empty string.
fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
