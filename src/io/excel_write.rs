use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::catalog::{CATEGORIES, COLUMNS};
use crate::error::Result;

/// Writes a blank data-entry workbook with one worksheet per category.
///
/// Sheets are named by category source key, in catalog order, and carry the
/// expected header row so a filled-in copy feeds straight back into the
/// converter.
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    for descriptor in &CATEGORIES {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(descriptor.source_key)?;

        for (col_idx, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string(0, col_idx as u16, *header)?;
        }

        worksheet.set_column_width(0, 24)?;
        worksheet.set_column_width(1, 40)?;
        worksheet.set_column_width(2, 28)?;
    }

    workbook.save(path)?;
    Ok(())
}
