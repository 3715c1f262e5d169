use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::catalog::CATEGORIES;
use crate::error::{Result, ToolError};
use crate::extract::collect_models;
use crate::io::{csv_read, excel_read, excel_write, json_write};
use crate::model::{CatalogDocument, Category};

/// Builds the catalog document from one CSV file per category and writes it.
///
/// Categories whose CSV file is absent are skipped with a warning; an absent
/// input directory is fatal.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input_dir.display(), output = %output.display())
)]
pub fn csv_dir_to_json(input_dir: &Path, output: &Path) -> Result<()> {
    if !input_dir.is_dir() {
        return Err(ToolError::MissingInputDir(input_dir.to_path_buf()));
    }

    let mut categories = Vec::new();
    for descriptor in &CATEGORIES {
        let csv_path = input_dir.join(descriptor.csv_file_name());
        if !csv_path.exists() {
            warn!(path = %csv_path.display(), "category file not found, skipping");
            continue;
        }

        let rows = csv_read::read_rows(&csv_path)?;
        let models = collect_models(rows);
        debug!(category = descriptor.id, models = models.len(), "category extracted");
        categories.push(Category::assemble(descriptor, models));
    }

    write_document(output, categories)
}

/// Builds the catalog document from one worksheet per category and writes it.
///
/// Categories whose worksheet is absent are skipped with a warning; an
/// absent workbook file is fatal.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %workbook_path.display(), output = %output.display())
)]
pub fn workbook_to_json(workbook_path: &Path, output: &Path) -> Result<()> {
    if !workbook_path.exists() {
        return Err(ToolError::MissingInput(workbook_path.to_path_buf()));
    }

    let mut workbook = excel_read::open_catalog_workbook(workbook_path)?;
    let mut categories = Vec::new();
    for descriptor in &CATEGORIES {
        let Some(rows) = excel_read::read_sheet_rows(&mut workbook, descriptor.source_key)? else {
            warn!(sheet = descriptor.source_key, "worksheet not found, skipping");
            continue;
        };

        let models = collect_models(rows);
        debug!(category = descriptor.id, models = models.len(), "category extracted");
        categories.push(Category::assemble(descriptor, models));
    }

    write_document(output, categories)
}

/// Writes a blank data-entry workbook for the spreadsheet input path.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub fn write_template(output: &Path) -> Result<()> {
    excel_write::write_template(output)?;
    println!("✓ Template workbook written to '{}'", output.display());
    Ok(())
}

fn write_document(output: &Path, categories: Vec<Category>) -> Result<()> {
    let document = CatalogDocument { categories };
    info!(categories = document.categories.len(), "writing catalog document");
    json_write::write_catalog(output, &document)
}
