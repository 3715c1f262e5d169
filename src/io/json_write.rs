use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::CatalogDocument;

/// Serialises the catalog document to `path` and prints the run summary.
///
/// Parent directories are created as needed. The document is written as
/// pretty-printed UTF-8 JSON with two-space indentation; non-ASCII text such
/// as the peso glyph and category icons is emitted literally, not escaped.
pub fn write_catalog(path: &Path, document: &CatalogDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;

    print_summary(path, document);
    Ok(())
}

fn print_summary(path: &Path, document: &CatalogDocument) {
    println!("✓ Successfully generated '{}'", path.display());
    println!("  Total categories: {}", document.categories.len());
    for category in &document.categories {
        println!("  - {}: {} models", category.name, category.models.len());
    }
}
