//! Shared row-to-record extraction logic.
//!
//! Both input formats reduce to the same shape: an ordered sequence of raw
//! `(model, variant, price)` triples. The collector below owns the stop
//! condition and the per-field clean-up so the CSV and workbook readers do
//! not each carry their own copy of it.

use crate::model::ModelRecord;
use crate::price::format_price_range;

/// One raw row as read from a tabular source, before any trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub model: String,
    pub variant: String,
    pub price: String,
}

impl RawRow {
    pub fn new(
        model: impl Into<String>,
        variant: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            variant: variant.into(),
            price: price.into(),
        }
    }
}

/// Walks raw rows in source order and builds the model records for one
/// category.
///
/// Iteration stops at the first row whose model cell is empty after
/// whitespace trimming; rows after the stop row are never inspected. Model
/// and variant are trimmed, and the raw price text is normalised by the
/// price formatter.
pub fn collect_models(rows: impl IntoIterator<Item = RawRow>) -> Vec<ModelRecord> {
    let mut models = Vec::new();
    for row in rows {
        let model = row.model.trim();
        if model.is_empty() {
            break;
        }
        models.push(ModelRecord {
            model: model.to_string(),
            variant: row.variant.trim().to_string(),
            price_range: format_price_range(&row.price).into_string(),
        });
    }
    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_the_first_row_without_a_model() {
        let rows = vec![
            RawRow::new("mu-X", "LS-E 4x4 AT", "P2510000"),
            RawRow::new("D-MAX", "LS 4x4 MT", "P1070000"),
            RawRow::new("", "orphan variant", "P999"),
            RawRow::new("Traviz", "should never appear", "P998"),
        ];

        let models = collect_models(rows);

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].model, "mu-X");
        assert_eq!(models[1].model, "D-MAX");
    }

    #[test]
    fn a_whitespace_only_model_also_terminates() {
        let rows = vec![
            RawRow::new("mu-X", "", ""),
            RawRow::new("   ", "blank model", "P1"),
            RawRow::new("D-MAX", "", ""),
        ];

        assert_eq!(collect_models(rows).len(), 1);
    }

    #[test]
    fn consumes_every_row_when_no_row_terminates() {
        let rows = vec![
            RawRow::new("mu-X", "", ""),
            RawRow::new("D-MAX", "", ""),
            RawRow::new("Traviz", "", ""),
        ];

        assert_eq!(collect_models(rows).len(), 3);
    }

    #[test]
    fn trims_fields_and_formats_the_price() {
        let rows = vec![RawRow::new("  mu-X ", "  LS-E 4x4 AT ", "P1070000 - P1140000")];

        let models = collect_models(rows);

        assert_eq!(models[0].model, "mu-X");
        assert_eq!(models[0].variant, "LS-E 4x4 AT");
        assert_eq!(models[0].price_range, "₱1,070,000 – ₱1,140,000");
    }

    #[test]
    fn empty_input_yields_no_models() {
        assert!(collect_models(Vec::new()).is_empty());
    }
}
