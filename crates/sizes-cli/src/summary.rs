//! Tabular rendering of classification detail.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use sizes_model::Classification;

/// Renders sorted classification records as a table of raw label,
/// canonical label, rank, and magnitude.
pub fn render_detail_table(records: &[Classification]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Raw", "Normalized", "Rank", "Magnitude"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.raw),
            Cell::new(&record.label),
            Cell::new(record.rank).set_alignment(CellAlignment::Right),
            Cell::new(record.magnitude).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}
