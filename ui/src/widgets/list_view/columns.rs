//! Column layout of the list view table.

use egui_extras::Column;
use pyme_business::list_view::HeaderCell;

/// Fixed heights and widths for consistent table layout
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const ACTIONS_WIDTH: f32 = 160.0;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Table column configuration for one list view.
///
/// Returns the column definitions in header order:
/// - columns with a width hint start at that width
/// - the others share the remaining space
/// - Actions (fixed width), when any row action is configured
pub fn table_columns(headers: &[HeaderCell<'_>], with_actions: bool) -> Vec<Column> {
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|header| match header.width {
            Some(width) => Column::initial(width).at_least(width.min(MIN_COLUMN_WIDTH)),
            None => Column::remainder().at_least(MIN_COLUMN_WIDTH),
        })
        .collect();
    if with_actions {
        columns.push(Column::exact(ACTIONS_WIDTH));
    }
    columns
}
