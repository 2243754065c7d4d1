//! Body row rendering.

use egui_extras::TableRow;
use pyme_business::list_view::{Cell, RowAction};

use super::cells::{render_action_buttons, render_cell};

/// Renders one body row: a cell per column, then the action buttons.
///
/// Returns the action clicked on it, if any.
#[inline]
pub fn render_row(
    row: &mut TableRow<'_, '_>,
    cells: &[Cell],
    actions: &[RowAction],
) -> Option<RowAction> {
    for cell in cells {
        row.col(|ui| render_cell(ui, cell));
    }

    let mut clicked = None;
    if !actions.is_empty() {
        row.col(|ui| {
            clicked = render_action_buttons(ui, actions);
        });
    }
    clicked
}
