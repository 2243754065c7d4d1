//! Table header with clickable sortable columns.

use egui::Ui;
use egui_extras::TableRow;
use pyme_business::list_view::{HeaderCell, SortDirection};
use ustr::Ustr;

pub const ACTIONS_HEADER: &str = "Actions";

/// Arrow shown next to the sorted column.
#[inline]
fn sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Renders the header row.
///
/// Returns the key of the sortable column whose header was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    cells: &[HeaderCell<'_>],
    with_actions: bool,
) -> Option<Ustr> {
    let mut clicked = None;
    for cell in cells {
        header.col(|ui| {
            if render_header_cell(ui, cell) {
                clicked = Some(cell.key);
            }
        });
    }
    if with_actions {
        header.col(|ui| {
            ui.strong(ACTIONS_HEADER);
        });
    }
    clicked
}

/// Renders one header cell. Sortable headers are buttons.
///
/// Returns `true` if the header was clicked.
#[inline]
fn render_header_cell(ui: &mut Ui, cell: &HeaderCell<'_>) -> bool {
    if !cell.sortable {
        ui.strong(cell.label);
        return false;
    }

    ui.horizontal(|ui| {
        let clicked = ui
            .button(egui::RichText::new(cell.label).strong())
            .on_hover_text("Sort")
            .clicked();
        if let Some(direction) = cell.sort {
            ui.label(sort_indicator(direction));
        }
        clicked
    })
    .inner
}
