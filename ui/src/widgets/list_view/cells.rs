//! Cell rendering for the list view table.

use egui::{Frame, Margin, RichText, Ui};
use pyme_business::list_view::{Cell, RowAction};

use crate::utils::colors::tone_color;

/// Renders one body cell.
///
/// Empty cells draw nothing so the stripe shows through.
#[inline]
pub fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Empty => {}
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Badge { label, tone } => render_badge(ui, label, tone_color(*tone)),
    }
}

/// Renders a badge: rounded outline with colored text.
#[inline]
pub fn render_badge(ui: &mut Ui, label: &str, color: egui::Color32) {
    Frame::NONE
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(color));
        });
}

/// Renders one button per configured action.
///
/// Returns the clicked action, if any.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, actions: &[RowAction]) -> Option<RowAction> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for action in actions {
            if ui.small_button(action.label()).clicked() {
                clicked = Some(*action);
            }
        }
    });
    clicked
}
