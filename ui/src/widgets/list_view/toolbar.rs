//! Search box and create button above the table.

use egui::{TextEdit, Ui};
use pyme_business::list_view::ListViewState;

pub const SEARCH_HINT: &str = "Search...";
pub const CREATE_LABEL: &str = "➕ New";

#[derive(Debug, Default)]
pub struct ToolbarResponse {
    pub create_clicked: bool,
}

/// Renders the search box and the create button above the table.
///
/// Search edits go straight into `state`.
pub fn render_toolbar(
    ui: &mut Ui,
    state: &mut ListViewState,
    show_search: bool,
    show_create: bool,
) -> ToolbarResponse {
    let mut response = ToolbarResponse::default();

    ui.horizontal(|ui| {
        if show_search {
            let mut term = state.search_term().to_string();
            let edit = ui.add(
                TextEdit::singleline(&mut term)
                    .hint_text(SEARCH_HINT)
                    .desired_width(240.0),
            );
            if edit.changed() {
                state.set_search_term(term);
            }
        }

        if show_create {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                response.create_clicked = ui.button(CREATE_LABEL).clicked();
            });
        }
    });

    response
}
