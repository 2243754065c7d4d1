//! Generic list view widget.
//!
//! Draws what [`ListView::derive`] computes and feeds clicks back into the
//! [`ListViewState`] and the page's [`ListActions`]. The widget keeps no
//! state of its own.
//!
//! - `toolbar`: search box and create button
//! - `columns`: table column widths
//! - `header`: sortable header row
//! - `row` / `cells`: body rows, badges and action buttons
//! - `pagination`: page summary and previous/next buttons

mod cells;
pub mod columns;
pub mod header;
pub mod pagination;
mod row;
pub mod toolbar;

use std::hash::Hash;

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use egui_extras::TableBuilder;
use pyme_business::list_view::{ListActions, ListBody, ListView, ListViewState, RowAction};
use ustr::Ustr;

pub use cells::render_badge;

use crate::utils::colors::TABLE_BORDER_COLOR;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use pagination::render_pagination;
use row::render_row;
use toolbar::render_toolbar;

/// Displays `view` for the current `state`.
pub fn list_view<T>(
    ui: &mut Ui,
    id_salt: impl Hash,
    view: ListView<'_, T>,
    state: &mut ListViewState,
    actions: &mut ListActions<'_, T>,
) -> Response {
    let config = view.config();

    ui.push_id(id_salt, |ui| {
        let toolbar = render_toolbar(
            ui,
            state,
            config.show_search,
            config.show_create_button && actions.has_create(),
        );
        if toolbar.create_clicked {
            actions.create();
        }

        ui.add_space(8.0);

        let page = view.derive(state);
        if page.page != state.current_page() {
            state.clamp_page(page.total_pages);
        }

        let rows = match view.body(&page) {
            ListBody::Empty(message) => {
                ui.label(RichText::new(message).italics().weak());
                return;
            }
            ListBody::Rows(rows) => rows,
        };

        let headers = view.headers(state);
        let row_actions = actions.row_actions();
        let with_actions = !row_actions.is_empty();

        let mut clicked_sort: Option<Ustr> = None;
        let mut clicked_action: Option<(RowAction, usize)> = None;

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::symmetric(8, 4))
            .show(ui, |ui| {
                let mut table = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .vscroll(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
                for column in table_columns(&headers, with_actions) {
                    table = table.column(column);
                }

                table
                    .header(HEADER_HEIGHT, |mut header| {
                        clicked_sort = render_table_header(&mut header, &headers, with_actions);
                    })
                    .body(|mut body| {
                        for (index, item) in rows.iter().enumerate() {
                            let cells = view.cells(item);
                            body.row(ROW_HEIGHT, |mut row| {
                                if let Some(action) = render_row(&mut row, &cells, &row_actions) {
                                    clicked_action = Some((action, index));
                                }
                            });
                        }
                    });
            });

        if config.show_pagination {
            ui.add_space(4.0);
            render_pagination(ui, &page, state);
        }

        if let Some(key) = clicked_sort {
            state.toggle_sort(view.columns(), key.as_str());
        }
        if let Some((action, index)) = clicked_action
            && let Some(item) = rows.get(index)
        {
            actions.dispatch(action, item);
        }
    })
    .response
}
