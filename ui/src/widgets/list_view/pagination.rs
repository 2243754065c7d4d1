//! Pagination controls below the table.

use egui::Ui;
use pyme_business::list_view::{ListPage, ListViewState};

pub const PREVIOUS_LABEL: &str = "◀ Previous";
pub const NEXT_LABEL: &str = "Next ▶";

/// "Showing a-b of n" for the current page.
#[inline]
pub fn summary_text<T>(page: &ListPage<'_, T>) -> String {
    format!(
        "Showing {}-{} of {}",
        page.first_item, page.last_item, page.total_items
    )
}

/// "Page x of y", never "of 0".
#[inline]
pub fn page_text<T>(page: &ListPage<'_, T>) -> String {
    format!("Page {} of {}", page.page, page.total_pages.max(1))
}

/// Renders the summary and previous/next buttons below the table.
pub fn render_pagination<T>(ui: &mut Ui, page: &ListPage<'_, T>, state: &mut ListViewState) {
    ui.horizontal(|ui| {
        ui.label(summary_text(page));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(page.has_next(), egui::Button::new(NEXT_LABEL))
                .clicked()
            {
                state.set_page(page.page);
                state.next_page(page.total_pages);
            }
            ui.label(page_text(page));
            if ui
                .add_enabled(page.has_previous(), egui::Button::new(PREVIOUS_LABEL))
                .clicked()
            {
                state.set_page(page.page);
                state.previous_page();
            }
        });
    });
}
