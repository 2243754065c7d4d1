//! Loading spinner and error line shared by the pages.

use egui::Ui;
use pyme_business::FetchStatus;

use crate::utils::colors::COLOR_RED;

pub const RETRY_LABEL: &str = "Retry";

/// Shows a spinner while loading and the error with a retry button on failure.
///
/// Returns `true` when retry was clicked.
pub fn fetch_status<T>(ui: &mut Ui, status: &FetchStatus<T>) -> bool {
    match status {
        FetchStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
            false
        }
        FetchStatus::Failed(error) => error_with_retry(ui, error),
        FetchStatus::Idle | FetchStatus::Loaded(_) => false,
    }
}

pub fn error_with_retry(ui: &mut Ui, error: &str) -> bool {
    ui.horizontal(|ui| {
        ui.colored_label(COLOR_RED, format!("Error: {error}"));
        ui.button(RETRY_LABEL).clicked()
    })
    .inner
}

pub fn error_label(ui: &mut Ui, error: &str) {
    ui.colored_label(COLOR_RED, format!("Error: {error}"));
}
