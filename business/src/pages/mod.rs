//! Column sets and list settings of the admin pages.

mod clients;
mod tickets;
mod users;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::list_view::{Cell, ListViewConfig, Tone};

pub use clients::{CLIENTS_EMPTY_MESSAGE, client_columns, client_list_config};
pub use tickets::{
    TICKETS_EMPTY_MESSAGE, priority_tone, status_tone, ticket_columns, ticket_list_config,
};
pub use users::{USERS_EMPTY_MESSAGE, role_tone, user_columns, user_list_config};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(at: &DateTime<Utc>) -> String {
    at.format(DATE_TIME_FORMAT).to_string()
}

fn list_config(items_per_page: usize, empty_message: &str) -> ListViewConfig {
    ListViewConfig::default()
        .items_per_page(items_per_page)
        .empty_message(empty_message)
}

/// Active/Inactive label used by both the accessor and the badge.
fn active_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

fn active_badge(value: &Value) -> Cell {
    match value.as_str() {
        Some(label @ "Active") => Cell::badge(label, Tone::Success),
        Some(label) => Cell::badge(label, Tone::Neutral),
        None => Cell::Empty,
    }
}
