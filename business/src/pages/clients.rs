use serde_json::json;

use super::{active_badge, active_label, format_date, list_config};
use crate::list_view::{Cell, Column, ListViewConfig};
use crate::models::Client;

pub const CLIENTS_EMPTY_MESSAGE: &str = "No clients found";

pub fn client_columns() -> Vec<Column<Client>> {
    vec![
        Column::new("name", "Name", |c: &Client| json!(c.name)).sortable(),
        Column::new("document", "Document", |c: &Client| json!(c.document))
            .sortable()
            .width(120.0),
        Column::new("email", "Email", |c: &Client| json!(c.email)),
        Column::new("phone", "Phone", |c: &Client| json!(c.phone)).width(120.0),
        Column::new("status", "Status", |c: &Client| json!(active_label(c.active)))
            .width(80.0)
            .render(|value, _| active_badge(value)),
        Column::new("created_at", "Created", |c: &Client| json!(c.created_at))
            .sortable()
            .searchable(false)
            .width(100.0)
            .render(|_, c: &Client| Cell::text(format_date(&c.created_at))),
    ]
}

pub fn client_list_config(items_per_page: usize) -> ListViewConfig {
    list_config(items_per_page, CLIENTS_EMPTY_MESSAGE)
}
