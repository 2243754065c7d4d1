use serde_json::json;

use super::{format_date_time, list_config};
use crate::list_view::{Cell, Column, ListViewConfig, Tone};
use crate::models::{Ticket, TicketPriority, TicketStatus};

pub const TICKETS_EMPTY_MESSAGE: &str = "No tickets found";

pub fn status_tone(status: TicketStatus) -> Tone {
    match status {
        TicketStatus::Open => Tone::Warning,
        TicketStatus::InProgress => Tone::Info,
        TicketStatus::Resolved => Tone::Success,
        TicketStatus::Closed => Tone::Neutral,
    }
}

pub fn priority_tone(priority: TicketPriority) -> Tone {
    match priority {
        TicketPriority::Low => Tone::Neutral,
        TicketPriority::Medium => Tone::Warning,
        TicketPriority::High => Tone::Danger,
    }
}

pub fn ticket_columns() -> Vec<Column<Ticket>> {
    vec![
        Column::new("id", "#", |t: &Ticket| json!(t.id))
            .sortable()
            .width(50.0),
        Column::new("subject", "Subject", |t: &Ticket| json!(t.subject)).sortable(),
        // Sorted by the serialized `{"id":..,"name":..}` object.
        Column::new("client", "Client", |t: &Ticket| json!(t.client))
            .sortable()
            .render(|_, t: &Ticket| Cell::text(&t.client.name)),
        Column::new("status", "Status", |t: &Ticket| json!(t.status.label()))
            .sortable()
            .width(100.0)
            .render(|_, t: &Ticket| Cell::badge(t.status.label(), status_tone(t.status))),
        Column::new("priority", "Priority", |t: &Ticket| json!(t.priority.label()))
            .sortable()
            .width(80.0)
            .render(|_, t: &Ticket| Cell::badge(t.priority.label(), priority_tone(t.priority))),
        Column::new("updated_at", "Updated", |t: &Ticket| json!(t.updated_at))
            .sortable()
            .searchable(false)
            .width(130.0)
            .render(|_, t: &Ticket| Cell::text(format_date_time(&t.updated_at))),
    ]
}

pub fn ticket_list_config(items_per_page: usize) -> ListViewConfig {
    list_config(items_per_page, TICKETS_EMPTY_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::{SortDirection, ensure_unique_keys, find_column, sort_rows};
    use crate::models::ClientRef;
    use chrono::{TimeZone, Utc};

    fn ticket(id: u64, client_id: u64, client: &str) -> Ticket {
        let at = Utc
            .with_ymd_and_hms(2026, 1, 15, 9, 45, 0)
            .single()
            .expect("valid timestamp");
        Ticket {
            id,
            subject: format!("Factura {id}"),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            client: ClientRef {
                id: client_id,
                name: client.to_string(),
            },
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn column_keys_are_unique() {
        assert_eq!(ensure_unique_keys(&ticket_columns()), Ok(()));
    }

    #[test]
    fn badges_and_dates() {
        let columns = ticket_columns();
        let row = ticket(1, 1, "Óptica Centro");

        let priority = find_column(&columns, "priority").expect("priority column");
        let updated = find_column(&columns, "updated_at").expect("updated column");

        assert_eq!(priority.cell(&row), Cell::badge("High", Tone::Danger));
        assert_eq!(updated.cell(&row), Cell::text("2026-01-15 09:45"));
    }

    #[test]
    fn client_sorts_by_serialized_object_not_name() {
        let columns = ticket_columns();
        let client = find_column(&columns, "client").expect("client column");
        let rows = vec![ticket(1, 2, "Almacén"), ticket(2, 1, "Zapatería")];
        let mut view: Vec<&Ticket> = rows.iter().collect();

        sort_rows(&mut view, client, SortDirection::Ascending);

        let ids: Vec<u64> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn ids_sort_as_text() {
        let columns = ticket_columns();
        let id = find_column(&columns, "id").expect("id column");
        let rows = vec![ticket(2, 1, "A"), ticket(10, 1, "A")];
        let mut view: Vec<&Ticket> = rows.iter().collect();

        sort_rows(&mut view, id, SortDirection::Ascending);

        let ids: Vec<u64> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 2]);
    }
}
