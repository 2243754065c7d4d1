//! Dashboard page against a mock backend.

mod common;

use common::step_until;
use egui_kittest::Harness;
use kittest::Queryable;
use pyme_business::{TicketStatus, UserRole};
use pyme_ui::pages::{DashboardPage, dashboard_page};
use pyme_ui::state::State;
use pyme_ui::widgets::RETRY_LABEL;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(ui: &mut egui::Ui, state: &mut State) {
    dashboard_page(&mut state.ctx, ui);
}

fn ticket_json(id: u64, subject: &str, status: &str, updated_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "subject": subject,
        "status": status,
        "priority": "medium",
        "client": { "id": 1, "name": "Panadería Sol" },
        "created_at": "2026-04-01T09:00:00Z",
        "updated_at": updated_at
    })
}

async fn mount_list(mock_server: &MockServer, endpoint: &str, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(mock_server)
        .await;
}

fn summary_loaded(state: &State) -> bool {
    state.ctx.state::<DashboardPage>().summary.loaded().is_some()
}

#[tokio::test]
async fn test_summary_counts_all_lists() {
    let mock_server = MockServer::start().await;
    mount_list(
        &mock_server,
        "clients",
        json!([
            {
                "id": 1, "name": "Panadería Sol", "document": "30-00000001-5",
                "active": true, "created_at": "2026-03-10T12:00:00Z"
            },
            {
                "id": 2, "name": "Taller Ruta 3", "document": "30-00000002-5",
                "active": false, "created_at": "2026-03-11T12:00:00Z"
            }
        ]),
    )
    .await;
    mount_list(
        &mock_server,
        "users",
        json!([
            { "id": 1, "username": "root", "email": "root@example.com",
              "role": "super_admin", "active": true },
            { "id": 2, "username": "ana", "email": "ana@example.com",
              "role": "staff", "active": true,
              "client": { "id": 1, "name": "Panadería Sol" } }
        ]),
    )
    .await;
    mount_list(
        &mock_server,
        "tickets",
        json!([
            ticket_json(10, "Horno sin stock", "open", "2026-04-03T10:00:00Z"),
            ticket_json(11, "Factura duplicada", "in_progress", "2026-04-05T10:00:00Z"),
            ticket_json(12, "Cambio de CUIT", "closed", "2026-04-04T10:00:00Z"),
        ]),
    )
    .await;

    let mut harness = Harness::new_ui_state(app, State::test(mock_server.uri()));
    harness.step();

    assert!(step_until(&mut harness, summary_loaded).await, "summary never loaded");

    let page = harness.state().ctx.state::<DashboardPage>();
    let summary = page.summary.loaded().expect("summary should be loaded");
    assert_eq!(summary.total_clients, 2);
    assert_eq!(summary.active_clients, 1);
    assert_eq!(summary.total_users, 2);
    assert_eq!(summary.users_with_role(UserRole::Staff), 1);
    assert_eq!(summary.tickets_with_status(TicketStatus::Closed), 1);
    assert_eq!(summary.open_tickets, 2);
    let recent: Vec<u64> = summary.recent_tickets.iter().map(|t| t.id).collect();
    assert_eq!(recent, vec![11, 12, 10]);

    harness.get_by_label("Active clients");
    harness.get_by_label("Open tickets");
    harness.get_by_label("Factura duplicada");
}

#[tokio::test]
async fn test_one_failed_list_fails_the_summary() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, "clients", json!([])).await;
    mount_list(&mock_server, "users", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new_ui_state(app, State::test(mock_server.uri()));
    harness.step();

    let failed = step_until(&mut harness, |state| {
        state.ctx.state::<DashboardPage>().summary.error().is_some()
    })
    .await;
    assert!(failed, "dashboard error never surfaced");

    harness.get_by_label(RETRY_LABEL);
    assert!(harness.query_by_label("Active clients").is_none());
}
