//! Dashboard loading against a mock server.

use pyme_business::{ApiClient, BusinessConfig, TicketStatus, UserRole, fetch_dashboard};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_list(mock_server: &MockServer, route: &str, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(mock_server)
        .await;
}

fn client(id: u64, active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Cliente {id}"),
        "document": format!("30-{id:08}-9"),
        "active": active,
        "created_at": "2026-01-01T00:00:00Z"
    })
}

fn user(id: u64, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": format!("user{id}"),
        "email": format!("user{id}@pyme.test"),
        "role": role,
        "active": true
    })
}

fn ticket(id: u64, status: &str, updated_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "subject": format!("Ticket {id}"),
        "status": status,
        "priority": "low",
        "client": { "id": 1, "name": "Cliente 1" },
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": updated_at
    })
}

#[tokio::test]
async fn test_dashboard_summarizes_all_lists() {
    let mock_server = MockServer::start().await;
    mount_list(
        &mock_server,
        "/api/clients",
        json!([client(1, true), client(2, false), client(3, true)]),
    )
    .await;
    mount_list(
        &mock_server,
        "/api/users",
        json!([user(1, "super_admin"), user(2, "admin"), user(3, "staff"), user(4, "staff")]),
    )
    .await;
    mount_list(
        &mock_server,
        "/api/tickets",
        json!([
            ticket(1, "open", "2026-01-02T00:00:00Z"),
            ticket(2, "closed", "2026-01-05T00:00:00Z"),
            ticket(3, "in_progress", "2026-01-03T00:00:00Z"),
        ]),
    )
    .await;

    let api = ApiClient::new(&BusinessConfig::new(mock_server.uri()));
    let summary = fetch_dashboard(&api).await.expect("dashboard should load");

    assert_eq!(summary.total_clients, 3);
    assert_eq!(summary.active_clients, 2);
    assert_eq!(summary.total_users, 4);
    assert_eq!(summary.users_with_role(UserRole::Staff), 2);
    assert_eq!(summary.users_with_role(UserRole::SuperAdmin), 1);
    assert_eq!(summary.open_tickets, 2);
    assert_eq!(summary.tickets_with_status(TicketStatus::Closed), 1);
    let recent: Vec<u64> = summary.recent_tickets.iter().map(|t| t.id).collect();
    assert_eq!(recent, vec![2, 3, 1]);
}

#[tokio::test]
async fn test_dashboard_fails_when_any_list_fails() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, "/api/clients", json!([])).await;
    mount_list(&mock_server, "/api/tickets", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let api = ApiClient::new(&BusinessConfig::new(mock_server.uri()));

    assert!(fetch_dashboard(&api).await.is_err());
}
