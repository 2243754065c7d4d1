use serde_json::json;

use super::{active_badge, active_label, list_config};
use crate::list_view::{Cell, Column, ListViewConfig, Tone};
use crate::models::{User, UserRole};

pub const USERS_EMPTY_MESSAGE: &str = "No users found";

pub fn role_tone(role: UserRole) -> Tone {
    match role {
        UserRole::SuperAdmin => Tone::Danger,
        UserRole::Admin => Tone::Info,
        UserRole::Staff => Tone::Neutral,
    }
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("username", "Username", |u: &User| json!(u.username)).sortable(),
        Column::new("email", "Email", |u: &User| json!(u.email)).sortable(),
        Column::new("role", "Role", |u: &User| json!(u.role.label()))
            .sortable()
            .width(100.0)
            .render(|_, u: &User| Cell::badge(u.role.label(), role_tone(u.role))),
        Column::new("client", "Client", |u: &User| json!(u.client)).render(|value, _| {
            value
                .get("name")
                .and_then(|name| name.as_str())
                .map(Cell::text)
                .unwrap_or(Cell::Empty)
        }),
        Column::new("status", "Status", |u: &User| json!(active_label(u.active)))
            .width(80.0)
            .render(|value, _| active_badge(value)),
    ]
}

pub fn user_list_config(items_per_page: usize) -> ListViewConfig {
    list_config(items_per_page, USERS_EMPTY_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::{ensure_unique_keys, filter_rows, find_column};
    use crate::models::ClientRef;

    fn user(username: &str, role: UserRole, client: Option<&str>) -> User {
        User {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@pyme.test"),
            role,
            client: client.map(|name| ClientRef {
                id: 9,
                name: name.to_string(),
            }),
            active: true,
            last_login: None,
        }
    }

    #[test]
    fn column_keys_are_unique() {
        assert_eq!(ensure_unique_keys(&user_columns()), Ok(()));
    }

    #[test]
    fn nested_client_renders_by_name() {
        let columns = user_columns();
        let client = find_column(&columns, "client").expect("client column");

        assert_eq!(
            client.cell(&user("ana", UserRole::Admin, Some("Kiosco Luz"))),
            Cell::text("Kiosco Luz")
        );
        assert_eq!(client.cell(&user("root", UserRole::SuperAdmin, None)), Cell::Empty);
    }

    #[test]
    fn role_badge_and_search_by_role_label() {
        let columns = user_columns();
        let rows = vec![
            user("ana", UserRole::Admin, Some("Kiosco Luz")),
            user("beto", UserRole::Staff, Some("Kiosco Luz")),
        ];

        let role = find_column(&columns, "role").expect("role column");
        assert_eq!(role.cell(&rows[0]), Cell::badge("Admin", Tone::Info));

        let found = filter_rows(&rows, &columns, "staff");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "beto");
    }
}
