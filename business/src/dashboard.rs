//! Super admin dashboard numbers, reduced client-side from the list endpoints.

use std::collections::BTreeMap;

use log::info;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{Client, Ticket, TicketStatus, User, UserRole};

pub const RECENT_TICKETS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_clients: usize,
    pub total_users: usize,
    pub users_by_role: BTreeMap<UserRole, usize>,
    pub tickets_by_status: BTreeMap<TicketStatus, usize>,
    /// Open plus in progress.
    pub open_tickets: usize,
    /// Most recently updated first.
    pub recent_tickets: Vec<Ticket>,
}

impl DashboardSummary {
    pub fn from_lists(clients: &[Client], users: &[User], tickets: &[Ticket]) -> Self {
        let mut users_by_role: BTreeMap<UserRole, usize> =
            UserRole::ALL.iter().map(|role| (*role, 0)).collect();
        for user in users {
            *users_by_role.entry(user.role).or_default() += 1;
        }

        let mut tickets_by_status: BTreeMap<TicketStatus, usize> =
            TicketStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for ticket in tickets {
            *tickets_by_status.entry(ticket.status).or_default() += 1;
        }

        let mut recent_tickets = tickets.to_vec();
        recent_tickets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent_tickets.truncate(RECENT_TICKETS);

        Self {
            total_clients: clients.len(),
            active_clients: clients.iter().filter(|client| client.active).count(),
            total_users: users.len(),
            users_by_role,
            open_tickets: tickets.iter().filter(|t| t.status.is_open()).count(),
            tickets_by_status,
            recent_tickets,
        }
    }

    pub fn users_with_role(&self, role: UserRole) -> usize {
        self.users_by_role.get(&role).copied().unwrap_or(0)
    }

    pub fn tickets_with_status(&self, status: TicketStatus) -> usize {
        self.tickets_by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Load clients, users and tickets concurrently and summarize them.
pub async fn fetch_dashboard(api: &ApiClient) -> ApiResult<DashboardSummary> {
    let (clients, users, tickets) =
        tokio::try_join!(api.list_clients(None), api.list_users(), api.list_tickets())?;

    info!(
        "Dashboard loaded: {} clients, {} users, {} tickets",
        clients.len(),
        users.len(),
        tickets.len()
    );
    Ok(DashboardSummary::from_lists(&clients, &users, &tickets))
}
