//! Business layer of the PYME back office.
//!
//! - [`list_view`]: renderer independent search, sort and pagination
//! - [`pages`]: column sets of the admin pages
//! - [`api`]: REST client
//! - [`client_search`]: latest-only server-side search
//! - [`dashboard`]: super admin summary

pub mod api;
pub mod client_search;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch_state;
pub mod list_view;
pub mod models;
pub mod pages;

pub use api::ApiClient;
pub use client_search::{ClientSearch, SearchOutcome};
pub use config::BusinessConfig;
pub use dashboard::{DashboardSummary, fetch_dashboard};
pub use error::{ApiError, ApiResult, ConfigError};
pub use fetch_state::FetchStatus;
pub use models::{
    Client, ClientRef, ListResponse, Ticket, TicketMessage, TicketPriority, TicketStatus, User,
    UserRole,
};
