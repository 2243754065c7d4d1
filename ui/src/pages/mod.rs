//! Pages of the back office, one per tab.
//!
//! - `dashboard_page`: super admin summary
//! - `clients_page`: clients list with server-side search and delete
//! - `users_page`: users list with delete
//! - `tickets_page`: tickets list and conversation window
//!
//! Every page keeps its state in the `StateCtx`, spawns requests on the Tokio
//! runtime and drains the results at the start of its next frame. List fetches
//! are latest-only: each one is tagged with a `TaskSlot` generation and older
//! answers are dropped.

mod clients_page;
mod dashboard_page;
mod tickets_page;
mod users_page;

use std::future::Future;

use flume::Sender;
use pyme_states::TaskHandle;

pub use clients_page::{ClientsPage, clients_page};
pub use dashboard_page::{DashboardPage, dashboard_page};
pub use tickets_page::{ConversationState, TicketsPage, tickets_page};
pub use users_page::{UsersPage, users_page};

pub const DELETE_CONFIRM_LABEL: &str = "Yes, delete";
pub const CANCEL_LABEL: &str = "Cancel";
pub const REFRESH_LABEL: &str = "🔄 Refresh";

/// Run `request` on the Tokio runtime and send its output back to the page.
fn spawn_request<T, F>(ctx: &egui::Context, sender: &Sender<T>, request: F)
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let ctx = ctx.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
        let output = request.await;
        // The page may be gone already.
        let _ = sender.send(output);
        ctx.request_repaint();
    });
}

/// Like [`spawn_request`], but nothing is sent once `handle` is cancelled.
fn spawn_task<T, F>(ctx: &egui::Context, sender: &Sender<T>, handle: &TaskHandle, request: F)
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let ctx = ctx.clone();
    let sender = sender.clone();
    let token = handle.cancellation_token();
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            output = request => {
                let _ = sender.send(output);
                ctx.request_repaint();
            }
        }
    });
}
