//! Clients list.
//!
//! The list view filters the loaded rows locally. The "Server search" box
//! asks the backend instead. Every reload goes through [`ClientSearch`], so
//! the newest request wins whether it carries a term or not.

use std::any::Any;
use std::time::Duration;

use egui::{Response, TextEdit, Ui, Window};
use flume::{Receiver, Sender};
use log::{error, info};
use pyme_business::list_view::{Column, ListActions, ListView, ListViewConfig, ListViewState};
use pyme_business::pages::{client_columns, client_list_config, format_date};
use pyme_business::{ApiClient, ApiResult, BusinessConfig, Client, ClientSearch, FetchStatus};
use pyme_states::{State, StateCtx};

use super::{CANCEL_LABEL, DELETE_CONFIRM_LABEL, REFRESH_LABEL, spawn_request};
use crate::widgets::{self, error_label, fetch_status};

pub const SERVER_SEARCH_HINT: &str = "Server search...";

/// Polling interval while a search is in flight.
const SEARCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct DeleteOutcome {
    id: u64,
    result: ApiResult<()>,
}

#[derive(Debug)]
enum ClientCommand {
    View(Client),
    Delete(Client),
}

pub struct ClientsPage {
    api: ApiClient,
    columns: Vec<Column<Client>>,
    config: ListViewConfig,
    pub list: ListViewState,
    pub clients: FetchStatus<Vec<Client>>,
    search: ClientSearch,
    server_term: String,
    pub selected: Option<Client>,
    pub pending_delete: Option<Client>,
    delete_error: Option<String>,
    deleting: bool,
    deletes: (Sender<DeleteOutcome>, Receiver<DeleteOutcome>),
}

impl ClientsPage {
    pub fn new(config: &BusinessConfig) -> Self {
        let api = ApiClient::new(config);
        Self {
            search: ClientSearch::new(api.clone()),
            api,
            columns: client_columns(),
            config: client_list_config(config.items_per_page),
            list: ListViewState::new(),
            clients: FetchStatus::Idle,
            server_term: String::new(),
            selected: None,
            pending_delete: None,
            delete_error: None,
            deleting: false,
            deletes: flume::unbounded(),
        }
    }

    pub fn server_term(&self) -> &str {
        &self.server_term
    }

    /// Change the server-side term and reload with it.
    pub fn set_server_term(&mut self, ctx: &egui::Context, term: impl Into<String>) {
        self.server_term = term.into();
        self.reload(ctx);
    }

    /// Fetch the clients matching the current server term, or all of them
    /// when it is empty. Supersedes any fetch in flight.
    pub fn reload(&mut self, ctx: &egui::Context) {
        info!("Fetching clients (server term {:?})", self.server_term);
        // Rows already shown stay visible until the new ones arrive.
        if self.clients.loaded().is_none() {
            self.clients = FetchStatus::Loading;
        }
        self.search.search(self.server_term.clone());
        ctx.request_repaint_after(SEARCH_POLL_INTERVAL);
    }

    pub fn is_fetching(&self) -> bool {
        self.search.in_flight()
    }

    fn delete(&mut self, ctx: &egui::Context, id: u64) {
        info!("Deleting client {id}");
        self.deleting = true;
        self.delete_error = None;
        let api = self.api.clone();
        spawn_request(ctx, &self.deletes.0, async move {
            DeleteOutcome {
                id,
                result: api.delete_client(id).await,
            }
        });
    }

    /// Apply finished requests. Returns `true` if anything arrived.
    fn drain_events(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;

        while let Ok(DeleteOutcome { id, result }) = self.deletes.1.try_recv() {
            changed = true;
            self.deleting = false;
            match result {
                Ok(()) => {
                    info!("Client {id} deleted");
                    self.pending_delete = None;
                    self.reload(ctx);
                }
                Err(err) => {
                    error!("Failed to delete client {id}: {err}");
                    self.delete_error = Some(err.to_string());
                }
            }
        }

        if let Some(outcome) = self.search.poll() {
            changed = true;
            match &outcome.result {
                Ok(clients) => info!("Loaded {} clients for {:?}", clients.len(), outcome.term),
                Err(err) => error!("Failed to load clients for {:?}: {err}", outcome.term),
            }
            self.clients = outcome.result.into();
        }

        changed
    }
}

impl State for ClientsPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn clients_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let page = state_ctx.state_mut::<ClientsPage>();
    let ctx = ui.ctx().clone();

    if page.drain_events(&ctx) {
        ctx.request_repaint();
    }
    if page.clients.is_idle() {
        page.reload(&ctx);
    }
    // The search task cannot wake the UI itself.
    if page.is_fetching() {
        ctx.request_repaint_after(SEARCH_POLL_INTERVAL);
    }

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Clients");
                if ui.button(REFRESH_LABEL).clicked() {
                    page.reload(&ctx);
                }
                if page.is_fetching() && page.clients.loaded().is_some() {
                    ui.spinner();
                }
                let mut term = page.server_term.clone();
                let edit = ui.add(
                    TextEdit::singleline(&mut term)
                        .hint_text(SERVER_SEARCH_HINT)
                        .desired_width(200.0),
                );
                if edit.changed() {
                    page.set_server_term(&ctx, term);
                }
            });

            if fetch_status(ui, &page.clients) {
                page.reload(&ctx);
            }
            ui.add_space(8.0);

            let (commands, receiver) = flume::unbounded();
            let view_commands = commands.clone();
            let mut actions = ListActions::new()
                .on_view(move |client: &Client| {
                    let _ = view_commands.send(ClientCommand::View(client.clone()));
                })
                .on_delete(move |client: &Client| {
                    let _ = commands.send(ClientCommand::Delete(client.clone()));
                });

            let view = ListView::new(page.clients.rows(), &page.columns, &page.config);
            widgets::list_view(ui, "clients_list", view, &mut page.list, &mut actions);

            for command in receiver.try_iter() {
                match command {
                    ClientCommand::View(client) => page.selected = Some(client),
                    ClientCommand::Delete(client) => {
                        page.delete_error = None;
                        page.pending_delete = Some(client);
                    }
                }
            }
        })
        .response;

    show_client_details(page, ui);
    show_delete_confirmation(page, ui, &ctx);

    response
}

fn show_client_details(page: &mut ClientsPage, ui: &mut Ui) {
    let Some(client) = &page.selected else {
        return;
    };

    let mut open = true;
    Window::new(format!("Client - {}", client.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("client_details")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Document");
                    ui.label(&client.document);
                    ui.end_row();
                    ui.strong("Email");
                    ui.label(client.email.as_deref().unwrap_or("-"));
                    ui.end_row();
                    ui.strong("Phone");
                    ui.label(client.phone.as_deref().unwrap_or("-"));
                    ui.end_row();
                    ui.strong("Created");
                    ui.label(format_date(&client.created_at));
                    ui.end_row();
                });
        });

    if !open {
        page.selected = None;
    }
}

fn show_delete_confirmation(page: &mut ClientsPage, ui: &mut Ui, ctx: &egui::Context) {
    let Some(client) = page.pending_delete.clone() else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    Window::new("Delete client")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete client \"{}\"?", client.name));
            if let Some(error) = &page.delete_error {
                error_label(ui, error);
            }
            ui.add_space(8.0);
            if page.deleting {
                ui.spinner();
                return;
            }
            ui.horizontal(|ui| {
                confirmed = ui.button(DELETE_CONFIRM_LABEL).clicked();
                cancelled = ui.button(CANCEL_LABEL).clicked();
            });
        });

    if confirmed {
        page.delete(ctx, client.id);
    } else if cancelled {
        page.pending_delete = None;
        page.delete_error = None;
    }
}
