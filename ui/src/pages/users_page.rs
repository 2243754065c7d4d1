//! Users list.

use std::any::{Any, TypeId};

use egui::{Response, Ui, Window};
use flume::{Receiver, Sender};
use log::{error, info};
use pyme_business::list_view::{Column, ListActions, ListView, ListViewConfig, ListViewState};
use pyme_business::pages::{format_date_time, role_tone, user_columns, user_list_config};
use pyme_business::{ApiClient, ApiResult, BusinessConfig, FetchStatus, User};
use pyme_states::{State, StateCtx, TaskId, TaskSlot};

use super::{CANCEL_LABEL, DELETE_CONFIRM_LABEL, REFRESH_LABEL, spawn_request, spawn_task};
use crate::utils::colors::tone_color;
use crate::widgets::{self, error_label, fetch_status, render_badge};

#[derive(Debug)]
enum UsersEvent {
    Loaded(TaskId, ApiResult<Vec<User>>),
    Deleted(u64, ApiResult<()>),
}

#[derive(Debug)]
enum UserCommand {
    View(User),
    Delete(User),
}

pub struct UsersPage {
    api: ApiClient,
    columns: Vec<Column<User>>,
    config: ListViewConfig,
    pub list: ListViewState,
    pub users: FetchStatus<Vec<User>>,
    pub selected: Option<User>,
    pub pending_delete: Option<User>,
    delete_error: Option<String>,
    deleting: bool,
    fetch: TaskSlot,
    events: (Sender<UsersEvent>, Receiver<UsersEvent>),
}

impl UsersPage {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            columns: user_columns(),
            config: user_list_config(config.items_per_page),
            list: ListViewState::new(),
            users: FetchStatus::Idle,
            selected: None,
            pending_delete: None,
            delete_error: None,
            deleting: false,
            fetch: TaskSlot::new(TypeId::of::<Self>()),
            events: flume::unbounded(),
        }
    }

    /// Fetch the users, superseding any fetch in flight.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let handle = self.fetch.begin();
        let id = handle.id();
        info!("Fetching users (generation {})", id.generation());
        if self.users.loaded().is_none() {
            self.users = FetchStatus::Loading;
        }
        let api = self.api.clone();
        spawn_task(ctx, &self.events.0, &handle, async move {
            UsersEvent::Loaded(id, api.list_users().await)
        });
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.in_flight()
    }

    fn delete(&mut self, ctx: &egui::Context, id: u64) {
        info!("Deleting user {id}");
        self.deleting = true;
        self.delete_error = None;
        let api = self.api.clone();
        spawn_request(ctx, &self.events.0, async move {
            UsersEvent::Deleted(id, api.delete_user(id).await)
        });
    }

    fn drain_events(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.1.try_recv() {
            changed = true;
            match event {
                UsersEvent::Loaded(id, result) => {
                    if !self.fetch.finish(id) {
                        continue;
                    }
                    if let Err(err) = &result {
                        error!("Failed to load users: {err}");
                    }
                    self.users = result.into();
                }
                UsersEvent::Deleted(id, Ok(())) => {
                    info!("User {id} deleted");
                    self.deleting = false;
                    self.pending_delete = None;
                    self.refresh(ctx);
                }
                UsersEvent::Deleted(id, Err(err)) => {
                    error!("Failed to delete user {id}: {err}");
                    self.deleting = false;
                    self.delete_error = Some(err.to_string());
                }
            }
        }
        changed
    }
}

impl State for UsersPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn users_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let page = state_ctx.state_mut::<UsersPage>();
    let ctx = ui.ctx().clone();

    if page.drain_events(&ctx) {
        ctx.request_repaint();
    }
    if page.users.is_idle() {
        page.refresh(&ctx);
    }

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Users");
                if ui.button(REFRESH_LABEL).clicked() {
                    page.refresh(&ctx);
                }
                if page.is_fetching() && page.users.loaded().is_some() {
                    ui.spinner();
                }
            });

            if fetch_status(ui, &page.users) {
                page.refresh(&ctx);
            }
            ui.add_space(8.0);

            let (commands, receiver) = flume::unbounded();
            let view_commands = commands.clone();
            let mut actions = ListActions::new()
                .on_view(move |user: &User| {
                    let _ = view_commands.send(UserCommand::View(user.clone()));
                })
                .on_delete(move |user: &User| {
                    let _ = commands.send(UserCommand::Delete(user.clone()));
                });

            let view = ListView::new(page.users.rows(), &page.columns, &page.config);
            widgets::list_view(ui, "users_list", view, &mut page.list, &mut actions);

            for command in receiver.try_iter() {
                match command {
                    UserCommand::View(user) => page.selected = Some(user),
                    UserCommand::Delete(user) => {
                        page.delete_error = None;
                        page.pending_delete = Some(user);
                    }
                }
            }
        })
        .response;

    show_user_details(page, ui);
    show_delete_confirmation(page, ui, &ctx);

    response
}

fn show_user_details(page: &mut UsersPage, ui: &mut Ui) {
    let Some(user) = &page.selected else {
        return;
    };

    let mut open = true;
    Window::new(format!("User - {}", user.username))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("user_details")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Email");
                    ui.label(&user.email);
                    ui.end_row();
                    ui.strong("Role");
                    render_badge(ui, user.role.label(), tone_color(role_tone(user.role)));
                    ui.end_row();
                    ui.strong("Client");
                    ui.label(user.client.as_ref().map_or("-", |c| c.name.as_str()));
                    ui.end_row();
                    ui.strong("Last login");
                    ui.label(
                        user.last_login
                            .as_ref()
                            .map_or_else(|| "Never".to_string(), format_date_time),
                    );
                    ui.end_row();
                });
        });

    if !open {
        page.selected = None;
    }
}

fn show_delete_confirmation(page: &mut UsersPage, ui: &mut Ui, ctx: &egui::Context) {
    let Some(user) = page.pending_delete.clone() else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    Window::new("Delete user")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete user \"{}\"?", user.username));
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
        page.delete(ctx, user.id);
    } else if cancelled {
        page.pending_delete = None;
        page.delete_error = None;
    }
}
