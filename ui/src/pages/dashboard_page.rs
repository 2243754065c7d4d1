//! Super admin dashboard.

use std::any::{Any, TypeId};

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use flume::{Receiver, Sender};
use log::{error, info};
use pyme_business::pages::{format_date_time, role_tone, status_tone};
use pyme_business::{
    ApiClient, ApiResult, BusinessConfig, DashboardSummary, FetchStatus, TicketStatus, UserRole,
    fetch_dashboard,
};
use pyme_states::{State, StateCtx, TaskId, TaskSlot};

use super::{REFRESH_LABEL, spawn_task};
use crate::utils::colors::{TABLE_BORDER_COLOR, tone_color};
use crate::widgets::{fetch_status, render_badge};

type SummaryEvent = (TaskId, ApiResult<DashboardSummary>);

pub struct DashboardPage {
    api: ApiClient,
    pub summary: FetchStatus<DashboardSummary>,
    fetch: TaskSlot,
    events: (Sender<SummaryEvent>, Receiver<SummaryEvent>),
}

impl DashboardPage {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            summary: FetchStatus::Idle,
            fetch: TaskSlot::new(TypeId::of::<Self>()),
            events: flume::unbounded(),
        }
    }

    /// Fetch the summary, superseding any fetch in flight.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let handle = self.fetch.begin();
        let id = handle.id();
        info!("Fetching dashboard (generation {})", id.generation());
        self.summary = FetchStatus::Loading;
        let api = self.api.clone();
        spawn_task(ctx, &self.events.0, &handle, async move {
            (id, fetch_dashboard(&api).await)
        });
    }

    fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok((id, result)) = self.events.1.try_recv() {
            if !self.fetch.finish(id) {
                continue;
            }
            changed = true;
            if let Err(err) = &result {
                error!("Failed to load dashboard: {err}");
            }
            self.summary = result.into();
        }
        changed
    }
}

impl State for DashboardPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn dashboard_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let page = state_ctx.state_mut::<DashboardPage>();
    let ctx = ui.ctx().clone();

    if page.drain_events() {
        ctx.request_repaint();
    }
    if page.summary.is_idle() {
        page.refresh(&ctx);
    }

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Dashboard");
            if ui.button(REFRESH_LABEL).clicked() {
                page.refresh(&ctx);
            }
        });

        if fetch_status(ui, &page.summary) {
            page.refresh(&ctx);
        }

        if let Some(summary) = page.summary.loaded() {
            ui.add_space(8.0);
            summary_cards(ui, summary);
            ui.add_space(12.0);
            breakdowns(ui, summary);
            ui.add_space(12.0);
            recent_tickets(ui, summary);
        }
    })
    .response
}

fn stat_card(ui: &mut Ui, title: &str, value: String) {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value).size(22.0).strong());
            });
        });
}

fn summary_cards(ui: &mut Ui, summary: &DashboardSummary) {
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Clients", summary.total_clients.to_string());
        stat_card(ui, "Active clients", summary.active_clients.to_string());
        stat_card(ui, "Users", summary.total_users.to_string());
        stat_card(ui, "Open tickets", summary.open_tickets.to_string());
    });
}

fn breakdowns(ui: &mut Ui, summary: &DashboardSummary) {
    ui.columns(2, |columns| {
        columns[0].strong("Users by role");
        egui::Grid::new("users_by_role")
            .num_columns(2)
            .show(&mut columns[0], |ui| {
                for role in UserRole::ALL {
                    render_badge(ui, role.label(), tone_color(role_tone(role)));
                    ui.label(summary.users_with_role(role).to_string());
                    ui.end_row();
                }
            });

        columns[1].strong("Tickets by status");
        egui::Grid::new("tickets_by_status")
            .num_columns(2)
            .show(&mut columns[1], |ui| {
                for status in TicketStatus::ALL {
                    render_badge(ui, status.label(), tone_color(status_tone(status)));
                    ui.label(summary.tickets_with_status(status).to_string());
                    ui.end_row();
                }
            });
    });
}

fn recent_tickets(ui: &mut Ui, summary: &DashboardSummary) {
    ui.strong("Recently updated tickets");
    if summary.recent_tickets.is_empty() {
        ui.label(RichText::new("No tickets yet").italics().weak());
        return;
    }
    egui::Grid::new("recent_tickets")
        .num_columns(4)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for ticket in &summary.recent_tickets {
                ui.label(format!("#{}", ticket.id));
                ui.label(&ticket.subject);
                ui.label(&ticket.client.name);
                ui.label(format_date_time(&ticket.updated_at));
                ui.end_row();
            }
        });
}
