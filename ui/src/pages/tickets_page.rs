//! Tickets list and the conversation window of the selected ticket.

use std::any::{Any, TypeId};

use egui::{Frame, Margin, Response, RichText, ScrollArea, TextEdit, Ui, Window};
use flume::{Receiver, Sender};
use log::{error, info};
use pyme_business::list_view::{Column, ListActions, ListView, ListViewConfig, ListViewState};
use pyme_business::pages::{
    format_date_time, priority_tone, status_tone, ticket_columns, ticket_list_config,
};
use pyme_business::{ApiClient, ApiResult, BusinessConfig, FetchStatus, Ticket, TicketMessage};
use pyme_states::{State, StateCtx, TaskId, TaskSlot};

use super::{REFRESH_LABEL, spawn_request, spawn_task};
use crate::utils::colors::{COLOR_BLUE, tone_color};
use crate::widgets::{self, error_label, error_with_retry, fetch_status, render_badge};

pub const SEND_LABEL: &str = "Send";
pub const REPLY_HINT: &str = "Write a reply...";

#[derive(Debug)]
enum TicketsEvent {
    Loaded(TaskId, ApiResult<Vec<Ticket>>),
    MessagesLoaded(TaskId, ApiResult<Vec<TicketMessage>>),
    MessagePosted(u64, ApiResult<TicketMessage>),
}

/// Open conversation of one ticket.
#[derive(Debug)]
pub struct ConversationState {
    pub ticket: Ticket,
    pub messages: FetchStatus<Vec<TicketMessage>>,
    pub reply: String,
    pub sending: bool,
    pub send_error: Option<String>,
}

impl ConversationState {
    fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            messages: FetchStatus::Idle,
            reply: String::new(),
            sending: false,
            send_error: None,
        }
    }

    fn can_send(&self) -> bool {
        !self.sending && !self.reply.trim().is_empty()
    }
}

pub struct TicketsPage {
    api: ApiClient,
    columns: Vec<Column<Ticket>>,
    config: ListViewConfig,
    pub list: ListViewState,
    pub tickets: FetchStatus<Vec<Ticket>>,
    pub conversation: Option<ConversationState>,
    fetch: TaskSlot,
    /// Messages of the open conversation. Opening another ticket or closing
    /// the window supersedes the load in flight.
    messages_fetch: TaskSlot,
    events: (Sender<TicketsEvent>, Receiver<TicketsEvent>),
}

impl TicketsPage {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            columns: ticket_columns(),
            config: ticket_list_config(config.items_per_page).show_create_button(false),
            list: ListViewState::new(),
            tickets: FetchStatus::Idle,
            conversation: None,
            fetch: TaskSlot::new(TypeId::of::<Ticket>()),
            messages_fetch: TaskSlot::new(TypeId::of::<TicketMessage>()),
            events: flume::unbounded(),
        }
    }

    /// Fetch the tickets, superseding any fetch in flight.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let handle = self.fetch.begin();
        let id = handle.id();
        info!("Fetching tickets (generation {})", id.generation());
        if self.tickets.loaded().is_none() {
            self.tickets = FetchStatus::Loading;
        }
        let api = self.api.clone();
        spawn_task(ctx, &self.events.0, &handle, async move {
            TicketsEvent::Loaded(id, api.list_tickets().await)
        });
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.in_flight()
    }

    pub fn open_conversation(&mut self, ctx: &egui::Context, ticket: Ticket) {
        self.conversation = Some(ConversationState::new(ticket));
        self.load_messages(ctx);
    }

    pub fn close_conversation(&mut self) {
        self.messages_fetch.cancel();
        self.conversation = None;
    }

    fn load_messages(&mut self, ctx: &egui::Context) {
        let Some(conversation) = self.conversation.as_mut() else {
            return;
        };
        let ticket_id = conversation.ticket.id;
        info!("Fetching messages of ticket {ticket_id}");
        conversation.messages = FetchStatus::Loading;
        let handle = self.messages_fetch.begin();
        let id = handle.id();
        let api = self.api.clone();
        spawn_task(ctx, &self.events.0, &handle, async move {
            TicketsEvent::MessagesLoaded(id, api.list_ticket_messages(ticket_id).await)
        });
    }

    fn send_reply(&mut self, ctx: &egui::Context) {
        let Some(conversation) = self.conversation.as_mut() else {
            return;
        };
        if !conversation.can_send() {
            return;
        }
        let id = conversation.ticket.id;
        let body = conversation.reply.trim().to_string();
        info!("Posting reply to ticket {id}");
        conversation.sending = true;
        conversation.send_error = None;
        let api = self.api.clone();
        spawn_request(ctx, &self.events.0, async move {
            TicketsEvent::MessagePosted(id, api.post_ticket_message(id, &body).await)
        });
    }

    /// Conversation for `ticket_id`, if it is still the open one.
    fn conversation_for(&mut self, ticket_id: u64) -> Option<&mut ConversationState> {
        self.conversation
            .as_mut()
            .filter(|conversation| conversation.ticket.id == ticket_id)
    }

    fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.1.try_recv() {
            changed = true;
            match event {
                TicketsEvent::Loaded(id, result) => {
                    if !self.fetch.finish(id) {
                        continue;
                    }
                    if let Err(err) = &result {
                        error!("Failed to load tickets: {err}");
                    }
                    self.tickets = result.into();
                }
                TicketsEvent::MessagesLoaded(id, result) => {
                    if !self.messages_fetch.finish(id) {
                        continue;
                    }
                    let Some(conversation) = self.conversation.as_mut() else {
                        continue;
                    };
                    if let Err(err) = &result {
                        error!(
                            "Failed to load messages of ticket {}: {err}",
                            conversation.ticket.id
                        );
                    }
                    conversation.messages = result.map(sort_messages).into();
                }
                TicketsEvent::MessagePosted(id, result) => {
                    let Some(conversation) = self.conversation_for(id) else {
                        continue;
                    };
                    conversation.sending = false;
                    match result {
                        Ok(message) => {
                            conversation.reply.clear();
                            if let Some(messages) = conversation.messages.loaded_mut() {
                                messages.push(message);
                            }
                        }
                        Err(err) => {
                            error!("Failed to post reply to ticket {id}: {err}");
                            conversation.send_error = Some(err.to_string());
                        }
                    }
                }
            }
        }
        changed
    }
}

/// Oldest first.
fn sort_messages(mut messages: Vec<TicketMessage>) -> Vec<TicketMessage> {
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    messages
}

impl State for TicketsPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn tickets_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let page = state_ctx.state_mut::<TicketsPage>();
    let ctx = ui.ctx().clone();

    if page.drain_events() {
        ctx.request_repaint();
    }
    if page.tickets.is_idle() {
        page.refresh(&ctx);
    }

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Tickets");
                if ui.button(REFRESH_LABEL).clicked() {
                    page.refresh(&ctx);
                }
                if page.is_fetching() && page.tickets.loaded().is_some() {
                    ui.spinner();
                }
            });

            if fetch_status(ui, &page.tickets) {
                page.refresh(&ctx);
            }
            ui.add_space(8.0);

            let (opened, receiver) = flume::unbounded();
            let mut actions = ListActions::new().on_view(move |ticket: &Ticket| {
                let _ = opened.send(ticket.clone());
            });

            let view = ListView::new(page.tickets.rows(), &page.columns, &page.config);
            widgets::list_view(ui, "tickets_list", view, &mut page.list, &mut actions);

            if let Some(ticket) = receiver.try_iter().last() {
                page.open_conversation(&ctx, ticket);
            }
        })
        .response;

    show_conversation(page, ui, &ctx);

    response
}

#[derive(Debug, Default)]
struct ConversationInput {
    send: bool,
    reload: bool,
}

fn show_conversation(page: &mut TicketsPage, ui: &mut Ui, ctx: &egui::Context) {
    let Some(conversation) = page.conversation.as_mut() else {
        return;
    };

    let mut open = true;
    let mut input = ConversationInput::default();
    Window::new(format!(
        "#{} {}",
        conversation.ticket.id, conversation.ticket.subject
    ))
    .id(egui::Id::new("ticket_conversation"))
    .open(&mut open)
    .collapsible(false)
    .default_width(420.0)
    .show(ui.ctx(), |ui| {
        conversation_body(ui, conversation, &mut input);
    });

    if !open {
        page.close_conversation();
        return;
    }
    if input.reload {
        page.load_messages(ctx);
    }
    if input.send {
        page.send_reply(ctx);
    }
}

fn conversation_body(
    ui: &mut Ui,
    conversation: &mut ConversationState,
    input: &mut ConversationInput,
) {
    let ticket = &conversation.ticket;
    ui.horizontal(|ui| {
        ui.label(&ticket.client.name);
        render_badge(ui, ticket.status.label(), tone_color(status_tone(ticket.status)));
        render_badge(
            ui,
            ticket.priority.label(),
            tone_color(priority_tone(ticket.priority)),
        );
    });
    ui.separator();

    match &conversation.messages {
        FetchStatus::Idle | FetchStatus::Loading => {
            ui.spinner();
        }
        FetchStatus::Failed(error) => {
            input.reload = error_with_retry(ui, error);
        }
        FetchStatus::Loaded(messages) if messages.is_empty() => {
            ui.label(RichText::new("No messages yet").italics().weak());
        }
        FetchStatus::Loaded(messages) => {
            ScrollArea::vertical()
                .max_height(280.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in messages {
                        render_message(ui, message);
                    }
                });
        }
    }

    ui.separator();
    if let Some(error) = &conversation.send_error {
        error_label(ui, error);
    }
    ui.horizontal(|ui| {
        let edit = ui.add(
            TextEdit::singleline(&mut conversation.reply)
                .hint_text(REPLY_HINT)
                .desired_width(280.0),
        );
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(conversation.can_send(), egui::Button::new(SEND_LABEL))
            .clicked();
        input.send = clicked || entered;
        if conversation.sending {
            ui.spinner();
        }
        if ui.button(REFRESH_LABEL).clicked() {
            input.reload = true;
        }
    });
}

fn render_message(ui: &mut Ui, message: &TicketMessage) {
    let frame = if message.from_staff {
        Frame::NONE.stroke(egui::Stroke::new(1.0, COLOR_BLUE))
    } else {
        Frame::NONE.stroke(ui.visuals().widgets.noninteractive.bg_stroke)
    };
    frame
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&message.author);
                ui.label(
                    RichText::new(format_date_time(&message.created_at))
                        .small()
                        .weak(),
                );
            });
            ui.label(&message.body);
        });
    ui.add_space(4.0);
}
