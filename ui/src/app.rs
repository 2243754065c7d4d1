use crate::{pages, state::State};

/// Page selected in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Clients,
    Users,
    Tickets,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Clients, Self::Users, Self::Tickets];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Users => "Users",
            Self::Tickets => "Tickets",
        }
    }
}

pub struct PymeApp {
    state: State,
    tab: Tab,
}

impl PymeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            tab: Tab::default(),
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for PymeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("PYME");
                ui.separator();
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.label());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Dashboard => pages::dashboard_page(&mut self.state.ctx, ui),
                Tab::Clients => pages::clients_page(&mut self.state.ctx, ui),
                Tab::Users => pages::users_page(&mut self.state.ctx, ui),
                Tab::Tickets => pages::tickets_page(&mut self.state.ctx, ui),
            });
        });
    }
}
