use log::error;
use pyme_business::BusinessConfig;
use pyme_states::StateCtx;

use crate::pages::{ClientsPage, DashboardPage, TicketsPage, UsersPage};

/// The main application state.
pub struct State {
    /// The state context holding the configuration and every page.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            error!("{err}, falling back to the default configuration");
            BusinessConfig::default()
        });
        Self::new(config)
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(DashboardPage::new(&config));
        ctx.add_state(ClientsPage::new(&config));
        ctx.add_state(UsersPage::new(&config));
        ctx.add_state(TicketsPage::new(&config));
        ctx.add_state(config);

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
