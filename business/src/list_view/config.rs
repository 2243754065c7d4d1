use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

/// Display switches of one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    pub items_per_page: usize,
    pub show_search: bool,
    pub show_pagination: bool,
    pub show_create_button: bool,
    pub empty_message: String,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            show_search: true,
            show_pagination: true,
            show_create_button: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl ListViewConfig {
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn show_search(mut self, show: bool) -> Self {
        self.show_search = show;
        self
    }

    pub fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn show_create_button(mut self, show: bool) -> Self {
        self.show_create_button = show;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}
