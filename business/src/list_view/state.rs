//! Local UI state of one list view: search term, sort and current page.

use ustr::Ustr;

use super::column::{Column, find_column};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Ustr,
    pub direction: SortDirection,
}

/// Search term, sort column/direction and current page (1-indexed).
///
/// Both a search change and a sort change go back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    search_term: String,
    sort: Option<SortState>,
    current_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            current_page: 1,
        }
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the search term. Returns `true` if it changed, in which case
    /// the view goes back to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.current_page = 1;
        true
    }

    /// Header click on `key`.
    ///
    /// Unknown and non-sortable columns leave the state untouched. A new
    /// column sorts ascending, the same column flips direction.
    pub fn toggle_sort<T>(&mut self, columns: &[Column<T>], key: &str) -> bool {
        let Some(column) = find_column(columns, key) else {
            return false;
        };
        if !column.is_sortable() {
            return false;
        }

        self.sort = Some(match self.sort {
            Some(sort) if sort.column == column.key() => SortState {
                column: sort.column,
                direction: sort.direction.toggled(),
            },
            _ => SortState {
                column: column.key(),
                direction: SortDirection::Ascending,
            },
        });
        self.current_page = 1;
        true
    }

    /// Jump to `page`, never below 1.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Pull the current page back into range after the data shrank.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}
