//! Derivation of the visible page from rows, columns, config and state.

use ustr::Ustr;

use super::column::{Cell, Column, find_column};
use super::config::ListViewConfig;
use super::ops::{filter_rows, paginate, sort_rows, total_pages};
use super::state::{ListViewState, SortDirection};

/// Borrowed inputs of one list view for the current frame.
#[derive(Debug)]
pub struct ListView<'a, T> {
    rows: &'a [T],
    columns: &'a [Column<T>],
    config: &'a ListViewConfig,
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

/// One header cell with its current sort indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell<'a> {
    pub key: Ustr,
    pub label: &'a str,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
    pub width: Option<f32>,
}

/// Rows visible on the current page plus pagination numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a, T> {
    pub rows: Vec<&'a T>,
    /// Effective page, 1-indexed and already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Rows left after filtering.
    pub total_items: usize,
    /// 1-based position of the first visible row, 0 when empty.
    pub first_item: usize,
    pub last_item: usize,
}

impl<T> ListPage<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// What goes where the table body would be.
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody<'p, 'a, T> {
    Empty(&'p str),
    Rows(&'p [&'a T]),
}

impl<'a, T> ListView<'a, T> {
    pub fn new(rows: &'a [T], columns: &'a [Column<T>], config: &'a ListViewConfig) -> Self {
        Self {
            rows,
            columns,
            config,
        }
    }

    pub fn columns(&self) -> &'a [Column<T>] {
        self.columns
    }

    pub fn config(&self) -> &'a ListViewConfig {
        self.config
    }

    /// Filter, sort and slice the rows for `state`. The input is never mutated.
    pub fn derive(&self, state: &ListViewState) -> ListPage<'a, T> {
        let mut filtered = filter_rows(self.rows, self.columns, state.search_term());

        if let Some(sort) = state.sort()
            && let Some(column) = find_column(self.columns, sort.column.as_str())
            && column.is_sortable()
        {
            sort_rows(&mut filtered, column, sort.direction);
        }

        let total_items = filtered.len();
        let per_page = if self.config.show_pagination {
            self.config.items_per_page.max(1)
        } else {
            total_items.max(1)
        };
        let pages = total_pages(total_items, per_page);
        let page = state.current_page().clamp(1, pages.max(1));
        let rows = paginate(&filtered, page, per_page).to_vec();

        let (first_item, last_item) = if rows.is_empty() {
            (0, 0)
        } else {
            let first = (page - 1) * per_page + 1;
            (first, first + rows.len() - 1)
        };

        ListPage {
            rows,
            page,
            total_pages: pages,
            total_items,
            first_item,
            last_item,
        }
    }

    pub fn headers(&self, state: &ListViewState) -> Vec<HeaderCell<'a>> {
        let sort = state.sort();
        self.columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key(),
                label: column.header(),
                sortable: column.is_sortable(),
                sort: sort
                    .filter(|sort| sort.column == column.key())
                    .map(|sort| sort.direction),
                width: column.width_hint(),
            })
            .collect()
    }

    pub fn cells(&self, row: &T) -> Vec<Cell> {
        self.columns.iter().map(|column| column.cell(row)).collect()
    }

    pub fn body<'p>(&self, page: &'p ListPage<'a, T>) -> ListBody<'p, 'a, T>
    where
        'a: 'p,
    {
        if page.is_empty() {
            ListBody::Empty(self.config.empty_message.as_str())
        } else {
            ListBody::Rows(&page.rows)
        }
    }
}
