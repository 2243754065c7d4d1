//! Generic searchable, sortable, paginated list.
//!
//! Everything here is renderer independent. A page owns a [`ListViewState`],
//! builds its [`Column`]s once, and every frame asks a [`ListView`] for the
//! visible [`ListPage`]. The UI crate only draws what comes out.

mod actions;
mod column;
mod config;
mod ops;
mod state;
mod value;
mod view;

pub use actions::{ListActions, RowAction};
pub use column::{
    Accessor, Cell, Column, ListViewError, Renderer, Tone, ensure_unique_keys, find_column,
};
pub use config::{DEFAULT_EMPTY_MESSAGE, DEFAULT_ITEMS_PER_PAGE, ListViewConfig};
pub use ops::{filter_rows, paginate, sort_rows, total_pages};
pub use state::{ListViewState, SortDirection, SortState};
pub use value::{compare_keys, folded_text, value_text};
pub use view::{HeaderCell, ListBody, ListPage, ListView};
