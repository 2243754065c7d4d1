//! Column descriptors and rendered cells.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use ustr::Ustr;

use super::value::value_text;

/// Reads the raw value of one column from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Maps `(raw value, full row)` to what the cell displays. Must be pure.
pub type Renderer<T> = Arc<dyn Fn(&Value, &T) -> Cell + Send + Sync>;

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Displayable content of one cell, independent of the UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Text(String),
    Badge { label: String, tone: Tone },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Plain text shown for this cell (the badge label for badges).
    pub fn label(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(text) => text,
            Self::Badge { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(Ustr),
}

/// Static description of how to read, label, sort, search and render one
/// field across all rows.
pub struct Column<T> {
    key: Ustr,
    header: String,
    sortable: bool,
    searchable: bool,
    width: Option<f32>,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            sortable: self.sortable,
            searchable: self.searchable,
            width: self.width,
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl<T> Column<T> {
    /// Create a searchable, non-sortable column.
    pub fn new(
        key: &str,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: Ustr::from(key),
            header: header.into(),
            sortable: false,
            searchable: true,
            width: None,
            accessor: Arc::new(accessor),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, render: impl Fn(&Value, &T) -> Cell + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn width_hint(&self) -> Option<f32> {
        self.width
    }

    /// Raw value of this column for `row`.
    pub fn value(&self, row: &T) -> Value {
        (self.accessor)(row)
    }

    /// Rendered cell for `row`.
    pub fn cell(&self, row: &T) -> Cell {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => value_text(&value).map(Cell::Text).unwrap_or(Cell::Empty),
        }
    }
}

/// Find a column by key.
pub fn find_column<'c, T>(columns: &'c [Column<T>], key: &str) -> Option<&'c Column<T>> {
    columns.iter().find(|column| column.key.as_str() == key)
}

/// Column keys must be unique within one table definition.
pub fn ensure_unique_keys<T>(columns: &[Column<T>]) -> Result<(), ListViewError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.key) {
            return Err(ListViewError::DuplicateColumnKey(column.key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Item {
        name: &'static str,
        stock: Option<u32>,
    }

    fn name_column() -> Column<Item> {
        Column::new("name", "Name", |item: &Item| json!(item.name))
    }

    #[test]
    fn defaults_are_searchable_and_not_sortable() {
        let column = name_column();

        assert!(column.is_searchable());
        assert!(!column.is_sortable());
        assert_eq!(column.width_hint(), None);
        assert_eq!(column.header(), "Name");
    }

    #[test]
    fn default_cell_stringifies_value() {
        let column = Column::new("stock", "Stock", |item: &Item| json!(item.stock));

        let some = Item {
            name: "Tornillo",
            stock: Some(12),
        };
        let none = Item {
            name: "Tuerca",
            stock: None,
        };

        assert_eq!(column.cell(&some), Cell::text("12"));
        assert_eq!(column.cell(&none), Cell::Empty);
    }

    #[test]
    fn render_receives_value_and_row() {
        let column = Column::new("stock", "Stock", |item: &Item| json!(item.stock)).render(
            |value, item: &Item| match value.as_u64() {
                Some(0) | None => Cell::badge(format!("{} agotado", item.name), Tone::Danger),
                Some(n) => Cell::text(format!("{n} u.")),
            },
        );

        let item = Item {
            name: "Tuerca",
            stock: Some(0),
        };

        assert_eq!(
            column.cell(&item),
            Cell::badge("Tuerca agotado", Tone::Danger)
        );
        assert_eq!(column.cell(&item).label(), "Tuerca agotado");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let columns = vec![name_column(), name_column().sortable()];

        assert_eq!(
            ensure_unique_keys(&columns),
            Err(ListViewError::DuplicateColumnKey(Ustr::from("name")))
        );
    }

    #[test]
    fn find_column_by_key() {
        let columns = vec![name_column()];

        assert!(find_column(&columns, "name").is_some());
        assert!(find_column(&columns, "missing").is_none());
    }
}
