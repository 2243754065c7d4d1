//! Row action callbacks supplied by the page owning a list view.

type RowCallback<'a, T> = Box<dyn FnMut(&T) + 'a>;
type CreateCallback<'a> = Box<dyn FnMut() + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

/// Optional callbacks. Unset callbacks hide their trigger.
///
/// The list view only forwards the row it was given. Confirmation dialogs
/// and network calls are the caller's business.
pub struct ListActions<'a, T> {
    on_create: Option<CreateCallback<'a>>,
    on_view: Option<RowCallback<'a, T>>,
    on_edit: Option<RowCallback<'a, T>>,
    on_delete: Option<RowCallback<'a, T>>,
}

impl<T> Default for ListActions<'_, T> {
    fn default() -> Self {
        Self {
            on_create: None,
            on_view: None,
            on_edit: None,
            on_delete: None,
        }
    }
}

impl<'a, T> ListActions<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_create = Some(Box::new(f));
        self
    }

    pub fn on_view(mut self, f: impl FnMut(&T) + 'a) -> Self {
        self.on_view = Some(Box::new(f));
        self
    }

    pub fn on_edit(mut self, f: impl FnMut(&T) + 'a) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl FnMut(&T) + 'a) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    pub fn has_create(&self) -> bool {
        self.on_create.is_some()
    }

    /// Configured row actions, in view, edit, delete order.
    pub fn row_actions(&self) -> Vec<RowAction> {
        [
            (RowAction::View, self.on_view.is_some()),
            (RowAction::Edit, self.on_edit.is_some()),
            (RowAction::Delete, self.on_delete.is_some()),
        ]
        .into_iter()
        .filter_map(|(action, set)| set.then_some(action))
        .collect()
    }

    /// Call the callback for `action` once with `row`.
    ///
    /// Returns `false` when no callback is configured for it.
    pub fn dispatch(&mut self, action: RowAction, row: &T) -> bool {
        let callback = match action {
            RowAction::View => self.on_view.as_mut(),
            RowAction::Edit => self.on_edit.as_mut(),
            RowAction::Delete => self.on_delete.as_mut(),
        };
        match callback {
            Some(callback) => {
                callback(row);
                true
            }
            None => false,
        }
    }

    pub fn create(&mut self) -> bool {
        match self.on_create.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl<T> std::fmt::Debug for ListActions<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListActions")
            .field("on_create", &self.on_create.is_some())
            .field("on_view", &self.on_view.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish()
    }
}
