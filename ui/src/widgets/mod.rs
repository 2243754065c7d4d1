mod fetch_status;
pub mod list_view;

pub use fetch_status::{RETRY_LABEL, error_label, error_with_retry, fetch_status};
pub use list_view::{list_view, render_badge};
