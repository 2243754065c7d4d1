//! Type-keyed application state container and task bookkeeping.
//!
//! Pages keep their state in a [`StateCtx`], looked up by type. Async work is
//! tracked with [`TaskHandle`]s so a newer request can supersede an older one.

mod ctx;
mod error;
mod state;
mod task;

pub use ctx::StateCtx;
pub use error::{Result, StateError};
pub use state::State;
pub use task::{TaskHandle, TaskId, TaskSlot};
