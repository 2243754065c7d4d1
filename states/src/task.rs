//! Task identity and latest-only bookkeeping for async requests.
//!
//! - `TaskId`: a request kind (`TypeId`) plus a generation counter
//! - `TaskHandle`: a `TaskId` with its `CancellationToken`
//! - `TaskSlot`: holds at most one in-flight task per kind; starting a new one
//!   cancels the previous task and makes its results stale
//!
//! # Usage
//!
//! ```ignore
//! let mut slot = TaskSlot::new(TypeId::of::<ClientSearch>());
//! let first = slot.begin();
//! let second = slot.begin(); // cancels `first`
//!
//! assert!(first.is_cancelled());
//! assert!(!slot.finish(first.id()));  // stale, dropped
//! assert!(slot.finish(second.id()));  // current, accepted
//! ```

use std::any::TypeId;

use log::debug;
use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Two ids with the same `TypeId` but different generations belong to the same
/// kind of request; the higher generation is the more recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned async task with cooperative cancellation support.
///
/// Cancelling does not abort the task. The task must check `is_cancelled()` or
/// await `cancellation_token().cancelled()` inside a `tokio::select!`.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Latest-only slot for one kind of request.
#[derive(Debug)]
pub struct TaskSlot {
    type_id: TypeId,
    generation: u64,
    current: Option<TaskHandle>,
}

impl TaskSlot {
    pub fn new(type_id: TypeId) -> Self {
        Self {
            type_id,
            generation: 0,
            current: None,
        }
    }

    /// Start a new task, cancelling whatever was in flight.
    pub fn begin(&mut self) -> TaskHandle {
        if let Some(previous) = self.current.take() {
            debug!("Superseding task generation {}", previous.id().generation());
            previous.cancel();
        }

        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(self.type_id, self.generation),
            CancellationToken::new(),
        );
        self.current = Some(handle.clone());
        handle
    }

    pub fn is_current(&self, id: TaskId) -> bool {
        self.current.as_ref().is_some_and(|handle| handle.id() == id)
    }

    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    /// Mark `id` as finished. Returns `false` for stale ids, whose results
    /// must be dropped.
    pub fn finish(&mut self, id: TaskId) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            debug!("Dropping stale task generation {}", id.generation());
            false
        }
    }

    /// Cancel the in-flight task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Search;
    struct Refresh;

    #[test]
    fn task_id_new_and_accessors() {
        let type_id = TypeId::of::<Search>();
        let task_id = TaskId::new(type_id, 42);

        assert_eq!(task_id.type_id(), type_id);
        assert_eq!(task_id.generation(), 42);
    }

    #[test]
    fn task_id_equality() {
        let id1 = TaskId::new(TypeId::of::<Search>(), 1);
        let id2 = TaskId::new(TypeId::of::<Search>(), 1);
        let id3 = TaskId::new(TypeId::of::<Search>(), 2);
        let id4 = TaskId::new(TypeId::of::<Refresh>(), 1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_ne!(id1, id4);
    }

    #[test]
    fn task_handle_clone_shares_token() {
        let handle1 = TaskHandle::new(
            TaskId::new(TypeId::of::<Search>(), 1),
            CancellationToken::new(),
        );
        let handle2 = handle1.clone();
        let token = handle1.cancellation_token();

        handle1.cancel();

        assert!(handle2.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn slot_generations_increase() {
        let mut slot = TaskSlot::new(TypeId::of::<Search>());

        let first = slot.begin();
        let second = slot.begin();

        assert_eq!(first.id().generation(), 1);
        assert_eq!(second.id().generation(), 2);
    }

    #[test]
    fn begin_cancels_previous_task() {
        let mut slot = TaskSlot::new(TypeId::of::<Search>());

        let first = slot.begin();
        let second = slot.begin();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!slot.is_current(first.id()));
        assert!(slot.is_current(second.id()));
    }

    #[test]
    fn finish_accepts_only_current() {
        let mut slot = TaskSlot::new(TypeId::of::<Search>());

        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.finish(first.id()));
        assert!(slot.in_flight());
        assert!(slot.finish(second.id()));
        assert!(!slot.in_flight());
        // A second finish for the same id is stale.
        assert!(!slot.finish(second.id()));
    }

    #[test]
    fn cancel_clears_slot() {
        let mut slot = TaskSlot::new(TypeId::of::<Search>());
        let handle = slot.begin();

        slot.cancel();

        assert!(handle.is_cancelled());
        assert!(!slot.in_flight());
        assert!(!slot.finish(handle.id()));
    }
}
