use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use log::debug;

use crate::{Result, State, StateError};

/// Holds every registered [`State`], keyed by its concrete type.
///
/// There is at most one value per type. Pages register their state once at
/// startup and then borrow it each frame.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        debug!("Registering state {}", type_name::<T>());
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn try_state<T: State>(&self) -> Result<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(StateError::not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .ok_or_else(StateError::not_found::<T>)
    }

    /// Borrow a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutably borrow a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }
}
