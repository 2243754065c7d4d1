use std::any::Any;

/// A value that can be stored in a [`StateCtx`](crate::StateCtx).
///
/// Implementors are usually plain structs owned by one page or feature.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
