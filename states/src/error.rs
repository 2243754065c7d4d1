use thiserror::Error;

pub type Result<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State not found: {type_name}")]
    NotFound { type_name: &'static str },
}

impl StateError {
    pub fn not_found<T>() -> Self {
        Self::NotFound {
            type_name: std::any::type_name::<T>(),
        }
    }
}
