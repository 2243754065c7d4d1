/// Progress of one remote collection owned by a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchStatus<U> {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Loading => FetchStatus::Loading,
            Self::Loaded(value) => FetchStatus::Loaded(f(value)),
            Self::Failed(message) => FetchStatus::Failed(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchStatus<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

impl<T> FetchStatus<Vec<T>> {
    /// Loaded rows, or an empty slice while nothing is loaded.
    pub fn rows(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let status = FetchStatus::<Vec<u32>>::default();

        assert!(status.is_idle());
        assert!(status.rows().is_empty());
    }

    #[test]
    fn from_result() {
        let ok: FetchStatus<u32> = Ok::<_, String>(3).into();
        let err: FetchStatus<u32> = Err::<u32, _>("boom").into();

        assert_eq!(ok.loaded(), Some(&3));
        assert_eq!(err.error(), Some("boom"));
    }

    #[test]
    fn map_keeps_state() {
        assert_eq!(FetchStatus::Loaded(2).map(|n| n * 2), FetchStatus::Loaded(4));
        assert_eq!(
            FetchStatus::<u32>::Failed("x".to_string()).map(|n| n * 2),
            FetchStatus::Failed("x".to_string())
        );
    }
}
