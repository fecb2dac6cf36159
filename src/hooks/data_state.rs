use std::rc::Rc;

use crate::models::error::AppError;

/// Lifecycle of a single fetched document
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T: Default> DataState<T> {
    /// Maps a fetch result onto a state.
    ///
    /// Empty or malformed data is not an error: it loads as an empty value so
    /// the views fall back to placeholders without an error banner.
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(Rc::new(value)),
            Err(e) if e.is_empty_data() => Self::Loaded(Rc::new(T::default())),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

impl<T> DataState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Data to render for this state.
    ///
    /// On error this is `fallback()` when `fallback_on_error` is set and
    /// nothing otherwise.
    pub fn resolve(&self, fallback_on_error: bool, fallback: impl FnOnce() -> T) -> Option<Rc<T>> {
        match self {
            Self::Loaded(value) => Some(value.clone()),
            Self::Error(_) if fallback_on_error => Some(Rc::new(fallback())),
            _ => None,
        }
    }
}
