use std::rc::Rc;

use crate::models::error::AppError;

/// Render state of a page. Exactly one variant holds at a time, so a page can
/// never show a spinner, an error and data together.
#[derive(Clone, PartialEq, Debug)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Empty,
    Ready(Rc<T>),
}

impl<T> ViewState<T> {
    /// Settles a fetch outcome. Failures collapse into the page's generic
    /// `failure_message`; the detailed error is for the console only.
    pub fn from_result(result: Result<Option<T>, AppError>, failure_message: &str) -> Self {
        match result {
            Ok(Some(data)) => Self::Ready(Rc::new(data)),
            Ok(None) => Self::Empty,
            Err(_) => Self::Error(failure_message.to_string()),
        }
    }

    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the fetch succeeded without data
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the user-facing error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}
