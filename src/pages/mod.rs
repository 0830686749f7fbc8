//! Page state machines
//!
//! Each page owns its state and drives one or two backend calls, on load or
//! on a user action. Pages never share state. Navigation is returned to the
//! caller as a [`Route`](crate::routes::Route); errors are returned as well
//! so the app shell can react to `Unauthorized`.

mod detail;
mod form;
mod home;
mod login;
mod search;

pub use detail::PhraseDetailPage;
pub use form::PhraseFormPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use search::SearchResultsPage;

use crate::error::Error;

/// The lifecycle of a page's data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    /// The request failed with this message
    Failed(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Settle a finished request. `Unauthorized` leaves the page loading,
    /// since the app shell navigates away.
    pub(crate) fn settle(&mut self, result: Result<T, Error>) -> Result<(), Error> {
        match result {
            Ok(value) => {
                *self = ViewState::Ready(value);
                Ok(())
            }
            Err(e) if e.is_unauthorized() => Err(e),
            Err(e) => {
                *self = ViewState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
