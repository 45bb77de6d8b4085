//! Page controllers. Each page owns its state for its own lifetime, applies
//! view events, and reconciles with the backend through its data service.

mod project;
mod team;
mod validation;
mod work_details;

#[cfg(test)]
pub(crate) mod fakes;

pub use project::{DependencyField, ProjectEvent, ProjectField, ProjectPage};
pub use team::{BookmarkField, FaqField, TeamEvent, TeamPage};
pub use validation::require_non_blank;
pub use work_details::{LocationField, WorkDetailsEvent, WorkDetailsPage};

use crate::error::{ActionError, ActionResult, ClientError};
use crate::models::{Identified, RecordId};
use tracing::{debug, info, warn};

/// Per-collection load state. Stays `Loading` until the first fetch succeeds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Loadable::Ready(v) => Some(v),
            Loadable::Loading => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(v) => Some(v),
            Loadable::Loading => None,
        }
    }

    /// Borrow the loaded value or fail with `NotLoaded(what)`.
    pub fn require(&self, what: &'static str) -> Result<&T, ActionError> {
        self.get().ok_or(ActionError::NotLoaded(what))
    }

    pub fn require_mut(&mut self, what: &'static str) -> Result<&mut T, ActionError> {
        self.get_mut().ok_or(ActionError::NotLoaded(what))
    }
}

/// Last user-visible outcome of a page action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }
}

/// Record the outcome of `action` as the page notice and log it. Local edits
/// pass `success: None` so a successful edit leaves the notice alone.
pub(crate) fn settle(
    notice: &mut Option<Notice>,
    action: &str,
    result: ActionResult,
    success: Option<String>,
) -> ActionResult {
    match &result {
        Ok(()) => match success {
            Some(message) => {
                info!(action, "{}", message);
                *notice = Some(Notice::Success(message));
            }
            None => debug!(action, "done"),
        },
        Err(e) => {
            warn!(action, error = %e, "page action failed");
            *notice = Some(Notice::Error(format!("{} failed: {}", action, e)));
        }
    }
    result
}

/// Overwrite `slot` with a fetch result; on failure keep the old state.
pub(crate) fn apply_fetch<T>(
    slot: &mut Loadable<T>,
    result: Result<T, ClientError>,
) -> Result<(), ActionError> {
    let value = result?;
    *slot = Loadable::Ready(value);
    Ok(())
}

/// Find the row carrying backend id `id`.
pub(crate) fn find_by_id<'a, T: Identified>(
    rows: &'a mut [T],
    id: RecordId,
    kind: &'static str,
) -> Result<&'a mut T, ActionError> {
    rows.iter_mut()
        .find(|r| r.id() == Some(id))
        .ok_or_else(|| ActionError::no_row(kind, id))
}

pub(crate) fn row_at<'a, T>(
    rows: &'a mut [T],
    index: usize,
    kind: &'static str,
) -> Result<&'a mut T, ActionError> {
    rows.get_mut(index).ok_or_else(|| ActionError::no_row(kind, index))
}

/// Parse a comma separated list as typed into a single text field.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
