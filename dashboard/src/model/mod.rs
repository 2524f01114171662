pub mod lead;
pub mod statement;
pub mod user;

use serde::{Deserialize, Serialize};

/// Partial update of a single field. Fields that are not nullable reject `Unset`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum UpdateStatement<T> {
    Set(T),
    Unset,
    NoChanges,
}

impl<T> Default for UpdateStatement<T> {
    fn default() -> Self {
        UpdateStatement::NoChanges
    }
}

/// Unsubmitted form state for a new record
pub trait Draft {
    /// Required fields paired with their current value, in form order
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// First required field that is still empty, if any
    fn first_missing_field(&self) -> Option<&'static str> {
        self.required_fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
    }

    /// Mirrors the submit button: disabled while a required field is empty
    fn can_submit(&self) -> bool {
        self.first_missing_field().is_none()
    }
}
