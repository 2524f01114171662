use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Ids are handed out from the current list length, so they are only unique as long as
    /// nothing is ever removed from the list
    pub fn from_list_length(length: usize) -> EntityId {
        EntityId((length + 1).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

// Values
/// Categorical filter value that disables the filter
pub const FILTER_ALL: &str = "all";

/// Days between a lead being created and its first follow up
pub const DEFAULT_FOLLOW_UP_DAYS: u32 = 7;

/// Shown in exports for a user that has never logged in
pub const NEVER_LOGGED_IN: &str = "Never";

/// Date format used in export file names and exported fields
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_one_past_the_list_length() {
        assert_eq!(EntityId::from_list_length(0), EntityId("1".to_string()));
        assert_eq!(EntityId::from_list_length(10), EntityId("11".to_string()));
    }
}
