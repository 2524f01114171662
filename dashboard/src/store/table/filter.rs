use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    consts::consts::FILTER_ALL,
    model::{
        lead::{Lead, LeadSource, LeadStatus},
        user::{Role, User, UserStatus},
    },
};

#[derive(Error, Debug, PartialEq)]
pub enum FilterParseError {
    #[error("Unknown filter value: {0}")]
    UnknownValue(String),
}

/// Exact-match filter over one categorical field, `All` turns it off
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum CategoryFilter<T> {
    All,
    Only(T),
}

impl<T> Default for CategoryFilter<T> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<T: PartialEq> CategoryFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for CategoryFilter<T> {
    type Err = FilterParseError;

    /// "all" disables the filter, anything else has to be an exact category value
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == FILTER_ALL {
            return Ok(CategoryFilter::All);
        }

        T::from_str(value)
            .map(CategoryFilter::Only)
            .map_err(|_| FilterParseError::UnknownValue(value.to_string()))
    }
}

/// Case-insensitive substring match over a record's searchable fields. An empty search
/// matches every record.
pub fn matches_search(search: &str, fields: &[&str]) -> bool {
    if search.is_empty() {
        return true;
    }

    let search = search.to_lowercase();

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&search))
}

pub trait RecordQuery<T> {
    fn matches(&self, record: &T) -> bool;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LeadQuery {
    pub search: String,
    pub status: CategoryFilter<LeadStatus>,
    pub source: CategoryFilter<LeadSource>,
    /// Narrows the list to one agent's leads
    pub assigned_agent: CategoryFilter<String>,
}

impl LeadQuery {
    pub fn search(search: &str) -> Self {
        LeadQuery {
            search: search.to_string(),
            ..Default::default()
        }
    }

    pub fn for_agent(agent: &str) -> Self {
        LeadQuery {
            assigned_agent: CategoryFilter::Only(agent.to_string()),
            ..Default::default()
        }
    }
}

impl RecordQuery<Lead> for LeadQuery {
    fn matches(&self, lead: &Lead) -> bool {
        matches_search(&self.search, &lead.search_fields())
            && self.status.matches(&lead.status)
            && self.source.matches(&lead.source)
            && self.assigned_agent.matches(&lead.assigned_agent)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UserQuery {
    pub search: String,
    pub role: CategoryFilter<Role>,
    pub status: CategoryFilter<UserStatus>,
}

impl RecordQuery<User> for UserQuery {
    fn matches(&self, user: &User) -> bool {
        matches_search(&self.search, &user.search_fields())
            && self.role.matches(&user.role)
            && self.status.matches(&user.status)
    }
}

/// Keeps the records matching the query, in their original order
#[tracing::instrument(skip(records))]
pub fn filter<T, Q>(records: Vec<T>, query: &Q) -> Vec<T>
where
    Q: RecordQuery<T> + fmt::Debug,
{
    let total = records.len();

    let filtered: Vec<T> = records
        .into_iter()
        .filter(|record| query.matches(record))
        .collect();

    log::debug!("Filter matched {} of {} records", filtered.len(), total);

    filtered
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample_lead() -> Lead {
        let mut lead = Lead::new_test("1", LeadStatus::Qualified);
        lead.name = "Michael Chen".to_string();
        lead.email = "m.chen@global.com".to_string();
        lead.company = "Global Solutions".to_string();
        lead.source = LeadSource::LinkedIn;
        lead.assigned_agent = "Mike Wilson".to_string();
        lead
    }

    #[rstest]
    #[case("", true)]
    #[case("michael", true)]
    #[case("MICHAEL", true)]
    #[case("chen@GLOBAL", true)]
    #[case("solutions", true)]
    #[case("wilson", false)]
    #[case("+1 234", false)]
    #[case("zzz", false)]
    fn lead_search_covers_name_email_and_company(#[case] search: &str, #[case] expected: bool) {
        let query = LeadQuery::search(search);

        assert_eq!(query.matches(&sample_lead()), expected);
    }

    #[rstest]
    #[case("all", "all", true)]
    #[case("qualified", "all", true)]
    #[case("new", "all", false)]
    #[case("all", "LinkedIn", true)]
    #[case("all", "Website", false)]
    #[case("qualified", "LinkedIn", true)]
    #[case("qualified", "Ads", false)]
    fn lead_categorical_filters_match_exactly(
        #[case] status: &str,
        #[case] source: &str,
        #[case] expected: bool,
    ) {
        let query = LeadQuery {
            status: status.parse().unwrap(),
            source: source.parse().unwrap(),
            ..Default::default()
        };

        assert_eq!(query.matches(&sample_lead()), expected);
    }

    #[test]
    fn search_and_categories_must_all_match() {
        let query = LeadQuery {
            search: "global".to_string(),
            status: CategoryFilter::Only(LeadStatus::New),
            ..Default::default()
        };

        assert!(!query.matches(&sample_lead()));
    }

    #[test]
    fn agent_scope_filters_by_assigned_agent() {
        assert!(LeadQuery::for_agent("Mike Wilson").matches(&sample_lead()));
        assert!(!LeadQuery::for_agent("John Smith").matches(&sample_lead()));
    }

    #[rstest]
    #[case("Qualified")]
    #[case("closed")]
    #[case("")]
    #[case("All")]
    fn unknown_category_value_is_rejected(#[case] value: &str) {
        assert_eq!(
            value.parse::<CategoryFilter<LeadStatus>>(),
            Err(FilterParseError::UnknownValue(value.to_string()))
        );
    }

    #[test]
    fn source_filter_parses_display_strings() {
        assert_eq!(
            "Cold Call".parse::<CategoryFilter<LeadSource>>(),
            Ok(CategoryFilter::Only(LeadSource::ColdCall))
        );
        assert!("cold call".parse::<CategoryFilter<LeadSource>>().is_err());
    }

    #[rstest]
    #[case("", "all", "all", 3)]
    #[case("sales", "all", "all", 2)]
    #[case("", "Agent", "all", 2)]
    #[case("", "all", "Inactive", 1)]
    #[case("", "Agent", "Active", 1)]
    #[case("administration", "Agent", "all", 0)]
    fn user_filters(
        #[case] search: &str,
        #[case] role: &str,
        #[case] status: &str,
        #[case] expected: usize,
    ) {
        let users = vec![
            User::new_test("1", Role::Admin, UserStatus::Active),
            User::new_test("2", Role::Agent, UserStatus::Active),
            User::new_test("3", Role::Agent, UserStatus::Inactive),
        ];

        let query = UserQuery {
            search: search.to_string(),
            role: role.parse().unwrap(),
            status: status.parse().unwrap(),
        };

        assert_eq!(filter(users, &query).len(), expected);
    }

    #[test]
    fn user_without_department_only_matches_name_or_email() {
        let mut user = User::new_test("1", Role::Agent, UserStatus::Active);
        user.department = None;

        let query = UserQuery {
            search: "sales".to_string(),
            ..Default::default()
        };

        assert!(!query.matches(&user));
    }

    #[test]
    fn filter_preserves_original_order() {
        let leads = vec![
            Lead::new_test("3", LeadStatus::New),
            Lead::new_test("1", LeadStatus::Lost),
            Lead::new_test("2", LeadStatus::New),
        ];

        let query = LeadQuery {
            status: CategoryFilter::Only(LeadStatus::New),
            ..Default::default()
        };

        let ids: Vec<String> = filter(leads, &query)
            .into_iter()
            .map(|lead| lead.id.to_string())
            .collect();

        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn empty_query_with_all_filters_returns_everything() {
        let leads = vec![
            Lead::new_test("1", LeadStatus::New),
            Lead::new_test("2", LeadStatus::Converted),
            Lead::new_test("3", LeadStatus::New),
        ];

        let filtered = filter(leads.clone(), &LeadQuery::default());

        assert_eq!(filtered, leads);
    }
}
