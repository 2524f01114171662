use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::consts::consts::EntityId;

use super::{Draft, UpdateStatement};

/// Pipeline stage of a lead. Declaration order is the pipeline order, any stage can be
/// reached from any other.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Converted,
    Lost,
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum LeadSource {
    Website,
    Referral,
    LinkedIn,
    Ads,
    #[serde(rename = "Cold Call")]
    #[strum(serialize = "Cold Call")]
    ColdCall,
}

impl Default for LeadSource {
    fn default() -> Self {
        LeadSource::Website
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub assigned_agent: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Lead {
    /// Text fields the free-text search looks at
    pub fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.company.as_str(),
        ]
    }

    pub fn is_assigned_to(&self, agent: &str) -> bool {
        self.assigned_agent == agent
    }
}

#[cfg(test)]
impl Lead {
    pub fn new_test(id: &str, status: LeadStatus) -> Self {
        Lead {
            id: EntityId::from(id),
            name: format!("Lead {}", id),
            email: format!("lead{}@example.com", id),
            phone: "+1 234 567 8900".to_string(),
            company: "Example Co".to_string(),
            source: LeadSource::Website,
            status,
            assigned_agent: "John Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            next_follow_up: None,
            notes: None,
        }
    }
}

/// Add-lead form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: LeadSource,
    pub assigned_agent: String,
    #[serde(default)]
    pub notes: String,
}

impl NewLead {
    pub fn new(name: &str, email: &str) -> Self {
        NewLead {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }
}

impl Draft for NewLead {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Name", self.name.as_str()), ("Email", self.email.as_str())]
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateLeadData {
    pub name: UpdateStatement<String>,
    pub email: UpdateStatement<String>,
    pub phone: UpdateStatement<String>,
    pub company: UpdateStatement<String>,
    pub source: UpdateStatement<LeadSource>,
    pub status: UpdateStatement<LeadStatus>,
    pub assigned_agent: UpdateStatement<String>,
    pub next_follow_up: UpdateStatement<NaiveDate>,
    pub notes: UpdateStatement<String>,
}
