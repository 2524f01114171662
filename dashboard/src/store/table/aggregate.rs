use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::model::{
    lead::{Lead, LeadSource, LeadStatus},
    user::{Role, User},
};

/// Single pass over the records, one accumulator per key
pub fn count_by<T, K, F>(records: &[T], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts = BTreeMap::new();

    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    counts
}

/// Like `count_by` but every variant of the enum gets an entry, so empty categories show up as 0
fn count_by_variant<T, K, F>(records: &[T], key: F) -> BTreeMap<K, usize>
where
    K: Ord + IntoEnumIterator,
    F: Fn(&T) -> K,
{
    let mut counts: BTreeMap<K, usize> = K::iter().map(|variant| (variant, 0)).collect();

    for (variant, count) in count_by(records, key) {
        counts.insert(variant, count);
    }

    counts
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total: usize,
    pub new: usize,
    pub converted: usize,
    pub lost: usize,
    pub by_status: BTreeMap<LeadStatus, usize>,
    pub by_source: BTreeMap<LeadSource, usize>,
    pub by_agent: BTreeMap<String, usize>,
}

impl LeadStats {
    #[tracing::instrument(skip_all)]
    pub fn from_leads(leads: &[Lead]) -> Self {
        let by_status = count_by_variant(leads, |lead| lead.status);
        let status_count = |status: LeadStatus| by_status.get(&status).copied().unwrap_or(0);

        LeadStats {
            total: leads.len(),
            new: status_count(LeadStatus::New),
            converted: status_count(LeadStatus::Converted),
            lost: status_count(LeadStatus::Lost),
            by_source: count_by_variant(leads, |lead| lead.source),
            by_agent: count_by(leads, |lead| lead.assigned_agent.clone()),
            by_status,
        }
    }
}

/// Headline numbers on an agent's own dashboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub agent: String,
    pub total: usize,
    pub new: usize,
    pub qualified: usize,
    pub converted: usize,
}

impl AgentStats {
    #[tracing::instrument(skip(leads))]
    pub fn from_leads(agent: &str, leads: &[Lead]) -> Self {
        let assigned: Vec<&Lead> = leads
            .iter()
            .filter(|lead| lead.is_assigned_to(agent))
            .collect();

        let by_status = count_by(&assigned, |lead| lead.status);
        let status_count = |status: LeadStatus| by_status.get(&status).copied().unwrap_or(0);

        AgentStats {
            agent: agent.to_string(),
            total: assigned.len(),
            new: status_count(LeadStatus::New),
            qualified: status_count(LeadStatus::Qualified),
            converted: status_count(LeadStatus::Converted),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub agents: usize,
    pub by_role: BTreeMap<Role, usize>,
}

impl UserStats {
    #[tracing::instrument(skip_all)]
    pub fn from_users(users: &[User]) -> Self {
        let by_role = count_by_variant(users, |user| user.role);
        let role_count = |role: Role| by_role.get(&role).copied().unwrap_or(0);

        UserStats {
            total: users.len(),
            active: users.iter().filter(|user| user.is_active()).count(),
            admins: role_count(Role::Admin),
            agents: role_count(Role::Agent),
            by_role,
        }
    }
}
