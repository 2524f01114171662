use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    model::{lead::Lead, user::User},
    store::table::aggregate::{AgentStats, LeadStats, UserStats},
};

/// Reporting window picked on the reports page, in days
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum ReportRange {
    #[serde(rename = "7")]
    #[strum(serialize = "7")]
    LastWeek,
    #[serde(rename = "30")]
    #[strum(serialize = "30")]
    LastMonth,
    #[serde(rename = "90")]
    #[strum(serialize = "90")]
    LastQuarter,
    #[serde(rename = "365")]
    #[strum(serialize = "365")]
    LastYear,
}

impl ReportRange {
    pub fn days(&self) -> u32 {
        match self {
            ReportRange::LastWeek => 7,
            ReportRange::LastMonth => 30,
            ReportRange::LastQuarter => 90,
            ReportRange::LastYear => 365,
        }
    }
}

impl Default for ReportRange {
    fn default() -> Self {
        ReportRange::LastMonth
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportType {
    #[default]
    Leads,
    Agents,
    Users,
}

/// Everything the reports page exports in one document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub export_date: NaiveDate,
    pub date_range: ReportRange,
    pub report_type: ReportType,
    pub lead_stats: LeadStats,
    /// One entry per agent that has leads assigned
    pub agent_performance: BTreeMap<String, AgentStats>,
    pub user_stats: UserStats,
}

impl ReportSnapshot {
    #[tracing::instrument(skip(leads, users))]
    pub fn build(
        export_date: NaiveDate,
        date_range: ReportRange,
        report_type: ReportType,
        leads: &[Lead],
        users: &[User],
    ) -> Self {
        let lead_stats = LeadStats::from_leads(leads);

        let agent_performance = lead_stats
            .by_agent
            .keys()
            .filter(|agent| !agent.is_empty())
            .map(|agent| (agent.clone(), AgentStats::from_leads(agent, leads)))
            .collect();

        ReportSnapshot {
            export_date,
            date_range,
            report_type,
            lead_stats,
            agent_performance,
            user_stats: UserStats::from_users(users),
        }
    }
}
