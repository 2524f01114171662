use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::EntityId,
    store::table::{
        aggregate::{AgentStats, LeadStats, UserStats},
        filter::{LeadQuery, UserQuery},
    },
};

use super::{
    lead::{Lead, LeadStatus, NewLead, UpdateLeadData},
    user::{NewUser, UpdateUserData, User},
};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum Statement {
    // Leads
    AddLead(NewLead),
    UpdateLeadStatus(EntityId, LeadStatus),
    UpdateLead(EntityId, UpdateLeadData),
    GetLead(EntityId),
    /// Returns a list of Lead, all of them when there is no query
    ListLeads(Option<LeadQuery>),
    LeadStats,
    /// Stats for the leads assigned to one agent
    AgentStats(String),

    // Users
    AddUser(NewUser),
    UpdateUser(EntityId, UpdateUserData),
    ToggleUserStatus(EntityId),
    GetUser(EntityId),
    ListUsers(Option<UserQuery>),
    UserStats,
    /// Replaces the user list with the sample users
    RefreshUsers,
}

impl Statement {
    pub fn is_query(&self) -> bool {
        !self.is_mutation()
    }

    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::AddLead(_)
            | Statement::UpdateLeadStatus(_, _)
            | Statement::UpdateLead(_, _)
            | Statement::AddUser(_)
            | Statement::UpdateUser(_, _)
            | Statement::ToggleUserStatus(_)
            | Statement::RefreshUsers => true,
            Statement::GetLead(_)
            | Statement::ListLeads(_)
            | Statement::LeadStats
            | Statement::AgentStats(_)
            | Statement::GetUser(_)
            | Statement::ListUsers(_)
            | Statement::UserStats => false,
        }
    }

    /// Prints complex statements in a more readable format
    pub fn log_format(&self) -> String {
        match self {
            Statement::UpdateLead(_, _) | Statement::UpdateUser(_, _) => format!("{:#?}", self),
            _ => format!("{:?}", self),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum StatementResult {
    /// Used for status messages
    SuccessStatus(String),
    Lead(Lead),
    Leads(Vec<Lead>),
    User(User),
    Users(Vec<User>),
    LeadStats(LeadStats),
    AgentStats(AgentStats),
    UserStats(UserStats),
}

impl StatementResult {
    pub fn lead(self) -> Option<Lead> {
        match self {
            StatementResult::Lead(lead) => Some(lead),
            _ => None,
        }
    }

    pub fn leads(self) -> Option<Vec<Lead>> {
        match self {
            StatementResult::Leads(leads) => Some(leads),
            _ => None,
        }
    }

    pub fn user(self) -> Option<User> {
        match self {
            StatementResult::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn users(self) -> Option<Vec<User>> {
        match self {
            StatementResult::Users(users) => Some(users),
            _ => None,
        }
    }

    pub fn lead_stats(self) -> Option<LeadStats> {
        match self {
            StatementResult::LeadStats(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn agent_stats(self) -> Option<AgentStats> {
        match self {
            StatementResult::AgentStats(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn user_stats(self) -> Option<UserStats> {
        match self {
            StatementResult::UserStats(stats) => Some(stats),
            _ => None,
        }
    }
}
