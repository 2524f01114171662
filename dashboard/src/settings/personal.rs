use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::model::user::Role;

use super::{DateFormat, Language, Timezone};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Department {
    Sales,
    Marketing,
    Administration,
    Operations,
}

/// How new leads get handed to agents
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LeadAssignment {
    RoundRobin,
    Manual,
    Performance,
    Territory,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub department: Department,
    pub bio: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_new_lead: bool,
    pub email_assignment: bool,
    pub email_daily_report: bool,
    pub email_weekly_report: bool,
    pub push_new_lead: bool,
    pub push_followup: bool,
    pub push_target_reached: bool,
    pub sms_important: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemPreferences {
    pub lead_assignment: LeadAssignment,
    /// Days
    pub auto_followup: u32,
    /// Minutes
    pub session_timeout: u32,
    pub date_format: DateFormat,
    pub time_zone: Timezone,
    pub theme: Theme,
    pub language: Language,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPreferences {
    pub two_factor: bool,
    pub login_notifications: bool,
    pub session_logs: bool,
    /// Days
    pub password_expiry: u32,
}

/// Settings of the signed-in user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonalSettings {
    pub profile: Profile,
    pub notifications: NotificationPreferences,
    pub system: SystemPreferences,
    pub security: SecurityPreferences,
}

impl Default for PersonalSettings {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Admin User".to_string(),
                email: "admin@athenura.com".to_string(),
                phone: "+1 234 567 8900".to_string(),
                role: Role::Admin,
                department: Department::Sales,
                bio: "Lead management system administrator with 5+ years of experience."
                    .to_string(),
            },
            notifications: NotificationPreferences {
                email_new_lead: true,
                email_assignment: true,
                email_daily_report: false,
                email_weekly_report: true,
                push_new_lead: false,
                push_followup: true,
                push_target_reached: true,
                sms_important: false,
            },
            system: SystemPreferences {
                lead_assignment: LeadAssignment::RoundRobin,
                auto_followup: 7,
                session_timeout: 30,
                date_format: DateFormat::MonthDayYear,
                time_zone: Timezone::Pacific,
                theme: Theme::Light,
                language: Language::En,
            },
            security: SecurityPreferences {
                two_factor: false,
                login_notifications: true,
                session_logs: true,
                password_expiry: 90,
            },
        }
    }
}
