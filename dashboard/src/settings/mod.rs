pub mod editor;
pub mod personal;
pub mod system;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

// Choices shared by the system and personal settings pages

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Timezone {
    #[serde(rename = "UTC-8")]
    #[strum(serialize = "UTC-8")]
    Pacific,
    #[serde(rename = "UTC-7")]
    #[strum(serialize = "UTC-7")]
    Mountain,
    #[serde(rename = "UTC-6")]
    #[strum(serialize = "UTC-6")]
    Central,
    #[serde(rename = "UTC-5")]
    #[strum(serialize = "UTC-5")]
    Eastern,
    #[serde(rename = "UTC+0")]
    #[strum(serialize = "UTC+0")]
    Utc,
    #[serde(rename = "UTC+5:30")]
    #[strum(serialize = "UTC+5:30")]
    India,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum DateFormat {
    #[serde(rename = "MM/DD/YYYY")]
    #[strum(serialize = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    #[strum(serialize = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    #[strum(serialize = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    /// chrono format string for this choice
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
}
