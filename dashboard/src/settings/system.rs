use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{DateFormat, Language, Timezone};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Currency {
    #[serde(rename = "USD")]
    #[strum(serialize = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    #[strum(serialize = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    #[strum(serialize = "GBP")]
    Gbp,
    #[serde(rename = "CAD")]
    #[strum(serialize = "CAD")]
    Cad,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmailProvider {
    Sendgrid,
    Mailgun,
    AwsSes,
    Smtp,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentProcessor {
    Stripe,
    Paypal,
    Square,
    Authorize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub company_name: String,
    pub timezone: Timezone,
    pub date_format: DateFormat,
    pub language: Language,
    pub currency: Currency,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    /// Minutes
    pub session_timeout: u32,
    pub password_min_length: u32,
    pub login_attempts: u32,
    /// Comma separated CIDR ranges
    pub ip_whitelist: String,
}

impl SecuritySettings {
    pub fn ip_whitelist_entries(&self) -> Vec<&str> {
        self.ip_whitelist
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub lead_alerts: bool,
    pub system_alerts: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSettings {
    pub crm_enabled: bool,
    pub email_provider: EmailProvider,
    pub payment_processor: PaymentProcessor,
    pub analytics_enabled: bool,
}

/// Admin-wide configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub notifications: NotificationSettings,
    pub integrations: IntegrationSettings,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                company_name: "LeadFlow Hub".to_string(),
                timezone: Timezone::Eastern,
                date_format: DateFormat::MonthDayYear,
                language: Language::En,
                currency: Currency::Usd,
            },
            security: SecuritySettings {
                two_factor_enabled: true,
                session_timeout: 30,
                password_min_length: 8,
                login_attempts: 5,
                ip_whitelist: "192.168.1.0/24, 10.0.0.0/8".to_string(),
            },
            notifications: NotificationSettings {
                email_enabled: true,
                sms_enabled: false,
                push_enabled: true,
                lead_alerts: true,
                system_alerts: true,
            },
            integrations: IntegrationSettings {
                crm_enabled: true,
                email_provider: EmailProvider::Sendgrid,
                payment_processor: PaymentProcessor::Stripe,
                analytics_enabled: true,
            },
        }
    }
}
