//! Sample leads and users the dashboard starts with

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    consts::consts::EntityId,
    model::{
        lead::{Lead, LeadSource, LeadStatus},
        user::{Role, User, UserStatus},
    },
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
    source: LeadSource,
    status: LeadStatus,
    assigned_agent: &str,
    created: NaiveDate,
    next_follow_up: Option<NaiveDate>,
) -> Lead {
    Lead {
        id: EntityId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: company.to_string(),
        source,
        status,
        assigned_agent: assigned_agent.to_string(),
        date: created,
        next_follow_up,
        notes: None,
    }
}

pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "1",
            "Alex Thompson",
            "alex@techcorp.com",
            "+1 234 567 8901",
            "TechCorp Inc.",
            LeadSource::Website,
            LeadStatus::New,
            "John Smith",
            date(2025, 2, 5),
            Some(date(2025, 2, 8)),
        ),
        lead(
            "2",
            "Sarah Johnson",
            "sarah@innovate.io",
            "+1 234 567 8902",
            "Innovate.io",
            LeadSource::Referral,
            LeadStatus::Contacted,
            "Emily Davis",
            date(2025, 2, 4),
            Some(date(2025, 2, 7)),
        ),
        lead(
            "3",
            "Michael Chen",
            "m.chen@global.com",
            "+1 234 567 8903",
            "Global Solutions",
            LeadSource::LinkedIn,
            LeadStatus::Qualified,
            "Mike Wilson",
            date(2025, 2, 3),
            None,
        ),
        lead(
            "4",
            "Emma Williams",
            "emma@startup.co",
            "+1 234 567 8904",
            "StartUp Co",
            LeadSource::Ads,
            LeadStatus::Proposal,
            "Sarah Johnson",
            date(2025, 2, 2),
            None,
        ),
        lead(
            "5",
            "David Brown",
            "david@enterprise.net",
            "+1 234 567 8905",
            "Enterprise Net",
            LeadSource::Website,
            LeadStatus::Converted,
            "John Smith",
            date(2025, 1, 28),
            None,
        ),
        lead(
            "6",
            "Lisa Anderson",
            "lisa@media.com",
            "+1 234 567 8906",
            "Media Group",
            LeadSource::Referral,
            LeadStatus::Negotiation,
            "Emily Davis",
            date(2025, 2, 1),
            None,
        ),
        lead(
            "7",
            "James Wilson",
            "james@consulting.biz",
            "+1 234 567 8907",
            "Wilson Consulting",
            LeadSource::LinkedIn,
            LeadStatus::Lost,
            "Mike Wilson",
            date(2025, 1, 25),
            None,
        ),
        lead(
            "8",
            "Jennifer Lee",
            "jen@finance.co",
            "+1 234 567 8908",
            "Finance Pro",
            LeadSource::Website,
            LeadStatus::New,
            "John Smith",
            date(2025, 2, 6),
            Some(date(2025, 2, 8)),
        ),
        lead(
            "9",
            "Robert Garcia",
            "robert@techstart.io",
            "+1 234 567 8909",
            "TechStart",
            LeadSource::LinkedIn,
            LeadStatus::Contacted,
            "John Smith",
            date(2025, 2, 7),
            Some(date(2025, 2, 9)),
        ),
        lead(
            "10",
            "Maria Rodriguez",
            "maria@digitalcorp.com",
            "+1 234 567 8910",
            "Digital Corp",
            LeadSource::Referral,
            LeadStatus::Qualified,
            "John Smith",
            date(2025, 2, 5),
            Some(date(2025, 2, 8)),
        ),
    ]
}

/// Phone numbers are not part of the sample users, each load makes up a new one
fn random_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "+1 {} {} {}",
        rng.gen_range(100..1000),
        rng.gen_range(100..1000),
        rng.gen_range(1000..10000)
    )
}

fn user<R: Rng>(
    rng: &mut R,
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
) -> User {
    User {
        id: EntityId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        phone: Some(random_phone(rng)),
        department: Some(role.default_department().to_string()),
        join_date: Some(date(2024, 1, 15)),
        last_login: Some(date(2024, 2, 7)),
    }
}

pub fn sample_users() -> Vec<User> {
    let mut rng = rand::thread_rng();

    vec![
        user(
            &mut rng,
            "1",
            "Admin User",
            "admin@athenura.com",
            Role::Admin,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "2",
            "Manager One",
            "manager1@athenura.com",
            Role::Manager,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "3",
            "John Smith",
            "john@athenura.com",
            Role::Agent,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "4",
            "Emily Davis",
            "emily@athenura.com",
            Role::Agent,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "5",
            "Mike Wilson",
            "mike@athenura.com",
            Role::Agent,
            UserStatus::Inactive,
        ),
        user(
            &mut rng,
            "6",
            "Sarah Johnson",
            "sarah.johnson@athenura.com",
            Role::Manager,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "7",
            "David Lee",
            "david.lee@athenura.com",
            Role::Agent,
            UserStatus::Active,
        ),
        user(
            &mut rng,
            "8",
            "Jennifer Kim",
            "jennifer.kim@athenura.com",
            Role::Agent,
            UserStatus::Active,
        ),
    ]
}
