use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::consts::consts::EntityId;

use super::{Draft, UpdateStatement};

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
pub enum Role {
    Admin,
    Manager,
    Agent,
}

impl Role {
    /// Department a user lands in when none was picked
    pub fn default_department(&self) -> &'static str {
        match self {
            Role::Admin => "Administration",
            Role::Manager => "Sales Management",
            Role::Agent => "Sales",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Agent
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
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn toggled(&self) -> UserStatus {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub last_login: Option<NaiveDate>,
}

impl User {
    /// Text fields the free-text search looks at, a missing department is skipped
    pub fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];

        if let Some(department) = &self.department {
            fields.push(department);
        }

        fields
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
impl User {
    pub fn new_test(id: &str, role: Role, status: UserStatus) -> Self {
        User {
            id: EntityId::from(id),
            name: format!("User {}", id),
            email: format!("user{}@athenura.com", id),
            role,
            status,
            phone: None,
            department: Some(role.default_department().to_string()),
            join_date: None,
            last_login: None,
        }
    }
}

/// Add-user form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub department: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str) -> Self {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }
}

impl Default for NewUser {
    fn default() -> Self {
        NewUser {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: Role::Agent,
            department: Role::Agent.default_department().to_string(),
        }
    }
}

impl Draft for NewUser {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Full Name", self.name.as_str()),
            ("Email", self.email.as_str()),
        ]
    }
}

/// Edit-user form
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateUserData {
    pub name: UpdateStatement<String>,
    pub email: UpdateStatement<String>,
    pub role: UpdateStatement<Role>,
    pub status: UpdateStatement<UserStatus>,
    pub phone: UpdateStatement<String>,
    pub department: UpdateStatement<String>,
}
