use crate::{
    consts::consts::EntityId,
    model::{
        user::{NewUser, UpdateUserData, User, UserStatus},
        Draft,
    },
};

use super::{
    aggregate::UserStats,
    filter::{filter, UserQuery},
    table::{
        non_empty, set_optional, set_required, set_value, ApplyContext, ApplyErrors, Placement,
        RecordTable,
    },
};

/// Users are listed in join order, additions go to the back of the list
pub struct UserTable {
    table: RecordTable<User>,
}

impl UserTable {
    pub fn new() -> Self {
        Self {
            table: RecordTable::new(Placement::Back),
        }
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            table: RecordTable::from_rows(users, Placement::Back),
        }
    }

    pub fn users(&self) -> &[User] {
        self.table.rows()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn add(&mut self, draft: NewUser, context: &ApplyContext) -> Result<User, ApplyErrors> {
        if let Some(field) = draft.first_missing_field() {
            return Err(ApplyErrors::MissingRequiredField(field.to_string()));
        }

        let user = User {
            id: self.table.next_id(),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: UserStatus::Active,
            phone: non_empty(draft.phone),
            department: non_empty(draft.department),
            join_date: Some(context.today),
            last_login: None,
        };

        self.table.insert(user.clone());

        Ok(user)
    }

    /// Flips Active/Inactive on one user, every other row stays as it was
    pub fn toggle_status(&mut self, id: &EntityId) -> Result<User, ApplyErrors> {
        self.table.replace(id, |current| {
            let mut user = current.clone();
            user.status = current.status.toggled();
            Ok(user)
        })
    }

    pub fn update(&mut self, id: &EntityId, update: UpdateUserData) -> Result<User, ApplyErrors> {
        self.table.replace(id, |current| {
            let mut user = current.clone();

            set_required("Name", update.name, &mut user.name)?;
            set_required("Email", update.email, &mut user.email)?;
            set_value("Role", update.role, &mut user.role)?;
            set_value("Status", update.status, &mut user.status)?;
            set_optional(update.phone, &mut user.phone);
            set_optional(update.department, &mut user.department);

            Ok(user)
        })
    }

    pub fn get(&self, id: &EntityId) -> Result<User, ApplyErrors> {
        self.table
            .get(id)
            .cloned()
            .ok_or(ApplyErrors::CannotGetDoesNotExist(id.clone()))
    }

    pub fn list(&self, query: Option<&UserQuery>) -> Vec<User> {
        let users = self.table.rows().to_vec();

        match query {
            Some(query) => filter(users, query),
            None => users,
        }
    }

    pub fn stats(&self) -> UserStats {
        UserStats::from_users(self.table.rows())
    }

    pub fn replace_all(&mut self, users: Vec<User>) {
        self.table.replace_all(users);
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{user::Role, UpdateStatement};

    fn context() -> ApplyContext {
        ApplyContext {
            today: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            follow_up_days: 7,
        }
    }

    fn seeded_table() -> UserTable {
        UserTable::from_users(vec![
            User::new_test("1", Role::Admin, UserStatus::Active),
            User::new_test("2", Role::Agent, UserStatus::Active),
            User::new_test("3", Role::Agent, UserStatus::Inactive),
        ])
    }

    #[test]
    fn adding_user_appends_active_user() {
        // Given a table with three users
        let mut table = seeded_table();

        // When we add a user with the default form
        let user = table
            .add(NewUser::new("Jennifer Kim", "jennifer.kim@athenura.com"), &context())
            .unwrap();

        // Then it is appended, active, joined today and has never logged in
        assert_eq!(table.len(), 4);
        assert_eq!(table.users()[3], user);
        assert_eq!(user.id, EntityId::from("4"));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.department.as_deref(), Some("Sales"));
        assert_eq!(user.phone, None);
        assert_eq!(user.join_date, NaiveDate::from_ymd_opt(2025, 2, 10));
        assert_eq!(user.last_login, None);
    }

    #[test]
    fn missing_name_is_refused() {
        let mut table = seeded_table();

        let result = table.add(NewUser::new(" ", "someone@athenura.com"), &context());

        assert_eq!(
            result,
            Err(ApplyErrors::MissingRequiredField("Full Name".to_string()))
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn toggle_flips_only_that_user() {
        let mut table = seeded_table();
        let before = table.users().to_vec();

        let toggled = table.toggle_status(&EntityId::from("3")).unwrap();

        assert_eq!(toggled.status, UserStatus::Active);
        assert_eq!(&table.users()[..2], &before[..2]);

        let mut expected = before[2].clone();
        expected.status = UserStatus::Active;
        assert_eq!(table.users()[2], expected);
    }

    #[test]
    fn toggle_unknown_user_leaves_table_unchanged() {
        let mut table = seeded_table();
        let before = table.users().to_vec();

        let result = table.toggle_status(&EntityId::from("7"));

        assert!(result.is_err());
        assert_eq!(table.users(), before.as_slice());
    }

    #[test]
    fn edit_form_updates_role_and_status() {
        let mut table = seeded_table();

        let updated = table
            .update(
                &EntityId::from("2"),
                UpdateUserData {
                    name: UpdateStatement::Set("Emily Davis".to_string()),
                    role: UpdateStatement::Set(Role::Manager),
                    status: UpdateStatement::Set(UserStatus::Inactive),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Emily Davis");
        assert_eq!(updated.role, Role::Manager);
        assert_eq!(updated.status, UserStatus::Inactive);
        assert_eq!(updated.email, "user2@athenura.com");
    }

    #[test]
    fn email_cannot_be_blanked() {
        let mut table = seeded_table();

        let result = table.update(
            &EntityId::from("1"),
            UpdateUserData {
                email: UpdateStatement::Set(String::new()),
                ..Default::default()
            },
        );

        assert_eq!(
            result,
            Err(ApplyErrors::NotNullConstraintViolation("Email".to_string()))
        );
    }
}
