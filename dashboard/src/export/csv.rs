use crate::{
    consts::consts::{EXPORT_DATE_FORMAT, NEVER_LOGGED_IN},
    model::{lead::Lead, user::User},
};

/// Flattens a record into one CSV row. Columns follow the record's declared fields.
pub trait Tabular {
    const HEADER: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

impl Tabular for Lead {
    const HEADER: &'static [&'static str] = &[
        "ID",
        "Name",
        "Email",
        "Phone",
        "Company",
        "Source",
        "Status",
        "Assigned Agent",
        "Date",
        "Next Follow Up",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.company.clone(),
            self.source.to_string(),
            self.status.to_string(),
            self.assigned_agent.clone(),
            self.date.format(EXPORT_DATE_FORMAT).to_string(),
            self.next_follow_up
                .map(|date| date.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
        ]
    }
}

impl Tabular for User {
    const HEADER: &'static [&'static str] = &[
        "ID",
        "Name",
        "Email",
        "Role",
        "Status",
        "Phone",
        "Department",
        "Join Date",
        "Last Login",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.phone.clone().unwrap_or_default(),
            self.department.clone().unwrap_or_default(),
            self.join_date
                .map(|date| date.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            self.last_login
                .map(|date| date.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_else(|| NEVER_LOGGED_IN.to_string()),
        ]
    }
}

/// Every field is wrapped in double quotes, quotes inside a field are doubled
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn format_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| quote(field.as_ref()))
        .collect::<Vec<String>>()
        .join(",")
}

/// Header line followed by one line per record, joined with `\n`
pub fn to_csv<T: Tabular>(records: &[T]) -> String {
    let mut lines = vec![format_row(T::HEADER)];

    lines.extend(records.iter().map(|record| format_row(&record.row())));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{
        lead::{LeadSource, LeadStatus},
        user::{Role, UserStatus},
    };

    #[test]
    fn lead_row_follows_declared_field_order() {
        let mut lead = Lead::new_test("3", LeadStatus::Qualified);
        lead.source = LeadSource::ColdCall;
        lead.next_follow_up = NaiveDate::from_ymd_opt(2025, 2, 12);

        let csv = to_csv(&[lead]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "\"ID\",\"Name\",\"Email\",\"Phone\",\"Company\",\"Source\",\"Status\",\"Assigned Agent\",\"Date\",\"Next Follow Up\""
        );
        assert_eq!(
            lines[1],
            "\"3\",\"Lead 3\",\"lead3@example.com\",\"+1 234 567 8900\",\"Example Co\",\"Cold Call\",\"qualified\",\"John Smith\",\"2025-02-05\",\"2025-02-12\""
        );
    }

    #[test]
    fn user_without_login_is_exported_as_never() {
        let mut user = User::new_test("5", Role::Agent, UserStatus::Inactive);
        user.join_date = NaiveDate::from_ymd_opt(2024, 1, 15);

        let row = user.row();

        assert_eq!(row.len(), User::HEADER.len());
        assert_eq!(row[4], "Inactive");
        assert_eq!(row[5], "");
        assert_eq!(row[7], "2024-01-15");
        assert_eq!(row[8], "Never");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut lead = Lead::new_test("1", LeadStatus::New);
        lead.company = "The \"Best\" Co".to_string();

        let csv = to_csv(&[lead]);

        assert!(csv.contains("\"The \"\"Best\"\" Co\""));
    }

    #[test]
    fn empty_list_exports_only_the_header() {
        let csv = to_csv::<User>(&[]);

        assert_eq!(csv.lines().count(), 1);
        assert!(!csv.ends_with('\n'));
    }
}
