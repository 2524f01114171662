use num_format::{Locale, ToFormattedString};

use crate::{
    export::{
        self,
        report::{ReportRange, ReportSnapshot, ReportType},
        storage::{ExportStorage, FileStorage},
        ExportFile, ExportResult,
    },
    model::statement::{Statement, StatementResult},
    settings::{editor::SettingsEditor, personal::PersonalSettings, system::SystemSettings},
    utils::clock::{Clock, SystemClock},
};

use super::{
    options::DashboardOptions,
    seed::{sample_leads, sample_users},
    table::{
        filter::UserQuery,
        lead_table::LeadTable,
        table::{ApplyContext, ApplyErrors},
        user_table::UserTable,
    },
};

/// What to export
#[derive(Clone, Debug, PartialEq)]
pub enum ExportKind {
    Leads,
    /// Only the users matching the query, every user without one
    Users(Option<UserQuery>),
    Settings,
    Report(ReportRange, ReportType),
}

/// Owns every list and settings document. Statements run one at a time, each one is done
/// before the next is looked at.
pub struct Dashboard {
    lead_table: LeadTable,
    user_table: UserTable,
    system_settings: SettingsEditor<SystemSettings>,
    personal_settings: SettingsEditor<PersonalSettings>,
    options: DashboardOptions,
    clock: Box<dyn Clock>,
}

impl Dashboard {
    pub fn new(options: DashboardOptions) -> Self {
        Self::with_clock(options, Box::new(SystemClock))
    }

    pub fn with_clock(options: DashboardOptions, clock: Box<dyn Clock>) -> Self {
        let (lead_table, user_table) = if options.seed {
            (
                LeadTable::from_leads(sample_leads()),
                UserTable::from_users(sample_users()),
            )
        } else {
            (LeadTable::new(), UserTable::new())
        };

        log::info!(
            "📀 Data               [Leads: {}, Users: {}, FollowUpDays: {}]",
            lead_table.len().to_formatted_string(&Locale::en),
            user_table.len().to_formatted_string(&Locale::en),
            options.follow_up_days
        );

        Self {
            lead_table,
            user_table,
            system_settings: SettingsEditor::default(),
            personal_settings: SettingsEditor::new(personal_defaults(&options)),
            options,
            clock,
        }
    }

    fn context(&self) -> ApplyContext {
        ApplyContext {
            today: self.clock.today(),
            follow_up_days: self.personal_settings.saved().system.auto_followup,
        }
    }

    pub fn process(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        log::info!("Received statement: {}", statement.log_format());

        let result = self.apply(statement);

        if let Err(err) = &result {
            log::warn!("Statement refused: {}", err);
        }

        result
    }

    pub fn process_statements(
        &mut self,
        statements: Vec<Statement>,
    ) -> Vec<Result<StatementResult, ApplyErrors>> {
        statements
            .into_iter()
            .map(|statement| self.process(statement))
            .collect()
    }

    fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let context = self.context();

        let result = match statement {
            // Leads
            Statement::AddLead(draft) => {
                StatementResult::Lead(self.lead_table.add(draft, &context)?)
            }
            Statement::UpdateLeadStatus(id, status) => {
                StatementResult::Lead(self.lead_table.update_status(&id, status)?)
            }
            Statement::UpdateLead(id, update) => {
                StatementResult::Lead(self.lead_table.update(&id, update)?)
            }
            Statement::GetLead(id) => StatementResult::Lead(self.lead_table.get(&id)?),
            Statement::ListLeads(query) => {
                StatementResult::Leads(self.lead_table.list(query.as_ref()))
            }
            Statement::LeadStats => StatementResult::LeadStats(self.lead_table.stats()),
            Statement::AgentStats(agent) => {
                StatementResult::AgentStats(self.lead_table.agent_stats(&agent))
            }

            // Users
            Statement::AddUser(draft) => {
                StatementResult::User(self.user_table.add(draft, &context)?)
            }
            Statement::UpdateUser(id, update) => {
                StatementResult::User(self.user_table.update(&id, update)?)
            }
            Statement::ToggleUserStatus(id) => {
                StatementResult::User(self.user_table.toggle_status(&id)?)
            }
            Statement::GetUser(id) => StatementResult::User(self.user_table.get(&id)?),
            Statement::ListUsers(query) => {
                StatementResult::Users(self.user_table.list(query.as_ref()))
            }
            Statement::UserStats => StatementResult::UserStats(self.user_table.stats()),
            Statement::RefreshUsers => {
                self.user_table.replace_all(sample_users());

                StatementResult::SuccessStatus("Users data has been refreshed".to_string())
            }
        };

        Ok(result)
    }

    /// Clears every list and puts both settings documents back to their defaults
    pub fn reset(&mut self) {
        self.lead_table = LeadTable::new();
        self.user_table = UserTable::new();
        self.system_settings.reset();
        self.personal_settings = SettingsEditor::new(personal_defaults(&self.options));

        log::info!("Dashboard reset, all leads, users and settings removed");
    }

    pub fn leads(&self) -> &LeadTable {
        &self.lead_table
    }

    pub fn users(&self) -> &UserTable {
        &self.user_table
    }

    pub fn system_settings(&self) -> &SettingsEditor<SystemSettings> {
        &self.system_settings
    }

    pub fn system_settings_mut(&mut self) -> &mut SettingsEditor<SystemSettings> {
        &mut self.system_settings
    }

    pub fn personal_settings(&self) -> &SettingsEditor<PersonalSettings> {
        &self.personal_settings
    }

    pub fn personal_settings_mut(&mut self) -> &mut SettingsEditor<PersonalSettings> {
        &mut self.personal_settings
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Snapshot of the current in-memory state, nothing is written
    pub fn export(&self, kind: ExportKind) -> ExportResult<ExportFile> {
        let today = self.clock.today();

        match kind {
            ExportKind::Leads => Ok(export::leads_csv(self.lead_table.leads(), today)),
            ExportKind::Users(query) => Ok(export::users_csv(
                &self.user_table.list(query.as_ref()),
                today,
            )),
            ExportKind::Settings => export::settings_json(self.system_settings.draft(), today),
            ExportKind::Report(range, report_type) => {
                let report = ReportSnapshot::build(
                    today,
                    range,
                    report_type,
                    self.lead_table.leads(),
                    self.user_table.users(),
                );

                export::report_json(&report)
            }
        }
    }

    /// Exports and writes the file into the configured export directory
    pub fn export_to_directory(&self, kind: ExportKind) -> ExportResult<std::path::PathBuf> {
        let file = self.export(kind)?;
        let storage = FileStorage::new(self.options.export_directory.clone());

        storage.init()?;
        let path = storage.write_blob(&file.file_name, file.contents.as_bytes())?;

        log::info!("Exported [{}] to [{}]", file.file_name, path.display());

        Ok(path)
    }
}

/// Personal settings start with the configured follow-up interval, the saved value drives new
/// leads from then on
fn personal_defaults(options: &DashboardOptions) -> PersonalSettings {
    let mut settings = PersonalSettings::default();
    settings.system.auto_followup = options.follow_up_days;

    settings
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        consts::consts::EntityId,
        model::{
            lead::{LeadSource, LeadStatus, NewLead},
            user::{NewUser, Role, UserStatus},
        },
        store::table::filter::{CategoryFilter, LeadQuery, UserQuery},
        utils::clock::FixedClock,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    fn seeded_dashboard() -> Dashboard {
        Dashboard::with_clock(
            DashboardOptions::new_test().set_seed(true),
            Box::new(FixedClock(today())),
        )
    }

    fn empty_dashboard() -> Dashboard {
        Dashboard::with_clock(DashboardOptions::new_test(), Box::new(FixedClock(today())))
    }

    mod leads {
        use super::*;

        #[test_log::test]
        fn seeded_lead_stats() {
            let mut dashboard = seeded_dashboard();

            let stats = dashboard
                .process(Statement::LeadStats)
                .unwrap()
                .lead_stats()
                .unwrap();

            assert_eq!(stats.total, 10);
            assert_eq!(stats.new, 2);
            assert_eq!(stats.converted, 1);
            assert_eq!(stats.lost, 1);
            assert_eq!(stats.by_status.values().sum::<usize>(), 10);
        }

        #[test_log::test]
        fn search_and_source_filter() {
            let mut dashboard = seeded_dashboard();

            let leads = dashboard
                .process(Statement::ListLeads(Some(LeadQuery {
                    search: "tech".to_string(),
                    source: CategoryFilter::Only(LeadSource::Website),
                    ..Default::default()
                })))
                .unwrap()
                .leads()
                .unwrap();

            let names: Vec<&str> = leads.iter().map(|lead| lead.name.as_str()).collect();

            assert_eq!(names, vec!["Alex Thompson"]);
        }

        #[test_log::test]
        fn add_then_move_through_pipeline() {
            // Given the sample leads
            let mut dashboard = seeded_dashboard();

            // When we add a lead and move it to proposal
            let lead = dashboard
                .process(Statement::AddLead(NewLead::new(
                    "Nina Patel",
                    "nina@orbit.dev",
                )))
                .unwrap()
                .lead()
                .unwrap();

            dashboard
                .process(Statement::UpdateLeadStatus(
                    lead.id.clone(),
                    LeadStatus::Proposal,
                ))
                .unwrap();

            // Then the new lead is listed first with the new status
            assert_eq!(lead.id, EntityId::from("11"));
            assert_eq!(dashboard.leads().len(), 11);

            let first = &dashboard.leads().leads()[0];
            assert_eq!(first.id, lead.id);
            assert_eq!(first.status, LeadStatus::Proposal);
            assert_eq!(first.date, today());
        }

        #[test_log::test]
        fn agent_dashboard_only_sees_own_leads() {
            let mut dashboard = seeded_dashboard();

            let stats = dashboard
                .process(Statement::AgentStats("John Smith".to_string()))
                .unwrap()
                .agent_stats()
                .unwrap();

            assert_eq!(stats.total, 5);
            assert_eq!(stats.new, 2);
            assert_eq!(stats.qualified, 1);
            assert_eq!(stats.converted, 1);

            let leads = dashboard
                .process(Statement::ListLeads(Some(LeadQuery::for_agent(
                    "John Smith",
                ))))
                .unwrap()
                .leads()
                .unwrap();

            assert_eq!(leads.len(), 5);
        }

        #[test_log::test]
        fn refused_statement_leaves_list_alone() {
            let mut dashboard = seeded_dashboard();

            let result = dashboard.process(Statement::AddLead(NewLead::default()));

            assert_eq!(
                result,
                Err(ApplyErrors::MissingRequiredField("Name".to_string()))
            );
            assert_eq!(dashboard.leads().len(), 10);
        }
    }

    mod users {
        use super::*;

        #[test_log::test]
        fn toggle_and_count_active() {
            let mut dashboard = seeded_dashboard();

            let before = dashboard
                .process(Statement::UserStats)
                .unwrap()
                .user_stats()
                .unwrap();

            dashboard
                .process(Statement::ToggleUserStatus(EntityId::from("5")))
                .unwrap();

            let after = dashboard
                .process(Statement::UserStats)
                .unwrap()
                .user_stats()
                .unwrap();

            assert_eq!(before.total, 8);
            assert_eq!(before.active, 7);
            assert_eq!(after.active, 8);
        }

        #[test_log::test]
        fn role_filter() {
            let mut dashboard = seeded_dashboard();

            let users = dashboard
                .process(Statement::ListUsers(Some(UserQuery {
                    role: "Manager".parse().unwrap(),
                    ..Default::default()
                })))
                .unwrap()
                .users()
                .unwrap();

            assert_eq!(users.len(), 2);
        }

        #[test_log::test]
        fn refresh_restores_sample_users() {
            let mut dashboard = seeded_dashboard();

            dashboard
                .process(Statement::AddUser(NewUser::new("Temp", "temp@athenura.com")))
                .unwrap();
            dashboard
                .process(Statement::ToggleUserStatus(EntityId::from("1")))
                .unwrap();

            dashboard.process(Statement::RefreshUsers).unwrap();

            assert_eq!(dashboard.users().len(), 8);
            assert_eq!(dashboard.users().users()[0].status, UserStatus::Active);
        }
    }

    #[test]
    fn reset_clears_lists_and_settings() {
        let mut dashboard = seeded_dashboard();
        dashboard
            .system_settings_mut()
            .change(|settings| settings.general.company_name = "Acme".to_string());
        dashboard.system_settings_mut().save();

        dashboard.reset();

        assert!(dashboard.leads().is_empty());
        assert!(dashboard.users().is_empty());
        assert_eq!(
            dashboard.system_settings().saved(),
            &SystemSettings::default()
        );
    }

    #[test]
    fn empty_dashboard_starts_ids_at_one() {
        let mut dashboard = empty_dashboard();

        let results = dashboard.process_statements(vec![
            Statement::AddUser(NewUser::new("Admin User", "admin@athenura.com")),
            Statement::AddUser(NewUser::new("Manager One", "manager1@athenura.com")),
        ]);

        let ids: Vec<EntityId> = results
            .into_iter()
            .map(|result| result.unwrap().user().unwrap().id)
            .collect();

        assert_eq!(ids, vec![EntityId::from("1"), EntityId::from("2")]);
    }

    #[test]
    fn export_writes_dated_file() {
        let dashboard = seeded_dashboard();

        let path = dashboard.export_to_directory(ExportKind::Users(None)).unwrap();

        assert!(path.ends_with("users-export-2025-02-10.csv"));

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 9);
    }

    #[test]
    fn users_export_keeps_only_filtered_users() {
        // Given the sample users
        let dashboard = seeded_dashboard();

        // When we export only the managers
        let file = dashboard
            .export(ExportKind::Users(Some(UserQuery {
                role: CategoryFilter::Only(Role::Manager),
                ..Default::default()
            })))
            .unwrap();

        // Then the file holds the header plus the two managers
        let lines: Vec<&str> = file.contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"ID\""));
        assert!(lines[1..].iter().all(|line| line.contains("\"Manager\"")));
    }

    #[test]
    fn settings_export_includes_unsaved_edits() {
        let mut dashboard = seeded_dashboard();
        dashboard
            .system_settings_mut()
            .change(|settings| settings.general.company_name = "Acme".to_string());

        let file = dashboard.export(ExportKind::Settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&file.contents).unwrap();

        assert_eq!(value["general"]["companyName"], "Acme");
        assert!(dashboard.system_settings().is_changed());
    }

    #[test]
    fn saved_follow_up_preference_drives_new_leads() {
        // Given a dashboard configured for a three day follow up
        let mut dashboard = Dashboard::with_clock(
            DashboardOptions::new_test().set_follow_up_days(3),
            Box::new(FixedClock(today())),
        );
        assert_eq!(dashboard.personal_settings().saved().system.auto_followup, 3);

        let first = dashboard
            .process(Statement::AddLead(NewLead::new("Nina Patel", "nina@orbit.dev")))
            .unwrap()
            .lead()
            .unwrap();

        // When the user saves a fourteen day preference
        dashboard
            .personal_settings_mut()
            .change(|settings| settings.system.auto_followup = 14);
        dashboard.personal_settings_mut().save();

        let second = dashboard
            .process(Statement::AddLead(NewLead::new("Omar Reyes", "omar@orbit.dev")))
            .unwrap()
            .lead()
            .unwrap();

        // Then each lead follows the interval saved when it was added
        assert_eq!(first.next_follow_up, NaiveDate::from_ymd_opt(2025, 2, 13));
        assert_eq!(second.next_follow_up, NaiveDate::from_ymd_opt(2025, 2, 24));
    }

    #[test]
    fn report_export_is_json() {
        let dashboard = seeded_dashboard();

        let file = dashboard
            .export(ExportKind::Report(ReportRange::LastMonth, ReportType::Leads))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&file.contents).unwrap();

        assert_eq!(file.file_name, "comprehensive-reports-2025-02-10.json");
        assert_eq!(value["leadStats"]["total"], 10);
        assert_eq!(value["agentPerformance"]["John Smith"]["total"], 5);
    }
}
