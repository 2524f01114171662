use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dashboard::{
    consts::consts::EntityId,
    export::report::{ReportRange, ReportType},
    model::{
        lead::{Lead, LeadSource, LeadStatus, NewLead},
        statement::{Statement, StatementResult},
        user::{NewUser, Role, User, UserStatus},
    },
    store::{
        dashboard::{Dashboard, ExportKind},
        options::DashboardOptions,
        table::filter::{CategoryFilter, LeadQuery, UserQuery},
    },
};
use num_format::{Locale, ToFormattedString};

/// 📇 LeadFlow, lead and user management on the sample dashboard data
///
/// Every run starts from the sample data (or an empty dashboard with `--empty`), nothing is kept
/// between runs. Exports are the only files written.
#[derive(Parser, Debug)]
struct Cli {
    /// Start without the sample leads and users
    #[clap(long)]
    empty: bool,

    /// Days between creating a lead and its first follow up
    #[clap(long, default_value = "7", value_parser = clap::value_parser!(u32).range(0..=3650))]
    follow_up_days: u32,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Work with leads
    #[clap(subcommand)]
    Leads(LeadsCommand),

    /// Work with users and agents
    #[clap(subcommand)]
    Users(UsersCommand),

    /// Write a snapshot of the current data to a dated file
    Export {
        #[clap(subcommand)]
        target: ExportTarget,

        /// Directory the export is written to. Note: Does not support shell paths, e.g. ~
        #[clap(short, long, default_value = "exports")]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    List(LeadFilterArgs),
    Stats {
        /// Only count the leads assigned to this agent
        #[clap(long)]
        agent: Option<String>,
    },
    Add {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long, default_value = "")]
        phone: String,
        #[clap(long, default_value = "")]
        company: String,
        #[clap(long, default_value = "Website")]
        source: LeadSource,
        #[clap(long, default_value = "")]
        agent: String,
        #[clap(long, default_value = "")]
        notes: String,
    },
    SetStatus {
        #[clap(long)]
        id: String,
        #[clap(long)]
        status: LeadStatus,
    },
}

#[derive(Args, Debug)]
struct LeadFilterArgs {
    /// Matches name, email or company, ignoring case
    #[clap(short, long, default_value = "")]
    search: String,
    /// A pipeline status or "all"
    #[clap(long, default_value = "all")]
    status: CategoryFilter<LeadStatus>,
    /// A lead source or "all"
    #[clap(long, default_value = "all")]
    source: CategoryFilter<LeadSource>,
    /// Only leads assigned to this agent
    #[clap(long)]
    agent: Option<String>,
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List(UserFilterArgs),
    Stats,
    Add {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long, default_value = "")]
        phone: String,
        #[clap(long, default_value = "Agent")]
        role: Role,
        #[clap(long, default_value = "Sales")]
        department: String,
    },
    Toggle {
        #[clap(long)]
        id: String,
    },
}

#[derive(Args, Debug)]
struct UserFilterArgs {
    /// Matches name, email or department, ignoring case
    #[clap(short, long, default_value = "")]
    search: String,
    /// A role or "all"
    #[clap(long, default_value = "all")]
    role: CategoryFilter<Role>,
    /// Active, Inactive or "all"
    #[clap(long, default_value = "all")]
    status: CategoryFilter<UserStatus>,
}

#[derive(Subcommand, Debug)]
enum ExportTarget {
    Leads,
    /// Only the users matching the filters are written
    Users(UserFilterArgs),
    Settings,
    Report {
        /// Reporting window in days: 7, 30, 90 or 365
        #[clap(long, default_value = "30")]
        range: ReportRange,
        #[clap(long, default_value = "leads")]
        report_type: ReportType,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let mut options = DashboardOptions::default()
        .set_seed(!args.empty)
        .set_follow_up_days(args.follow_up_days);

    if let Command::Export { out, .. } = &args.command {
        options = options.set_export_directory(out.clone());
    }

    let mut dashboard = Dashboard::new(options);

    match args.command {
        Command::Leads(command) => run_leads(&mut dashboard, command)?,
        Command::Users(command) => run_users(&mut dashboard, command)?,
        Command::Export { target, .. } => {
            let kind = match target {
                ExportTarget::Leads => ExportKind::Leads,
                ExportTarget::Users(filter) => ExportKind::Users(Some(user_query(filter))),
                ExportTarget::Settings => ExportKind::Settings,
                ExportTarget::Report { range, report_type } => {
                    ExportKind::Report(range, report_type)
                }
            };

            let path = dashboard.export_to_directory(kind)?;

            log::info!("Export written to {}", path.display());

            println!("{}", path.display());
        }
    }

    Ok(())
}

fn run_leads(dashboard: &mut Dashboard, command: LeadsCommand) -> anyhow::Result<()> {
    let statement = match command {
        LeadsCommand::List(filter) => Statement::ListLeads(Some(LeadQuery {
            search: filter.search,
            status: filter.status,
            source: filter.source,
            assigned_agent: filter
                .agent
                .map(CategoryFilter::Only)
                .unwrap_or_default(),
        })),
        LeadsCommand::Stats { agent: Some(agent) } => Statement::AgentStats(agent),
        LeadsCommand::Stats { agent: None } => Statement::LeadStats,
        LeadsCommand::Add {
            name,
            email,
            phone,
            company,
            source,
            agent,
            notes,
        } => Statement::AddLead(NewLead {
            name,
            email,
            phone,
            company,
            source,
            assigned_agent: agent,
            notes,
        }),
        LeadsCommand::SetStatus { id, status } => {
            Statement::UpdateLeadStatus(EntityId(id), status)
        }
    };

    let result = dashboard.process(statement)?;
    print_result(dashboard, result)
}

fn run_users(dashboard: &mut Dashboard, command: UsersCommand) -> anyhow::Result<()> {
    let statement = match command {
        UsersCommand::List(filter) => Statement::ListUsers(Some(user_query(filter))),
        UsersCommand::Stats => Statement::UserStats,
        UsersCommand::Add {
            name,
            email,
            phone,
            role,
            department,
        } => Statement::AddUser(NewUser {
            name,
            email,
            phone,
            role,
            department,
        }),
        UsersCommand::Toggle { id } => Statement::ToggleUserStatus(EntityId(id)),
    };

    let result = dashboard.process(statement)?;
    print_result(dashboard, result)
}

fn user_query(filter: UserFilterArgs) -> UserQuery {
    UserQuery {
        search: filter.search,
        role: filter.role,
        status: filter.status,
    }
}

fn print_result(dashboard: &Dashboard, result: StatementResult) -> anyhow::Result<()> {
    let date_pattern = dashboard
        .system_settings()
        .saved()
        .general
        .date_format
        .pattern();

    let print_lead = |lead: &Lead| {
        println!(
            "{:>3}  {:<18} {:<24} {:<18} {:<10} {:<12} {:<14} {}",
            lead.id,
            lead.name,
            lead.email,
            lead.company,
            lead.source,
            lead.status,
            lead.assigned_agent,
            lead.date.format(date_pattern)
        )
    };

    let print_user = |user: &User| {
        println!(
            "{:>3}  {:<16} {:<28} {:<8} {:<9} {}",
            user.id,
            user.name,
            user.email,
            user.role,
            user.status,
            user.department.as_deref().unwrap_or_default()
        )
    };

    match result {
        StatementResult::SuccessStatus(message) => println!("{}", message),
        StatementResult::Lead(lead) => print_lead(&lead),
        StatementResult::Leads(leads) => {
            leads.iter().for_each(print_lead);
            println!("{} leads", leads.len().to_formatted_string(&Locale::en));
        }
        StatementResult::User(user) => print_user(&user),
        StatementResult::Users(users) => {
            users.iter().for_each(print_user);
            println!("{} users", users.len().to_formatted_string(&Locale::en));
        }
        StatementResult::LeadStats(stats) => {
            println!(
                "Total: {}  New: {}  Converted: {}  Lost: {}",
                stats.total, stats.new, stats.converted, stats.lost
            );

            for (status, count) in &stats.by_status {
                println!("  {:<12} {}", status, count);
            }
        }
        StatementResult::AgentStats(stats) => println!(
            "{}  Total: {}  New: {}  Qualified: {}  Converted: {}",
            stats.agent, stats.total, stats.new, stats.qualified, stats.converted
        ),
        StatementResult::UserStats(stats) => println!(
            "Total: {}  Active: {}  Admins: {}  Agents: {}",
            stats.total, stats.active, stats.admins, stats.agents
        ),
    }

    Ok(())
}
