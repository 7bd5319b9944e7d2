//! Command-line console over the `PostgreSQL` adapters.
//!
//! Usage:
//!
//! ```text
//! staffnet [--actor <uuid>] <command> [options]
//! ```
//!
//! Every command prints its result as JSON lines on stdout. Commands that
//! change state act as the staff member given by `--actor`; `add-staff`
//! without `--actor` bootstraps the first administrator of an empty
//! directory. Admin commands (`ban`, `unban`, `set-level`, `remove-staff`,
//! `maintenance`, `audit`) require an administrator and are recorded in the
//! audit log.

use async_trait::async_trait;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eyre::WrapErr;
use mockable::DefaultClock;
use serde::Serialize;
use staffnet::admin::{
    adapters::postgres::{PostgresAuditLog, PostgresSettings},
    services::AdminConsoleService,
};
use staffnet::board::{adapters::postgres::PostgresTaskBoard, services::TaskBoardService};
use staffnet::chat::{adapters::postgres::PostgresChatRepository, services::ChatService};
use staffnet::config::StaffNetConfig;
use staffnet::database::{self, PgPool};
use staffnet::staff::{
    adapters::{directory_identity::DirectoryIdentityProvider, postgres::PostgresStaffRepository},
    domain::{AccessLevel, Actor, StaffId},
    ports::{IdentityError, IdentityProvider, IdentityResult},
    services::{AddStaffRequest, StaffDirectoryService},
};
use staffnet::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{ReviewDecision, TaskId, TaskPriority},
    services::{CreateTaskRequest, ReviewTaskRequest, SubmitProofRequest, TaskLifecycleService},
};
use staffnet::telemetry;
use std::io::Write;
use std::sync::Arc;
use uuid::Uuid;

/// `StaffNet` staff and task console.
#[derive(Parser, Debug)]
#[command(name = "staffnet")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Staff member the command acts as.
    #[arg(long, global = true)]
    actor: Option<Uuid>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database tables if they are missing.
    InitSchema,
    /// Add a staff member (bootstraps an admin when run without --actor).
    AddStaff {
        /// Full name.
        #[arg(long)]
        name: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Access level: staff, manager or admin.
        #[arg(long, default_value = "staff", value_parser = parse_access_level)]
        level: AccessLevel,
        /// Optional avatar URL.
        #[arg(long)]
        avatar_url: Option<String>,
    },
    /// List staff members, newest first.
    #[command(alias = "ls")]
    ListStaff {
        /// Hide banned members.
        #[arg(long)]
        active: bool,
    },
    /// Create a task assigned to a staff member.
    CreateTask {
        /// Task title.
        #[arg(long)]
        title: String,
        /// Assignee staff identifier.
        #[arg(long)]
        assignee: Uuid,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
        /// Optional due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority: low, medium or high.
        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: TaskPriority,
    },
    /// Move a `todo` task to `in_progress`.
    StartWork {
        /// Task identifier.
        #[arg(long)]
        task: Uuid,
    },
    /// Submit a proof-of-work link for review.
    SubmitProof {
        /// Task identifier.
        #[arg(long)]
        task: Uuid,
        /// Proof link.
        #[arg(long)]
        link: String,
    },
    /// Approve or reject pending proof.
    Review {
        /// Task identifier.
        #[arg(long)]
        task: Uuid,
        /// Decision: approved or rejected.
        #[arg(long, value_parser = parse_decision)]
        decision: ReviewDecision,
    },
    /// Show every task with its assignee.
    Board,
    /// Show dashboard counters.
    Stats,
    /// Ban a staff member.
    Ban {
        /// Staff identifier.
        #[arg(long)]
        staff: Uuid,
    },
    /// Lift a ban.
    Unban {
        /// Staff identifier.
        #[arg(long)]
        staff: Uuid,
    },
    /// Change a staff member's access level.
    SetLevel {
        /// Staff identifier.
        #[arg(long)]
        staff: Uuid,
        /// Access level: staff, manager or admin.
        #[arg(long, value_parser = parse_access_level)]
        level: AccessLevel,
    },
    /// Remove a staff member; their tasks stay on the board unassigned.
    RemoveStaff {
        /// Staff identifier.
        #[arg(long)]
        staff: Uuid,
    },
    /// Show or switch maintenance mode.
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceCommand,
    },
    /// Show recent audit log entries, newest first.
    Audit {
        /// Maximum number of entries.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Team chat.
    Chat {
        #[command(subcommand)]
        action: ChatCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MaintenanceCommand {
    /// Switch maintenance mode on.
    On,
    /// Switch maintenance mode off.
    Off,
    /// Print whether maintenance mode is on.
    Status,
}

#[derive(Subcommand, Debug)]
enum ChatCommand {
    /// Post a message.
    Send {
        /// Message text.
        message: String,
    },
    /// Show recent messages, oldest first.
    History {
        /// Maximum number of messages.
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

fn parse_access_level(raw: &str) -> Result<AccessLevel, String> {
    AccessLevel::try_from(raw).map_err(|err| err.to_string())
}

fn parse_priority(raw: &str) -> Result<TaskPriority, String> {
    TaskPriority::try_from(raw).map_err(|err| err.to_string())
}

fn parse_decision(raw: &str) -> Result<ReviewDecision, String> {
    ReviewDecision::try_from(raw).map_err(|err| err.to_string())
}

/// Identity taken from `--actor`, resolved through the staff directory.
struct CliIdentity {
    directory: Option<DirectoryIdentityProvider<PostgresStaffRepository>>,
}

#[async_trait]
impl IdentityProvider for CliIdentity {
    async fn current_actor(&self) -> IdentityResult<Actor> {
        let Some(directory) = &self.directory else {
            return Err(IdentityError::NotSignedIn);
        };
        directory.current_actor().await
    }
}

struct Console {
    directory: StaffDirectoryService<PostgresStaffRepository, CliIdentity, DefaultClock>,
    tasks: TaskLifecycleService<
        PostgresTaskRepository,
        PostgresStaffRepository,
        CliIdentity,
        DefaultClock,
    >,
    board: TaskBoardService<PostgresTaskBoard, CliIdentity>,
    admin: AdminConsoleService<
        PostgresStaffRepository,
        PostgresAuditLog,
        PostgresSettings,
        CliIdentity,
        DefaultClock,
    >,
    chat: ChatService<PostgresChatRepository, CliIdentity, DefaultClock>,
    pool: PgPool,
    signed_in: bool,
}

impl Console {
    fn new(pool: PgPool, actor: Option<StaffId>) -> Self {
        let staff = Arc::new(PostgresStaffRepository::new(pool.clone()));
        let identity = Arc::new(CliIdentity {
            directory: actor.map(|id| DirectoryIdentityProvider::new(Arc::clone(&staff), id)),
        });
        let clock = Arc::new(DefaultClock);
        Self {
            directory: StaffDirectoryService::new(
                Arc::clone(&staff),
                Arc::clone(&identity),
                Arc::clone(&clock),
            ),
            tasks: TaskLifecycleService::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::clone(&staff),
                Arc::clone(&identity),
                Arc::clone(&clock),
            ),
            board: TaskBoardService::new(
                Arc::new(PostgresTaskBoard::new(pool.clone())),
                Arc::clone(&identity),
            ),
            admin: AdminConsoleService::new(
                staff,
                Arc::new(PostgresAuditLog::new(pool.clone())),
                Arc::new(PostgresSettings::new(pool.clone())),
                Arc::clone(&identity),
                Arc::clone(&clock),
            ),
            chat: ChatService::new(
                Arc::new(PostgresChatRepository::new(pool.clone())),
                identity,
                clock,
            ),
            pool,
            signed_in: actor.is_some(),
        }
    }
}

fn emit(out: &mut impl Write, value: &impl Serialize) -> eyre::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn emit_all<T: Serialize>(out: &mut impl Write, values: &[T]) -> eyre::Result<()> {
    values.iter().try_for_each(|value| emit(out, value))
}

async fn run(command: Command, console: &Console, out: &mut impl Write) -> eyre::Result<()> {
    match command {
        Command::InitSchema => {
            database::ensure_schema(&console.pool).await?;
            emit(out, &serde_json::json!({ "schema": "ready" }))
        }
        Command::AddStaff {
            name,
            email,
            level,
            avatar_url,
        } => {
            let mut request = AddStaffRequest::new(name, email, level);
            if let Some(url) = avatar_url {
                request = request.with_avatar_url(url);
            }
            let member = if console.signed_in {
                console.admin.add_staff(request).await?
            } else {
                console.directory.bootstrap_admin(request).await?
            };
            emit(out, &member)
        }
        Command::ListStaff { active } => {
            let members = if active {
                console.directory.list_active().await?
            } else {
                console.directory.list_all().await?
            };
            emit_all(out, &members)
        }
        Command::CreateTask {
            title,
            assignee,
            description,
            due,
            priority,
        } => {
            let mut request = CreateTaskRequest::new(title, StaffId::from_uuid(assignee))
                .with_priority(priority);
            if let Some(text) = description {
                request = request.with_description(text);
            }
            if let Some(date) = due {
                request = request.with_due_date(date);
            }
            emit(out, &console.tasks.create(request).await?)
        }
        Command::StartWork { task } => {
            emit(out, &console.tasks.start_work(TaskId::from_uuid(task)).await?)
        }
        Command::SubmitProof { task, link } => {
            let request = SubmitProofRequest::new(TaskId::from_uuid(task), link);
            emit(out, &console.tasks.submit_proof(request).await?)
        }
        Command::Review { task, decision } => {
            let request = ReviewTaskRequest::new(TaskId::from_uuid(task), decision);
            emit(out, &console.tasks.review(request).await?)
        }
        Command::Board => emit_all(out, &console.board.list_board().await?),
        Command::Stats => emit(out, &console.board.dashboard_stats().await?),
        Command::Ban { staff } => {
            emit(out, &console.admin.ban(StaffId::from_uuid(staff)).await?)
        }
        Command::Unban { staff } => {
            emit(out, &console.admin.unban(StaffId::from_uuid(staff)).await?)
        }
        Command::SetLevel { staff, level } => {
            let member = console
                .admin
                .change_access_level(StaffId::from_uuid(staff), level)
                .await?;
            emit(out, &member)
        }
        Command::RemoveStaff { staff } => {
            console.admin.remove_staff(StaffId::from_uuid(staff)).await?;
            emit(out, &serde_json::json!({ "removed": staff }))
        }
        Command::Maintenance { action } => {
            match action {
                MaintenanceCommand::On => console.admin.set_maintenance_mode(true).await?,
                MaintenanceCommand::Off => console.admin.set_maintenance_mode(false).await?,
                MaintenanceCommand::Status => {}
            }
            let enabled = console.admin.maintenance_mode().await?;
            emit(out, &serde_json::json!({ "maintenance_mode": enabled }))
        }
        Command::Audit { limit } => {
            emit_all(out, &console.admin.recent_audit_entries(limit).await?)
        }
        Command::Chat {
            action: ChatCommand::Send { message },
        } => emit(out, &console.chat.send(message).await?),
        Command::Chat {
            action: ChatCommand::History { limit },
        } => emit_all(out, &console.chat.history(limit).await?),
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let config = StaffNetConfig::from_env()?;
    telemetry::init(config.log_filter());

    let pool = database::build_pool(&config).wrap_err("failed to connect to the database")?;
    let console = Console::new(pool, cli.actor.map(StaffId::from_uuid));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &console, &mut out).await
}
