//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use staffnet::admin::{
    adapters::memory::{InMemoryAuditLog, InMemorySettings},
    services::AdminConsoleService,
};
use staffnet::board::{adapters::memory::InMemoryTaskBoard, services::TaskBoardService};
use staffnet::chat::{adapters::memory::InMemoryChatRepository, services::ChatService};
use staffnet::staff::{
    adapters::memory::{InMemoryStaffRepository, SessionIdentityProvider},
    domain::{AccessLevel, StaffMember},
    services::{AddStaffRequest, StaffDirectoryService},
};
use staffnet::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};

/// Every service of one office, wired over shared in-memory stores.
pub struct Office {
    pub session: SessionIdentityProvider,
    pub directory:
        StaffDirectoryService<InMemoryStaffRepository, SessionIdentityProvider, DefaultClock>,
    pub tasks: TaskLifecycleService<
        InMemoryTaskRepository,
        InMemoryStaffRepository,
        SessionIdentityProvider,
        DefaultClock,
    >,
    pub board: TaskBoardService<InMemoryTaskBoard, SessionIdentityProvider>,
    pub chat: ChatService<InMemoryChatRepository, SessionIdentityProvider, DefaultClock>,
    pub admin: AdminConsoleService<
        InMemoryStaffRepository,
        InMemoryAuditLog,
        InMemorySettings,
        SessionIdentityProvider,
        DefaultClock,
    >,
}

impl Office {
    /// Signs `member` in as the acting staff member.
    pub fn act_as(&self, member: &StaffMember) -> eyre::Result<()> {
        let actor = member
            .as_actor()
            .ok_or_else(|| eyre::eyre!("{} is banned", member.email()))?;
        self.session.sign_in(actor)?;
        Ok(())
    }

    /// Bootstraps an admin and signs them in.
    pub async fn open(&self) -> eyre::Result<StaffMember> {
        let admin = self
            .directory
            .bootstrap_admin(AddStaffRequest::new(
                "Olive Owner",
                "owner@staffnet.test",
                AccessLevel::Admin,
            ))
            .await
            .wrap_err("bootstrap admin")?;
        self.act_as(&admin)?;
        Ok(admin)
    }

    /// Adds a staff member through the admin console.
    pub async fn hire(
        &self,
        name: &str,
        email: &str,
        access_level: AccessLevel,
    ) -> eyre::Result<StaffMember> {
        let member = self
            .admin
            .add_staff(AddStaffRequest::new(name, email, access_level))
            .await
            .wrap_err_with(|| format!("hire {email}"))?;
        Ok(member)
    }
}

/// Provides a fresh office with empty stores and nobody signed in.
#[fixture]
pub fn office() -> Office {
    let staff = Arc::new(InMemoryStaffRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let session = Arc::new(SessionIdentityProvider::new());
    let clock = Arc::new(DefaultClock);

    Office {
        session: (*session).clone(),
        directory: StaffDirectoryService::new(
            Arc::clone(&staff),
            Arc::clone(&session),
            Arc::clone(&clock),
        ),
        tasks: TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&staff),
            Arc::clone(&session),
            Arc::clone(&clock),
        ),
        board: TaskBoardService::new(
            Arc::new(InMemoryTaskBoard::new(tasks, Arc::clone(&staff))),
            Arc::clone(&session),
        ),
        chat: ChatService::new(
            Arc::new(InMemoryChatRepository::new()),
            Arc::clone(&session),
            Arc::clone(&clock),
        ),
        admin: AdminConsoleService::new(
            staff,
            Arc::new(InMemoryAuditLog::new()),
            Arc::new(InMemorySettings::new()),
            session,
            clock,
        ),
    }
}
