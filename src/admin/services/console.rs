//! Service enforcing admin-only directory changes and recording them.

use crate::admin::{
    domain::{AuditAction, AuditEntry},
    ports::{AdminStoreError, AuditLogRepository, SettingsRepository},
};
use crate::staff::{
    domain::{AccessLevel, Actor, StaffDomainError, StaffId, StaffMember},
    ports::{IdentityError, IdentityProvider, StaffRepository, StaffRepositoryError},
    services::AddStaffRequest,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for admin console operations.
#[derive(Debug, Error)]
pub enum AdminConsoleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StaffDomainError),
    /// Staff repository operation failed.
    #[error(transparent)]
    Staff(#[from] StaffRepositoryError),
    /// Audit log or settings store failed.
    #[error(transparent)]
    Store(#[from] AdminStoreError),
    /// The current actor could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// The actor is not an administrator.
    #[error("staff member {actor_id} is not an administrator")]
    Unauthorized {
        /// The rejected actor.
        actor_id: StaffId,
    },
    /// Administrators cannot ban, demote or remove themselves.
    #[error("administrator {actor_id} cannot apply this change to their own account")]
    SelfModification {
        /// The rejected actor.
        actor_id: StaffId,
    },
}

/// Result type for admin console operations.
pub type AdminConsoleResult<T> = Result<T, AdminConsoleError>;

/// Admin console orchestration service.
///
/// Audit entries are written after the change they describe; a failed audit
/// write is reported to the caller even though the change itself stands.
#[derive(Clone)]
pub struct AdminConsoleService<S, A, G, I, C>
where
    S: StaffRepository,
    A: AuditLogRepository,
    G: SettingsRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    staff: Arc<S>,
    audit_log: Arc<A>,
    settings: Arc<G>,
    identity: Arc<I>,
    clock: Arc<C>,
}

impl<S, A, G, I, C> AdminConsoleService<S, A, G, I, C>
where
    S: StaffRepository,
    A: AuditLogRepository,
    G: SettingsRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new admin console service.
    #[must_use]
    pub const fn new(
        staff: Arc<S>,
        audit_log: Arc<A>,
        settings: Arc<G>,
        identity: Arc<I>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            staff,
            audit_log,
            settings,
            identity,
            clock,
        }
    }

    /// Adds a staff member and records it.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Domain`] for invalid input,
    /// [`AdminConsoleError::Unauthorized`] for non-admins, or the store error.
    pub async fn add_staff(&self, request: AddStaffRequest) -> AdminConsoleResult<StaffMember> {
        let member = request.into_member(&*self.clock)?;
        let admin = self.require_admin().await?;

        self.staff.store(&member).await?;
        self.record(
            &admin,
            AuditAction::StaffAdded {
                staff_id: member.id(),
                access_level: member.access_level(),
            },
        )
        .await?;
        Ok(member)
    }

    /// Changes a staff member's access level.
    ///
    /// Setting the current level again changes nothing and records nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins,
    /// [`AdminConsoleError::SelfModification`] when an admin demotes
    /// themselves, [`StaffRepositoryError::NotFound`] for unknown staff, or
    /// the store error.
    pub async fn change_access_level(
        &self,
        staff_id: StaffId,
        access_level: AccessLevel,
    ) -> AdminConsoleResult<StaffMember> {
        let admin = self.require_admin().await?;
        if staff_id == admin.id() && access_level != AccessLevel::Admin {
            return Err(self_modification(&admin));
        }

        let mut member = self.load(staff_id).await?;
        let from = member.access_level();
        if from == access_level {
            return Ok(member);
        }
        member.change_access_level(access_level, &*self.clock);
        self.staff.update(&member).await?;
        self.record(
            &admin,
            AuditAction::AccessLevelChanged {
                staff_id,
                from,
                to: access_level,
            },
        )
        .await?;
        Ok(member)
    }

    /// Bans a staff member, preventing them from acting.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins,
    /// [`AdminConsoleError::SelfModification`] when an admin bans
    /// themselves, [`StaffRepositoryError::NotFound`] for unknown staff, or
    /// the store error.
    pub async fn ban(&self, staff_id: StaffId) -> AdminConsoleResult<StaffMember> {
        let admin = self.require_admin().await?;
        if staff_id == admin.id() {
            return Err(self_modification(&admin));
        }
        self.change_status(&admin, staff_id, true).await
    }

    /// Lifts a ban.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins,
    /// [`StaffRepositoryError::NotFound`] for unknown staff, or the store
    /// error.
    pub async fn unban(&self, staff_id: StaffId) -> AdminConsoleResult<StaffMember> {
        let admin = self.require_admin().await?;
        self.change_status(&admin, staff_id, false).await
    }

    /// Removes a staff member from the directory.
    ///
    /// Tasks assigned to the member are kept and show no assignee on the
    /// board.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins,
    /// [`AdminConsoleError::SelfModification`] when an admin removes
    /// themselves, [`StaffRepositoryError::NotFound`] for unknown staff, or
    /// the store error.
    pub async fn remove_staff(&self, staff_id: StaffId) -> AdminConsoleResult<()> {
        let admin = self.require_admin().await?;
        if staff_id == admin.id() {
            return Err(self_modification(&admin));
        }

        self.staff.remove(staff_id).await?;
        self.record(&admin, AuditAction::StaffRemoved { staff_id })
            .await
    }

    /// Switches maintenance mode on or off.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins or the
    /// store error.
    pub async fn set_maintenance_mode(&self, enabled: bool) -> AdminConsoleResult<()> {
        let admin = self.require_admin().await?;
        self.settings.set_maintenance_mode(enabled).await?;
        self.record(&admin, AuditAction::MaintenanceModeChanged { enabled })
            .await
    }

    /// Returns whether maintenance mode is on.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins or the
    /// store error.
    pub async fn maintenance_mode(&self) -> AdminConsoleResult<bool> {
        self.require_admin().await?;
        Ok(self.settings.maintenance_mode().await?)
    }

    /// Returns at most `limit` audit entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AdminConsoleError::Unauthorized`] for non-admins or the
    /// store error.
    pub async fn recent_audit_entries(&self, limit: usize) -> AdminConsoleResult<Vec<AuditEntry>> {
        self.require_admin().await?;
        Ok(self.audit_log.list_recent(limit).await?)
    }

    async fn require_admin(&self) -> AdminConsoleResult<Actor> {
        let actor = self.identity.current_actor().await?;
        if !actor.is_admin() {
            warn!(actor = %actor.id(), "rejected admin console access");
            return Err(AdminConsoleError::Unauthorized {
                actor_id: actor.id(),
            });
        }
        Ok(actor)
    }

    async fn load(&self, staff_id: StaffId) -> AdminConsoleResult<StaffMember> {
        Ok(self
            .staff
            .find_by_id(staff_id)
            .await?
            .ok_or(StaffRepositoryError::NotFound(staff_id))?)
    }

    async fn change_status(
        &self,
        admin: &Actor,
        staff_id: StaffId,
        banned: bool,
    ) -> AdminConsoleResult<StaffMember> {
        let mut member = self.load(staff_id).await?;
        let from = member.status();
        if member.is_banned() == banned {
            return Ok(member);
        }
        if banned {
            member.ban(&*self.clock);
        } else {
            member.unban(&*self.clock);
        }

        self.staff.update(&member).await?;
        self.record(
            admin,
            AuditAction::StaffStatusChanged {
                staff_id,
                from,
                to: member.status(),
            },
        )
        .await?;
        Ok(member)
    }

    async fn record(&self, admin: &Actor, action: AuditAction) -> AdminConsoleResult<()> {
        let entry = AuditEntry::new(admin.id(), action, &*self.clock);
        self.audit_log.record(&entry).await?;
        info!(
            audit_id = %entry.id(),
            actor = %admin.id(),
            action = %action,
            "admin change recorded"
        );
        Ok(())
    }
}

const fn self_modification(admin: &Actor) -> AdminConsoleError {
    AdminConsoleError::SelfModification {
        actor_id: admin.id(),
    }
}
