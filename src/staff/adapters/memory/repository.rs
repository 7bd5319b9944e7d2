//! In-memory repository for staff records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::staff::{
    domain::{EmailAddress, StaffId, StaffMember},
    ports::{StaffRepository, StaffRepositoryError, StaffRepositoryResult},
};

/// Thread-safe in-memory staff repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaffRepository {
    state: Arc<RwLock<InMemoryStaffState>>,
}

#[derive(Debug, Default)]
struct InMemoryStaffState {
    members: HashMap<StaffId, StaffMember>,
    email_index: HashMap<EmailAddress, StaffId>,
}

impl InMemoryStaffRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every member without going through the async port.
    ///
    /// Used by in-memory query adapters that join over staff records.
    pub(crate) fn snapshot(&self) -> StaffRepositoryResult<HashMap<StaffId, StaffMember>> {
        Ok(self.read()?.members.clone())
    }

    fn read(&self) -> StaffRepositoryResult<RwLockReadGuard<'_, InMemoryStaffState>> {
        self.state.read().map_err(|err| {
            StaffRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> StaffRepositoryResult<RwLockWriteGuard<'_, InMemoryStaffState>> {
        self.state.write().map_err(|err| {
            StaffRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn newest_first(mut members: Vec<StaffMember>) -> Vec<StaffMember> {
    members.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
    members
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    async fn store(&self, member: &StaffMember) -> StaffRepositoryResult<()> {
        let mut state = self.write()?;
        if state.members.contains_key(&member.id()) {
            return Err(StaffRepositoryError::DuplicateStaff(member.id()));
        }
        if state.email_index.contains_key(member.email()) {
            return Err(StaffRepositoryError::DuplicateEmail(member.email().clone()));
        }

        state.email_index.insert(member.email().clone(), member.id());
        state.members.insert(member.id(), member.clone());
        Ok(())
    }

    async fn update(&self, member: &StaffMember) -> StaffRepositoryResult<()> {
        let mut state = self.write()?;
        let old_email = state
            .members
            .get(&member.id())
            .ok_or(StaffRepositoryError::NotFound(member.id()))?
            .email()
            .clone();

        if *member.email() != old_email {
            if let Some(&indexed_id) = state.email_index.get(member.email())
                && indexed_id != member.id()
            {
                return Err(StaffRepositoryError::DuplicateEmail(member.email().clone()));
            }
            state.email_index.remove(&old_email);
            state.email_index.insert(member.email().clone(), member.id());
        }

        state.members.insert(member.id(), member.clone());
        Ok(())
    }

    async fn remove(&self, id: StaffId) -> StaffRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .members
            .remove(&id)
            .ok_or(StaffRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }

    async fn find_by_id(&self, id: StaffId) -> StaffRepositoryResult<Option<StaffMember>> {
        Ok(self.read()?.members.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> StaffRepositoryResult<Option<StaffMember>> {
        let state = self.read()?;
        let member = state
            .email_index
            .get(email)
            .and_then(|id| state.members.get(id))
            .cloned();
        Ok(member)
    }

    async fn list_all(&self) -> StaffRepositoryResult<Vec<StaffMember>> {
        let members = self.read()?.members.values().cloned().collect();
        Ok(newest_first(members))
    }
}
