//! Session-style identity provider holding a single signed-in actor.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::staff::{
    domain::Actor,
    ports::{IdentityError, IdentityProvider, IdentityResult, StaffRepositoryError},
};

/// Identity provider whose actor is switched explicitly.
///
/// Clones share the same session, so a test can keep one handle and sign a
/// different actor in between service calls.
#[derive(Debug, Clone, Default)]
pub struct SessionIdentityProvider {
    session: Arc<RwLock<Option<Actor>>>,
}

impl SessionIdentityProvider {
    /// Creates a provider with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with `actor` already signed in.
    #[must_use]
    pub fn signed_in(actor: Actor) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(actor))),
        }
    }

    /// Signs `actor` in, replacing any previous actor.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Lookup`] when the session lock is poisoned.
    pub fn sign_in(&self, actor: Actor) -> IdentityResult<()> {
        let mut session = self.session.write().map_err(poisoned)?;
        *session = Some(actor);
        Ok(())
    }

    /// Signs the current actor out.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Lookup`] when the session lock is poisoned.
    pub fn sign_out(&self) -> IdentityResult<()> {
        let mut session = self.session.write().map_err(poisoned)?;
        *session = None;
        Ok(())
    }
}

fn poisoned(err: impl ToString) -> IdentityError {
    IdentityError::Lookup(StaffRepositoryError::persistence(std::io::Error::other(
        err.to_string(),
    )))
}

#[async_trait]
impl IdentityProvider for SessionIdentityProvider {
    async fn current_actor(&self) -> IdentityResult<Actor> {
        let session = self.session.read().map_err(poisoned)?;
        (*session).ok_or(IdentityError::NotSignedIn)
    }
}
