//! Application settings port.

use super::AdminStoreResult;
use async_trait::async_trait;

/// Global settings toggled from the admin console.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns whether maintenance mode is on.
    async fn maintenance_mode(&self) -> AdminStoreResult<bool>;

    /// Switches maintenance mode on or off.
    async fn set_maintenance_mode(&self, enabled: bool) -> AdminStoreResult<()>;
}
