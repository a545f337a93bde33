use thiserror::Error;

use crate::lifecycle::LifecycleState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid zone definition for {zone}: {reason}")]
    InvalidZoneDefinition { zone: String, reason: String },

    #[error("Failed to bind {transport} listener on {address}: {reason}")]
    BindFailed {
        transport: &'static str,
        address: String,
        reason: String,
    },

    #[error("Invalid lifecycle transition from {from} to {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}

impl DomainError {
    pub fn zone_definition(zone: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidZoneDefinition {
            zone: zone.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while building the zone table.
    pub fn is_startup_config(&self) -> bool {
        matches!(self, Self::InvalidZoneDefinition { .. })
    }
}
