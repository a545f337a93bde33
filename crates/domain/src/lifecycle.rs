//! Server lifecycle state machine.
//!
//! The only legal path is
//! `Uninitialized -> ZoneTableBuilt -> ListenersStarted -> Running -> Terminated`.
//! Startup failures abort the process instead of entering a state.

use std::fmt;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    ZoneTableBuilt,
    ListenersStarted,
    Running,
    Terminated,
}

impl LifecycleState {
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Uninitialized, ZoneTableBuilt)
                | (ZoneTableBuilt, ListenersStarted)
                | (ListenersStarted, Running)
                | (Running, Terminated)
        )
    }

    pub fn transition(self, next: LifecycleState) -> Result<LifecycleState, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::ZoneTableBuilt => "zone_table_built",
            LifecycleState::ListenersStarted => "listeners_started",
            LifecycleState::Running => "running",
            LifecycleState::Terminated => "terminated",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
