//! AS112 Domain Layer
pub mod config;
pub mod errors;
pub mod lifecycle;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use lifecycle::LifecycleState;
pub use zone::ZoneDefinition;
