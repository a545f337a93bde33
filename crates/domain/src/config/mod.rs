pub mod errors;
pub mod logging;
pub mod profiling;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use profiling::ProfilingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
