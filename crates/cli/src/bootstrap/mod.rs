mod logging;
mod profiling;

pub use logging::init_logging;
pub use profiling::CpuProfiler;

use anyhow::Context;
use as112_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).context("Failed to load configuration")
}
