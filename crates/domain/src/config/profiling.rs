use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CPU profiling is disabled unless an output path is set.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProfilingConfig {
    pub cpu_profile: Option<PathBuf>,
}
