use std::path::Path;
#[cfg(unix)]
use std::{fs::File, path::PathBuf};

#[cfg(unix)]
const SAMPLE_FREQUENCY_HZ: i32 = 100;

/// Sampling CPU profiler writing a pprof protobuf when finished.
#[cfg(unix)]
pub struct CpuProfiler {
    guard: pprof::ProfilerGuard<'static>,
    file: File,
    path: PathBuf,
}

#[cfg(unix)]
impl CpuProfiler {
    /// The output file is created up front so a bad path fails at startup.
    pub fn start(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let file = File::create(path)
            .with_context(|| format!("Failed to create CPU profile {}", path.display()))?;

        let guard = pprof::ProfilerGuardBuilder::default()
            .frequency(SAMPLE_FREQUENCY_HZ)
            .blocklist(&["libc", "libgcc", "pthread", "vdso"])
            .build()
            .context("Failed to start CPU profiler")?;

        tracing::info!(path = %path.display(), "CPU profiling started");

        Ok(Self {
            guard,
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        use pprof::protos::Message;
        use std::io::Write;

        let report = self.guard.report().build()?;
        let profile = report.pprof()?;

        let mut content = Vec::new();
        profile.encode(&mut content)?;
        self.file.write_all(&content)?;

        tracing::info!(path = %self.path.display(), bytes = content.len(), "CPU profile written");
        Ok(())
    }
}

#[cfg(not(unix))]
pub struct CpuProfiler;

#[cfg(not(unix))]
impl CpuProfiler {
    pub fn start(_path: &Path) -> anyhow::Result<Self> {
        anyhow::bail!("CPU profiling is only supported on unix")
    }

    pub fn finish(self) -> anyhow::Result<()> {
        Ok(())
    }
}
