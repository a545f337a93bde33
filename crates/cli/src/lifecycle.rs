//! Startup sequencing and signal-driven termination.
//!
//! Startup runs strictly in order: build the zone table, bind both listeners,
//! spawn the listener tasks. Any failure aborts before the next step. Once
//! running, the only way out is a termination signal (or a listener dying,
//! which is fatal). Termination drops the listener tasks without draining.

use anyhow::{anyhow, Context};
use as112_domain::config::ServerConfig;
use as112_domain::{DomainError, LifecycleState, ZoneDefinition};
use as112_infrastructure::dns::{ZoneDispatcher, ZoneTable};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::server::DnsListeners;

/// Listener tasks of a server that reached `Running`.
pub struct RunningServer {
    pub local_addr: SocketAddr,
    tasks: JoinSet<anyhow::Result<()>>,
}

#[derive(Debug, Default)]
pub struct LifecycleController {
    state: LifecycleState,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    fn advance(&mut self, next: LifecycleState) -> Result<(), DomainError> {
        let from = self.state;
        self.state = from.transition(next)?;
        info!(from = %from, to = %next, "Lifecycle transition");
        Ok(())
    }

    pub fn start(
        &mut self,
        server: &ServerConfig,
        definitions: &[ZoneDefinition],
    ) -> anyhow::Result<RunningServer> {
        let table = ZoneTable::from_definitions(definitions)
            .context("Failed to build zone table")?;
        let zones: Vec<String> = table.zones().map(ToString::to_string).collect();
        info!(count = zones.len(), zones = ?zones, "Zone table built");
        self.advance(LifecycleState::ZoneTableBuilt)?;

        let addr = server.socket_addr()?;
        let listeners = DnsListeners::bind(addr).context("Failed to bind DNS listeners")?;
        let local_addr = listeners.local_addr();
        self.advance(LifecycleState::ListenersStarted)?;

        let tasks = listeners.start(ZoneDispatcher::new(Arc::new(table)), server.tcp_timeout());
        self.advance(LifecycleState::Running)?;

        Ok(RunningServer { local_addr, tasks })
    }

    /// Serve until `shutdown` resolves or a listener task exits.
    pub async fn run_until<F>(&mut self, running: RunningServer, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = anyhow::Result<&'static str>>,
    {
        let RunningServer { mut tasks, .. } = running;

        tokio::select! {
            signal = shutdown => {
                let signal = signal?;
                info!(signal, "Signal received, stopping");
                self.advance(LifecycleState::Terminated)?;
                Ok(())
            }
            Some(joined) = tasks.join_next() => {
                let err = match joined {
                    Ok(Ok(())) => anyhow!("DNS listener exited unexpectedly"),
                    Ok(Err(e)) => e,
                    Err(e) => anyhow::Error::from(e).context("DNS listener task failed"),
                };
                error!(error = %err, "DNS listener stopped");
                Err(err)
            }
        }
    }
}

/// Resolve on SIGINT or SIGTERM.
#[cfg(unix)]
pub async fn termination_signal() -> anyhow::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
pub async fn termination_signal() -> anyhow::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
