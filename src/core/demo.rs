use crate::config::DemoConfig;
use crate::core::gate::ensure_services_up;
use crate::core::runner::{run_scenes, SceneOutcome};
use crate::core::scenes::demo_scenes;
use crate::core::summary::print_summary;
use crate::core::Transport;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;
use std::io::Write;

/// Gate, then scenes, then summary.
pub struct DemoEngine<T: Transport> {
    transport: T,
    config: DemoConfig,
    monitor: RunMonitor,
}

impl<T: Transport> DemoEngine<T> {
    pub fn new(transport: T, config: DemoConfig) -> Self {
        Self {
            transport,
            config,
            monitor: RunMonitor::default(),
        }
    }

    pub fn new_with_monitoring(transport: T, config: DemoConfig, enabled: bool) -> Self {
        Self {
            transport,
            config,
            monitor: RunMonitor::new(enabled),
        }
    }

    /// Runs only the service gate.
    pub async fn check<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "🔍 Checking services...")?;
        let gate = ensure_services_up(&self.transport, &self.config.services(), out).await;
        self.monitor.log_phase("Service gate");
        gate
    }

    /// Full demo. Returns `ServiceUnavailable` before any demo call when a
    /// service is down; failed demo calls do not make the run fail.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Vec<SceneOutcome>> {
        self.check(out).await?;

        let scenes = demo_scenes(&self.config);
        tracing::info!("Running {} demo scenes", scenes.len());
        let outcomes = run_scenes(&self.transport, &scenes, out, |outcome| {
            self.monitor.log_phase(&outcome.title)
        })
        .await?;

        let failed: usize = outcomes.iter().map(|o| o.failed).sum();
        if failed > 0 {
            tracing::warn!("{} demo call(s) did not succeed; see output above", failed);
        }

        if self.config.show_summary {
            print_summary(out)?;
        }

        Ok(outcomes)
    }
}
