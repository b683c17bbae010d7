#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};
#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct RunStats {
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub phase_time: Duration,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    peak_memory_mb: u64,
    last_mark: Instant,
    phases: Vec<String>,
}

/// Logs wall-clock and memory figures between demo phases.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    state: Option<Mutex<MonitorState>>,
    pid: Option<Pid>,
    start_time: Instant,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let start_time = Instant::now();
        let pid = if enabled {
            sysinfo::get_current_pid().ok()
        } else {
            None
        };

        let state = pid.map(|_| {
            Mutex::new(MonitorState {
                system: System::new(),
                peak_memory_mb: 0,
                last_mark: start_time,
                phases: Vec::new(),
            })
        });

        Self {
            state,
            pid,
            start_time,
        }
    }

    /// Takes a sample and resets the phase timer.
    pub fn sample(&self) -> Option<RunStats> {
        let pid = self.pid?;
        let mut state = self.state.as_ref()?.lock().ok()?;

        state
            .system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let memory_mb = state.system.process(pid)?.memory() / 1024 / 1024;

        if memory_mb > state.peak_memory_mb {
            state.peak_memory_mb = memory_mb;
        }

        let now = Instant::now();
        let phase_time = now.duration_since(state.last_mark);
        state.last_mark = now;

        Some(RunStats {
            memory_usage_mb: memory_mb,
            peak_memory_mb: state.peak_memory_mb,
            phase_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(mut state) = self.state.as_ref().and_then(|s| s.lock().ok()) {
            state.phases.push(phase.to_string());
        }

        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - took {:?}, Memory: {}MB, Peak: {}MB, Elapsed: {:?}",
                phase,
                stats.phase_time,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    /// Phases logged so far, in order.
    pub fn phases(&self) -> Vec<String> {
        self.state
            .as_ref()
            .and_then(|s| s.lock().ok())
            .map(|state| state.phases.clone())
            .unwrap_or_default()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 建置：監控一律關閉
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_phase(&self, _phase: &str) {}

    pub fn phases(&self) -> Vec<String> {
        Vec::new()
    }

    pub fn is_enabled(&self) -> bool {
        false
    }
}
