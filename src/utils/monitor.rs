use std::sync::Mutex;
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub memory_usage_percent: f32,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("System monitoring unavailable: {}", e);
                None
            }
        };

        if enabled {
            system.refresh_all();
        }

        Self {
            system: Mutex::new(system),
            pid,
            start_time: Instant::now(),
            peak_memory: Mutex::new(0),
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(self.pid?)?;
        let memory_mb = process.memory() / 1024 / 1024;
        let total_memory = system.total_memory() / 1024 / 1024;
        let memory_percent = if total_memory > 0 {
            (memory_mb as f32 / total_memory as f32) * 100.0
        } else {
            0.0
        };

        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(SystemStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            memory_usage_percent: memory_percent,
            peak_memory_mb: *peak,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB ({:.1}%), Peak: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.memory_usage_percent,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

/// One finished pipeline phase, labelled with what it processed.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTiming {
    pub label: String,
    pub elapsed: Duration,
}

/// Wall-clock breakdown of a corpus run, kept regardless of the `cli` feature.
#[derive(Debug)]
pub struct PhaseTimeline {
    last_mark: Mutex<Instant>,
    phases: Mutex<Vec<PhaseTiming>>,
}

impl PhaseTimeline {
    pub fn new() -> Self {
        Self {
            last_mark: Mutex::new(Instant::now()),
            phases: Mutex::new(Vec::new()),
        }
    }

    /// 重新開始計時並清除先前的階段紀錄
    pub fn reset(&self) {
        if let Ok(mut mark) = self.last_mark.lock() {
            *mark = Instant::now();
        }
        if let Ok(mut phases) = self.phases.lock() {
            phases.clear();
        }
    }

    /// Closes the current phase under `label` and returns its duration.
    pub fn mark(&self, label: impl Into<String>) -> Duration {
        let now = Instant::now();
        let elapsed = match self.last_mark.lock() {
            Ok(mut mark) => {
                let elapsed = now.duration_since(*mark);
                *mark = now;
                elapsed
            }
            Err(_) => Duration::ZERO,
        };

        let label = label.into();
        tracing::debug!("⏱️ {} took {:?}", label, elapsed);
        if let Ok(mut phases) = self.phases.lock() {
            phases.push(PhaseTiming { label, elapsed });
        }
        elapsed
    }

    pub fn phases(&self) -> Vec<PhaseTiming> {
        self.phases
            .lock()
            .map(|phases| phases.clone())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        self.phases()
            .iter()
            .map(|p| format!("{}: {:?}", p.label, p.elapsed))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Default for PhaseTimeline {
    fn default() -> Self {
        Self::new()
    }
}

// 非 CLI 環境提供空實現
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "cli")]
    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.get_stats().is_none());
    }

    #[test]
    fn test_timeline_keeps_labels_in_order() {
        let timeline = PhaseTimeline::new();
        timeline.mark("Ingest (12 chars, UTF-8)");
        std::thread::sleep(Duration::from_millis(5));
        let analyze = timeline.mark("Analyze (2 lines, 8 words)");

        let phases = timeline.phases();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].label, "Ingest (12 chars, UTF-8)");
        assert_eq!(phases[1].elapsed, analyze);
        assert!(analyze >= Duration::from_millis(5));
        assert!(timeline.summary().starts_with("Ingest (12 chars, UTF-8): "));

        timeline.reset();
        assert!(timeline.phases().is_empty());
    }
}
