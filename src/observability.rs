use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Counters for external command activity
#[derive(Debug, Default)]
pub struct CommandMetrics {
    pub commands_spawned: AtomicU64,
    pub command_failures: AtomicU64,
    pub launch_failures: AtomicU64,
}

impl CommandMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_spawn(&self) {
        self.commands_spawned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.command_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_launch_failure(&self) {
        self.launch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> CommandStats {
        CommandStats {
            commands_spawned: self.commands_spawned.load(Ordering::Relaxed),
            command_failures: self.command_failures.load(Ordering::Relaxed),
            launch_failures: self.launch_failures.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Command metrics: spawned={}, failures={}, launch_failures={}",
            stats.commands_spawned, stats.command_failures, stats.launch_failures
        );
    }
}

#[derive(Debug, Clone)]
pub struct CommandStats {
    pub commands_spawned: u64,
    pub command_failures: u64,
    pub launch_failures: u64,
}

/// Global metrics instance
static COMMAND_METRICS: std::sync::LazyLock<CommandMetrics> =
    std::sync::LazyLock::new(CommandMetrics::new);

pub fn command_metrics() -> &'static CommandMetrics {
    &COMMAND_METRICS
}

/// Time an operation and log its duration on completion
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn finish(self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.operation,
            duration_ms = duration.as_millis(),
            "Operation completed"
        );
    }
}
