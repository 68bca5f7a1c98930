// Lvforge Library - LVM Provisioning Orchestration
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod external;
pub mod lvm;
pub mod observability;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, init_config, LvforgeConfig};
pub use external::{CommandError, CommandExecutor, CommandOutput, ProcessCommandExecutor};
pub use lvm::{OperationReceipt, VolumeManager};
pub use observability::{command_metrics, CommandMetrics, OperationTimer};
pub use telemetry::{generate_correlation_id, init_telemetry};
