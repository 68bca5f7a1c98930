//! External tool abstractions
//!
//! This module provides the trait-based abstraction for the external storage
//! tooling (LVM and filesystem utilities), enabling testable code through
//! dependency injection and mock implementations.

pub mod command;

pub use command::{CommandError, CommandExecutor, CommandOutput, ProcessCommandExecutor};
