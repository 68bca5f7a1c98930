//! LVM operations module
//!
//! This module provides the typed operation catalog over the LVM and
//! filesystem command-line tools, built on the command executor abstraction.

pub mod operations;

pub use operations::{OperationReceipt, VolumeManager};
