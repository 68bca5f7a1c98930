use anyhow::Result;

use crate::config::config;

pub mod create_lv;
pub mod create_pv;
pub mod create_vg;
pub mod extend;
pub mod format;
pub mod mount;
pub mod reduce;
pub mod remove;

/// Fill in the device location from configuration when not given on the CLI
pub fn resolve_location(location: Option<String>) -> Result<String> {
    match location {
        Some(location) => Ok(location),
        None => Ok(config()?.volumes.location.clone()),
    }
}

/// Fill in the filesystem type from configuration when not given on the CLI
pub fn resolve_filesystem(filesystem: Option<String>) -> Result<String> {
    match filesystem {
        Some(filesystem) => Ok(filesystem),
        None => Ok(config()?.volumes.filesystem.clone()),
    }
}

/// Print each command's resolved output in order
pub fn print_results(results: &[String]) {
    for result in results {
        let trimmed = result.trim();
        if !trimmed.is_empty() {
            println!("{trimmed}");
        }
    }
}
