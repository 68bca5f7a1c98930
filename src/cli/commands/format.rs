use anyhow::Result;

use crate::cli::commands::{print_results, resolve_filesystem, resolve_location};
use crate::lvm::VolumeManager;

pub struct FormatCommand {
    pub name: String,
    pub group: String,
    pub filesystem: Option<String>,
    pub location: Option<String>,
}

impl FormatCommand {
    pub fn new(
        name: String,
        group: String,
        filesystem: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            name,
            group,
            filesystem,
            location,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let filesystem = resolve_filesystem(self.filesystem.clone())?;
        let location = resolve_location(self.location.clone())?;
        println!(
            "💾 Formatting {}/{}/{} as {}...",
            location, self.group, self.name, filesystem
        );

        let manager = VolumeManager::new();
        let receipt = manager
            .format_logical_volume(&self.name, &self.group, &filesystem, &location, ())
            .await?;

        print_results(&receipt.results);
        println!("✅ Filesystem created");
        Ok(())
    }
}
