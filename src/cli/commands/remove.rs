use anyhow::Result;

use crate::cli::commands::{print_results, resolve_location};
use crate::lvm::VolumeManager;
use crate::observability::OperationTimer;

pub struct RemoveCommand {
    pub mount_path: String,
    pub name: String,
    pub group: String,
    pub location: Option<String>,
}

impl RemoveCommand {
    pub fn new(mount_path: String, name: String, group: String, location: Option<String>) -> Self {
        Self {
            mount_path,
            name,
            group,
            location,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let location = resolve_location(self.location.clone())?;
        println!(
            "💾 Removing {}/{}/{} (unmounting {} first)...",
            location, self.group, self.name, self.mount_path
        );

        let timer = OperationTimer::new("remove_volume");
        let manager = VolumeManager::new();
        let receipt = manager
            .remove_volume(&self.mount_path, &self.name, &self.group, &location, ())
            .await?;
        timer.finish();

        print_results(&receipt.results);
        println!("✅ Volume removed");
        Ok(())
    }
}
