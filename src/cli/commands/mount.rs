use anyhow::Result;

use crate::cli::commands::{print_results, resolve_filesystem, resolve_location};
use crate::lvm::VolumeManager;
use crate::observability::OperationTimer;

pub struct MountCommand {
    pub name: String,
    pub group: String,
    pub mount_path: String,
    pub filesystem: Option<String>,
    pub location: Option<String>,
}

impl MountCommand {
    pub fn new(
        name: String,
        group: String,
        mount_path: String,
        filesystem: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            name,
            group,
            mount_path,
            filesystem,
            location,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let filesystem = resolve_filesystem(self.filesystem.clone())?;
        let location = resolve_location(self.location.clone())?;
        println!(
            "💾 Mounting {}/{}/{} at {}...",
            location, self.group, self.name, self.mount_path
        );

        let timer = OperationTimer::new("mount_volume");
        let manager = VolumeManager::new();
        let receipt = manager
            .mount_volume(
                &self.name,
                &self.group,
                &filesystem,
                &self.mount_path,
                &location,
                (),
            )
            .await?;
        timer.finish();

        print_results(&receipt.results);
        println!("✅ Volume mounted at {}", self.mount_path);
        Ok(())
    }
}
