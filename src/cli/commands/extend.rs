use anyhow::Result;

use crate::cli::commands::{print_results, resolve_location};
use crate::lvm::VolumeManager;

pub struct ExtendCommand {
    pub name: String,
    pub group: String,
    pub size_gb: u64,
    pub absolute: bool,
    pub location: Option<String>,
}

impl ExtendCommand {
    pub fn new(
        name: String,
        group: String,
        size_gb: u64,
        absolute: bool,
        location: Option<String>,
    ) -> Self {
        Self {
            name,
            group,
            size_gb,
            absolute,
            location,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let location = resolve_location(self.location.clone())?;
        if self.absolute {
            println!(
                "💾 Extending {}/{}/{} to {}G...",
                location, self.group, self.name, self.size_gb
            );
        } else {
            println!(
                "💾 Extending {}/{}/{} by {}G...",
                location, self.group, self.name, self.size_gb
            );
        }

        let manager = VolumeManager::new();
        let receipt = if self.absolute {
            manager
                .extend_volume_to(&self.name, &self.group, &location, self.size_gb, ())
                .await?
        } else {
            manager
                .extend_volume_by(&self.name, &self.group, &location, self.size_gb, ())
                .await?
        };

        print_results(&receipt.results);
        println!("✅ Volume extended");
        Ok(())
    }
}
