use anyhow::Result;

use crate::cli::commands::print_results;
use crate::lvm::VolumeManager;

pub struct CreatePvCommand {
    pub volume_path: String,
}

impl CreatePvCommand {
    pub fn new(volume_path: String) -> Self {
        Self { volume_path }
    }

    pub async fn execute(&self) -> Result<()> {
        println!("💾 Initializing physical volume on {}...", self.volume_path);

        let manager = VolumeManager::new();
        let receipt = manager
            .create_physical_volume(&self.volume_path, ())
            .await?;

        print_results(&receipt.results);
        println!("✅ Physical volume ready");
        Ok(())
    }
}
