use anyhow::Result;

use crate::cli::commands::print_results;
use crate::lvm::VolumeManager;

pub struct CreateVgCommand {
    pub name: String,
    pub volume_path: String,
    pub assume_yes: bool,
}

impl CreateVgCommand {
    pub fn new(name: String, volume_path: String, assume_yes: bool) -> Self {
        Self {
            name,
            volume_path,
            assume_yes,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        println!(
            "💾 Creating volume group {} from {}...",
            self.name, self.volume_path
        );

        let manager = VolumeManager::new();
        let receipt = manager
            .create_volume_group(&self.name, &self.volume_path, self.assume_yes, ())
            .await?;

        print_results(&receipt.results);
        println!("✅ Volume group ready");
        Ok(())
    }
}
