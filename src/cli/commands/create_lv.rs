use anyhow::Result;

use crate::cli::commands::print_results;
use crate::lvm::VolumeManager;
use crate::observability::OperationTimer;

pub struct CreateLvCommand {
    pub name: String,
    pub size_gb: u64,
    pub group: String,
    pub input: Option<String>,
}

impl CreateLvCommand {
    pub fn new(name: String, size_gb: u64, group: String, input: Option<String>) -> Self {
        Self {
            name,
            size_gb,
            group,
            input,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        println!(
            "💾 Creating logical volume {} ({}G) in group {}...",
            self.name, self.size_gb, self.group
        );

        let timer = OperationTimer::new("create_logical_volume");
        let manager = VolumeManager::new();
        let receipt = manager
            .create_logical_volume(
                &self.name,
                self.size_gb,
                &self.group,
                self.input.as_deref(),
                (),
            )
            .await?;
        timer.finish();

        print_results(&receipt.results);
        println!("✅ Logical volume ready");
        Ok(())
    }
}
