use anyhow::Result;
use clap::Parser;

use lvforge::cli::commands::create_lv::CreateLvCommand;
use lvforge::cli::commands::create_pv::CreatePvCommand;
use lvforge::cli::commands::create_vg::CreateVgCommand;
use lvforge::cli::commands::extend::ExtendCommand;
use lvforge::cli::commands::format::FormatCommand;
use lvforge::cli::commands::mount::MountCommand;
use lvforge::cli::commands::reduce::ReduceCommand;
use lvforge::cli::commands::remove::RemoveCommand;
use lvforge::cli::{Cli, Commands};
use lvforge::config::{config, init_config};
use lvforge::telemetry::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_config()?;
    let config = config()?;
    if config.observability.tracing_enabled {
        init_telemetry(&config.observability.log_level)?;
    }

    match cli.command {
        // Default behavior: no subcommand - explain the provisioning flow
        None => {
            show_provisioning_guide();
            Ok(())
        }
        Some(Commands::CreatePv { volume_path }) => {
            tokio::runtime::Runtime::new()?.block_on(async {
                CreatePvCommand::new(volume_path).execute().await
            })
        }
        Some(Commands::CreateVg {
            name,
            volume_path,
            yes,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            CreateVgCommand::new(name, volume_path, yes).execute().await
        }),
        Some(Commands::CreateLv {
            name,
            size,
            group,
            input,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            CreateLvCommand::new(name, size, group, input).execute().await
        }),
        Some(Commands::Format {
            name,
            group,
            filesystem,
            location,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            FormatCommand::new(name, group, filesystem, location)
                .execute()
                .await
        }),
        Some(Commands::Mount {
            name,
            group,
            mount_path,
            filesystem,
            location,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            MountCommand::new(name, group, mount_path, filesystem, location)
                .execute()
                .await
        }),
        Some(Commands::Extend {
            name,
            group,
            size,
            to,
            location,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            ExtendCommand::new(name, group, size, to, location)
                .execute()
                .await
        }),
        Some(Commands::Reduce {
            name,
            group,
            size,
            to,
            location,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            ReduceCommand::new(name, group, size, to, location)
                .execute()
                .await
        }),
        Some(Commands::Remove {
            mount_path,
            name,
            group,
            location,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            RemoveCommand::new(mount_path, name, group, location)
                .execute()
                .await
        }),
    }
}

fn show_provisioning_guide() {
    println!("LVFORGE - Provision a Logical Volume");
    println!();
    println!("💾 PROVISIONING FLOW:");
    println!("   1. lvforge create-pv /dev/sdb1           # initialize the device");
    println!("   2. lvforge create-vg vg0 /dev/sdb1       # pool it into a group");
    println!("   3. lvforge create-lv data 10 vg0         # carve out a 10G volume");
    println!("   4. lvforge format data vg0               # put a filesystem on it");
    println!("   5. lvforge mount data vg0 /mnt/data      # create mount point and mount");
    println!();
    println!("💾 DAY-TWO OPERATIONS:");
    println!("   lvforge extend data vg0 5                # grow by 5G (--to for absolute)");
    println!("   lvforge reduce data vg0 2                # shrink by 2G (--to for absolute)");
    println!("   lvforge remove /mnt/data data vg0        # unmount and delete");
    println!();
    println!("📊 Quick start: run 'lvforge --help' for all flags.");
}
