use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "lvforge")]
#[command(about = "LVM provisioning orchestration")]
#[command(long_about = "Lvforge sequences the LVM and filesystem command-line tools to provision, \
                       resize, and tear down logical volumes. Start with 'lvforge create-pv' on a \
                       fresh device, then build a group and volumes on top of it.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a storage device as an LVM physical volume
    CreatePv {
        /// Device path to initialize (e.g. /dev/sdb1)
        volume_path: String,
    },
    /// Aggregate physical volumes into a volume group
    CreateVg {
        /// Volume group name
        name: String,
        /// Physical volume path to aggregate (e.g. /dev/sdb1)
        volume_path: String,
        /// Answer yes to vgcreate prompts
        #[arg(short = 'y', long, help = "Pass -y to vgcreate to auto-confirm prompts")]
        yes: bool,
    },
    /// Allocate a logical volume from a volume group's capacity
    CreateLv {
        /// Logical volume name
        name: String,
        /// Size in gigabytes
        size: u64,
        /// Volume group to allocate from
        group: String,
        /// Text fed to lvcreate's stdin (e.g. to confirm signature wiping)
        #[arg(long, help = "Text written to lvcreate's input stream after start")]
        input: Option<String>,
    },
    /// Create a filesystem on a logical volume
    Format {
        /// Logical volume name
        name: String,
        /// Volume group the volume belongs to
        group: String,
        /// Filesystem type
        #[arg(long, help = "Filesystem type (defaults from configuration)")]
        filesystem: Option<String>,
        /// Device location
        #[arg(long, help = "Directory holding device nodes (defaults from configuration)")]
        location: Option<String>,
    },
    /// Create the mount point and mount a logical volume
    Mount {
        /// Logical volume name
        name: String,
        /// Volume group the volume belongs to
        group: String,
        /// Mount point path (created first, e.g. /mnt/data)
        mount_path: String,
        /// Filesystem type
        #[arg(long, help = "Filesystem type (defaults from configuration)")]
        filesystem: Option<String>,
        /// Device location
        #[arg(long, help = "Directory holding device nodes (defaults from configuration)")]
        location: Option<String>,
    },
    /// Grow a logical volume
    Extend {
        /// Logical volume name
        name: String,
        /// Volume group the volume belongs to
        group: String,
        /// Size in gigabytes (a delta, or the absolute target with --to)
        size: u64,
        /// Extend to an absolute size instead of by a delta
        #[arg(long, help = "Treat size as the absolute target instead of an increment")]
        to: bool,
        /// Device location
        #[arg(long, help = "Directory holding device nodes (defaults from configuration)")]
        location: Option<String>,
    },
    /// Shrink a logical volume
    Reduce {
        /// Logical volume name
        name: String,
        /// Volume group the volume belongs to
        group: String,
        /// Size in gigabytes (a delta, or the absolute target with --to)
        size: u64,
        /// Reduce to an absolute size instead of by a delta
        #[arg(long, help = "Treat size as the absolute target instead of a decrement")]
        to: bool,
        /// Device location
        #[arg(long, help = "Directory holding device nodes (defaults from configuration)")]
        location: Option<String>,
    },
    /// Unmount and delete a logical volume
    Remove {
        /// Mount point to unmount first
        mount_path: String,
        /// Logical volume name
        name: String,
        /// Volume group the volume belongs to
        group: String,
        /// Device location
        #[arg(long, help = "Directory holding device nodes (defaults from configuration)")]
        location: Option<String>,
    },
}
