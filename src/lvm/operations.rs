use crate::external::command::{CommandError, CommandExecutor, ProcessCommandExecutor};
use crate::telemetry::generate_correlation_id;

/// Result of a catalog operation: the caller's opaque pass-through value
/// together with the resolved text of each command that ran, in order.
/// Single-command operations produce one entry; the compound mount/remove
/// operations produce two.
#[derive(Debug, Clone)]
pub struct OperationReceipt<T> {
    pub data: T,
    pub results: Vec<String>,
}

/// Typed operations over the LVM and filesystem command-line tools.
///
/// Each method maps its parameters onto one command invocation (two for
/// mount/remove) and returns the resolved output text. No state is kept
/// between calls and no preconditions are checked; the underlying tools are
/// the source of truth for what exists.
pub struct VolumeManager<E: CommandExecutor = ProcessCommandExecutor> {
    executor: E,
}

impl VolumeManager<ProcessCommandExecutor> {
    pub fn new() -> Self {
        Self {
            executor: ProcessCommandExecutor,
        }
    }
}

impl Default for VolumeManager<ProcessCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> VolumeManager<E> {
    /// Build a manager over a custom executor, used by tests to substitute
    /// a mock for the real process spawner.
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Device node path for a logical volume, e.g. `/dev/vg0/data`.
    fn device_path(location: &str, group_name: &str, name: &str) -> String {
        format!("{location}/{group_name}/{name}")
    }

    /// Initialize a storage device as a physical volume (runs `pvcreate`)
    pub async fn create_physical_volume<T>(
        &self,
        volume_path: &str,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let result = self.executor.run("pvcreate", &[volume_path], None).await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Aggregate physical volumes into a volume group (runs `vgcreate`)
    pub async fn create_volume_group<T>(
        &self,
        name: &str,
        volume_path: &str,
        assume_yes: bool,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let mut args = vec![name, volume_path];
        if assume_yes {
            args.push("-y");
        }
        let result = self.executor.run("vgcreate", &args, None).await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Allocate a logical volume from a group's capacity (runs `lvcreate`).
    /// `input` is fed to lvcreate's stdin, for prompts such as wiping an
    /// existing filesystem signature.
    pub async fn create_logical_volume<T>(
        &self,
        name: &str,
        size_gb: u64,
        group_name: &str,
        input: Option<&str>,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let size = format!("{size_gb}G");
        let result = self
            .executor
            .run("lvcreate", &["-L", &size, "-n", name, group_name], input)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Create a filesystem on a logical volume (runs `mkfs`)
    pub async fn format_logical_volume<T>(
        &self,
        name: &str,
        group_name: &str,
        file_system: &str,
        location: &str,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let device = Self::device_path(location, group_name, name);
        let result = self
            .executor
            .run("mkfs", &["-t", file_system, &device], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Create the mount point and mount a logical volume (runs `mkdir` then
    /// `mount`). The mount is only attempted if the mkdir succeeded; a mkdir
    /// failure propagates as-is.
    pub async fn mount_volume<T>(
        &self,
        name: &str,
        group_name: &str,
        file_system: &str,
        mount_path: &str,
        location: &str,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let correlation_id = generate_correlation_id();
        tracing::info!(
            correlation.id = %correlation_id,
            mount_path,
            "Mounting logical volume"
        );

        let mkdir_result = self.executor.run("mkdir", &[mount_path], None).await?;
        let device = Self::device_path(location, group_name, name);
        let mount_result = self
            .executor
            .run("mount", &["-t", file_system, &device, mount_path], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![mkdir_result, mount_result],
        })
    }

    /// Grow a logical volume by `size_gb` gigabytes (runs `lvextend -L+<N>G`)
    pub async fn extend_volume_by<T>(
        &self,
        name: &str,
        group_name: &str,
        location: &str,
        size_gb: u64,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let device = Self::device_path(location, group_name, name);
        let size = format!("-L+{size_gb}G");
        let result = self.executor.run("lvextend", &[&size, &device], None).await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Grow a logical volume to an absolute size (runs `lvextend -L <N>G`)
    pub async fn extend_volume_to<T>(
        &self,
        name: &str,
        group_name: &str,
        location: &str,
        size_gb: u64,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let device = Self::device_path(location, group_name, name);
        let size = format!("{size_gb}G");
        let result = self
            .executor
            .run("lvextend", &["-L", &size, &device], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Shrink a logical volume by `size_gb` gigabytes (runs `lvreduce -f -L-<N>G`)
    pub async fn reduce_volume_by<T>(
        &self,
        name: &str,
        group_name: &str,
        location: &str,
        size_gb: u64,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let device = Self::device_path(location, group_name, name);
        let size = format!("-L-{size_gb}G");
        let result = self
            .executor
            .run("lvreduce", &["-f", &size, &device], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Shrink a logical volume to an absolute size (runs `lvreduce -f -L <N>G`)
    pub async fn reduce_volume_to<T>(
        &self,
        name: &str,
        group_name: &str,
        location: &str,
        size_gb: u64,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let device = Self::device_path(location, group_name, name);
        let size = format!("{size_gb}G");
        let result = self
            .executor
            .run("lvreduce", &["-f", "-L", &size, &device], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![result],
        })
    }

    /// Unmount and delete a logical volume (runs `umount` then
    /// `lvremove -f`). The removal is only attempted if the unmount
    /// succeeded; an umount failure propagates as-is.
    pub async fn remove_volume<T>(
        &self,
        mount_path: &str,
        name: &str,
        group_name: &str,
        location: &str,
        data: T,
    ) -> Result<OperationReceipt<T>, CommandError> {
        let correlation_id = generate_correlation_id();
        tracing::info!(
            correlation.id = %correlation_id,
            mount_path,
            "Removing logical volume"
        );

        let umount_result = self.executor.run("umount", &[mount_path], None).await?;
        let device = Self::device_path(location, group_name, name);
        let remove_result = self
            .executor
            .run("lvremove", &["-f", &device], None)
            .await?;
        Ok(OperationReceipt {
            data,
            results: vec![umount_result, remove_result],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::command::CommandOutput;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordedCall {
        program: String,
        args: Vec<String>,
        input: Option<String>,
    }

    /// Records every invocation and replays scripted outputs in order.
    struct ScriptedExecutor {
        calls: Mutex<Vec<RecordedCall>>,
        responses: Mutex<VecDeque<CommandOutput>>,
    }

    impl ScriptedExecutor {
        fn new(responses: Vec<CommandOutput>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            }
        }

        fn succeeding(texts: &[&str]) -> Self {
            Self::new(texts.iter().map(|t| ok_output(t)).collect())
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn ok_output(stdout: &str) -> CommandOutput {
        CommandOutput {
            status_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn failed_output(stderr: &str) -> CommandOutput {
        CommandOutput {
            status_code: 1,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    #[async_trait]
    impl CommandExecutor for ScriptedExecutor {
        async fn execute_with_input(
            &self,
            program: &str,
            args: &[&str],
            input: Option<&str>,
        ) -> Result<CommandOutput, CommandError> {
            self.calls.lock().unwrap().push(RecordedCall {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                input: input.map(|i| i.to_string()),
            });
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ok_output("")))
        }
    }

    fn recorded(program: &str, args: &[&str]) -> RecordedCall {
        RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            input: None,
        }
    }

    #[tokio::test]
    async fn test_create_physical_volume_invocation_and_result() {
        let success_text = "Physical volume \"/dev/sdb1\" successfully created";
        let executor = ScriptedExecutor::succeeding(&[success_text]);
        let manager = VolumeManager::with_executor(executor);

        let receipt = manager
            .create_physical_volume("/dev/sdb1", ())
            .await
            .unwrap();

        assert_eq!(receipt.results, vec![success_text.to_string()]);
        assert_eq!(
            manager.executor.calls(),
            vec![recorded("pvcreate", &["/dev/sdb1"])]
        );
    }

    #[tokio::test]
    async fn test_create_volume_group_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .create_volume_group("vg0", "/dev/sdb1", false, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("vgcreate", &["vg0", "/dev/sdb1"])]
        );
    }

    #[tokio::test]
    async fn test_create_volume_group_with_assume_yes() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .create_volume_group("vg0", "/dev/sdb1", true, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("vgcreate", &["vg0", "/dev/sdb1", "-y"])]
        );
    }

    #[tokio::test]
    async fn test_create_logical_volume_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .create_logical_volume("data", 10, "vg0", None, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("lvcreate", &["-L", "10G", "-n", "data", "vg0"])]
        );
    }

    #[tokio::test]
    async fn test_create_logical_volume_forwards_input() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .create_logical_volume("data", 10, "vg0", Some("y\n"), ())
            .await
            .unwrap();

        let calls = manager.executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].input.as_deref(), Some("y\n"));
    }

    #[tokio::test]
    async fn test_format_logical_volume_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .format_logical_volume("data", "vg0", "ext4", "/dev", ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("mkfs", &["-t", "ext4", "/dev/vg0/data"])]
        );
    }

    #[tokio::test]
    async fn test_mount_volume_runs_mkdir_then_mount() {
        let executor = ScriptedExecutor::succeeding(&["made dir", "mounted"]);
        let manager = VolumeManager::with_executor(executor);

        let receipt = manager
            .mount_volume("data", "vg0", "ext4", "/mnt/data", "/dev", ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![
                recorded("mkdir", &["/mnt/data"]),
                recorded("mount", &["-t", "ext4", "/dev/vg0/data", "/mnt/data"]),
            ]
        );
        assert_eq!(
            receipt.results,
            vec!["made dir".to_string(), "mounted".to_string()]
        );
    }

    #[tokio::test]
    async fn test_mount_volume_skips_mount_when_mkdir_fails() {
        let executor =
            ScriptedExecutor::new(vec![failed_output("mkdir: cannot create directory")]);
        let manager = VolumeManager::with_executor(executor);

        let err = manager
            .mount_volume("data", "vg0", "ext4", "/mnt/data", "/dev", ())
            .await
            .unwrap_err();

        match err {
            CommandError::ExecutionFailed { message, .. } => {
                assert_eq!(message, "mkdir: cannot create directory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            manager.executor.calls(),
            vec![recorded("mkdir", &["/mnt/data"])]
        );
    }

    #[tokio::test]
    async fn test_extend_volume_by_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .extend_volume_by("data", "vg0", "/dev", 5, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("lvextend", &["-L+5G", "/dev/vg0/data"])]
        );
    }

    #[tokio::test]
    async fn test_extend_volume_to_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .extend_volume_to("data", "vg0", "/dev", 5, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("lvextend", &["-L", "5G", "/dev/vg0/data"])]
        );
    }

    #[tokio::test]
    async fn test_reduce_volume_by_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .reduce_volume_by("data", "vg0", "/dev", 2, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("lvreduce", &["-f", "-L-2G", "/dev/vg0/data"])]
        );
    }

    #[tokio::test]
    async fn test_reduce_volume_to_invocation() {
        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        manager
            .reduce_volume_to("data", "vg0", "/dev", 8, ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![recorded("lvreduce", &["-f", "-L", "8G", "/dev/vg0/data"])]
        );
    }

    #[tokio::test]
    async fn test_remove_volume_runs_umount_then_lvremove() {
        let executor = ScriptedExecutor::succeeding(&["unmounted", "removed"]);
        let manager = VolumeManager::with_executor(executor);

        let receipt = manager
            .remove_volume("/mnt/data", "data", "vg0", "/dev", ())
            .await
            .unwrap();

        assert_eq!(
            manager.executor.calls(),
            vec![
                recorded("umount", &["/mnt/data"]),
                recorded("lvremove", &["-f", "/dev/vg0/data"]),
            ]
        );
        assert_eq!(
            receipt.results,
            vec!["unmounted".to_string(), "removed".to_string()]
        );
    }

    #[tokio::test]
    async fn test_remove_volume_skips_lvremove_when_umount_fails() {
        let executor = ScriptedExecutor::new(vec![failed_output("umount: target is busy")]);
        let manager = VolumeManager::with_executor(executor);

        let err = manager
            .remove_volume("/mnt/data", "data", "vg0", "/dev", ())
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::ExecutionFailed { .. }));
        assert_eq!(
            manager.executor.calls(),
            vec![recorded("umount", &["/mnt/data"])]
        );
    }

    #[tokio::test]
    async fn test_receipt_carries_pass_through_data() {
        #[derive(Debug, PartialEq)]
        struct RequestContext {
            ticket: u32,
        }

        let executor = ScriptedExecutor::succeeding(&["ok"]);
        let manager = VolumeManager::with_executor(executor);

        let receipt = manager
            .create_physical_volume("/dev/sdc1", RequestContext { ticket: 42 })
            .await
            .unwrap();

        assert_eq!(receipt.data, RequestContext { ticket: 42 });
    }
}
