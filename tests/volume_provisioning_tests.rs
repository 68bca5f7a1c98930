//! Volume provisioning tests against the public library API
//!
//! Uses a recording executor in place of the real process spawner so a full
//! provision/resize/teardown sequence can be asserted command-by-command.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use lvforge::{CommandError, CommandExecutor, CommandOutput, VolumeManager};

type CallLog = Arc<Mutex<Vec<(String, Vec<String>)>>>;

/// Executor that records every invocation into a shared log and reports
/// success with a canned message naming the program that ran.
struct RecordingExecutor {
    calls: CallLog,
}

impl RecordingExecutor {
    fn new() -> (Self, CallLog) {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute_with_input(
        &self,
        program: &str,
        args: &[&str],
        _input: Option<&str>,
    ) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        Ok(CommandOutput {
            status_code: 0,
            stdout: format!("{program} ok"),
            stderr: String::new(),
        })
    }
}

fn programs(calls: &CallLog) -> Vec<String> {
    calls
        .lock()
        .unwrap()
        .iter()
        .map(|(program, _)| program.clone())
        .collect()
}

#[tokio::test]
async fn test_full_provisioning_sequence_issues_expected_commands() {
    let (executor, calls) = RecordingExecutor::new();
    let manager = VolumeManager::with_executor(executor);

    manager
        .create_physical_volume("/dev/sdb1", ())
        .await
        .unwrap();
    manager
        .create_volume_group("vg0", "/dev/sdb1", false, ())
        .await
        .unwrap();
    manager
        .create_logical_volume("data", 10, "vg0", None, ())
        .await
        .unwrap();
    manager
        .format_logical_volume("data", "vg0", "ext4", "/dev", ())
        .await
        .unwrap();
    let mount = manager
        .mount_volume("data", "vg0", "ext4", "/mnt/data", "/dev", ())
        .await
        .unwrap();

    assert_eq!(mount.results.len(), 2);
    assert_eq!(
        programs(&calls),
        vec!["pvcreate", "vgcreate", "lvcreate", "mkfs", "mkdir", "mount"]
    );
}

#[tokio::test]
async fn test_resize_and_teardown_sequence_issues_expected_commands() {
    let (executor, calls) = RecordingExecutor::new();
    let manager = VolumeManager::with_executor(executor);

    manager
        .extend_volume_by("data", "vg0", "/dev", 5, ())
        .await
        .unwrap();
    manager
        .reduce_volume_by("data", "vg0", "/dev", 2, ())
        .await
        .unwrap();
    let removal = manager
        .remove_volume("/mnt/data", "data", "vg0", "/dev", ())
        .await
        .unwrap();

    assert_eq!(removal.results.len(), 2);
    assert_eq!(
        programs(&calls),
        vec!["lvextend", "lvreduce", "umount", "lvremove"]
    );
}

#[tokio::test]
async fn test_receipts_thread_caller_data_through_the_sequence() {
    let (executor, _calls) = RecordingExecutor::new();
    let manager = VolumeManager::with_executor(executor);

    let receipt = manager
        .create_volume_group("vg0", "/dev/sdb1", false, "request-7")
        .await
        .unwrap();

    assert_eq!(receipt.data, "request-7");
    assert_eq!(receipt.results, vec!["vgcreate ok".to_string()]);
}

/// Concurrent invocations stay isolated: each receipt carries only its own
/// result, and the log holds the union of both calls.
#[tokio::test]
async fn test_concurrent_operations_do_not_share_buffers() {
    let (executor, calls) = RecordingExecutor::new();
    let manager = VolumeManager::with_executor(executor);

    let (left, right) = tokio::join!(
        manager.create_physical_volume("/dev/sdb1", ()),
        manager.create_physical_volume("/dev/sdc1", ()),
    );

    assert_eq!(left.unwrap().results, vec!["pvcreate ok".to_string()]);
    assert_eq!(right.unwrap().results, vec!["pvcreate ok".to_string()]);
    assert_eq!(programs(&calls).len(), 2);
}
