use crate::structures::Deployment;

/// When the patch-complete delegate is broadcast on a successful download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastPolicy {
  /// Broadcast `true` as soon as the download succeeds and again with the mount result
  DownloadAndMount,
  /// Only the mount result is broadcast
  MountOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
  /// Compute the mount percent with integer division, so 3 out of 4 chunks reports 0
  pub truncate_mount_percent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatcherConfig {
  pub deployment: Deployment,
  pub platform: String,
  pub worker_count: usize,
  pub download_priority: i32,
  pub broadcast_policy: BroadcastPolicy,
  pub progress: ProgressConfig,
}
