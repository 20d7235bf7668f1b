#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingProgress {
  pub bytes_downloaded: i64,
  pub total_bytes_to_download: i64,
  pub download_percent: f32,
  pub chunks_mounted: i32,
  pub total_chunks_to_mount: i32,
  pub mount_percent: f32,
}
