/// Point-in-time copy of the downloader's loading statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingStats {
  pub bytes_downloaded: i64,
  pub total_bytes_to_download: i64,
  pub chunks_mounted: i32,
  pub total_chunks_to_mount: i32,
}
