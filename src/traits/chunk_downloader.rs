use async_trait::async_trait;

use crate::structures::{ChunkStatus, LoadingStats};

/**
The external chunk downloader the patcher drives.

Every async operation resolves to its success flag once the downloader is done with it,
the patcher never blocks on any of them.
*/
#[async_trait]
pub trait ChunkDownloader: Send + Sync {
  fn initialize(&self, platform: &str, worker_count: usize);

  /// Restores the previously cached manifest for `deployment`, returns whether one was found.
  fn load_cached_build(&self, deployment: &str) -> bool;

  async fn update_build(&self, deployment: &str, content_build_id: &str) -> bool;

  fn chunk_status(&self, chunk_id: i32) -> ChunkStatus;

  async fn download_chunks(&self, chunk_ids: &[i32], priority: i32) -> bool;

  async fn begin_loading_mode(&self) -> bool;

  async fn mount_chunks(&self, chunk_ids: &[i32]) -> bool;

  fn loading_stats(&self) -> LoadingStats;

  fn shutdown(&self);
}
