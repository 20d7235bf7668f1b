use crate::structures::{LoadingProgress, LoadingStats, ProgressConfig};

impl LoadingStats {
  /// Fraction of bytes downloaded, 0 when there is nothing to download.
  pub fn download_percent(&self) -> f32 {
    if self.total_bytes_to_download == 0 {
      return 0.0;
    }
    self.bytes_downloaded as f32 / self.total_bytes_to_download as f32
  }

  /// Fraction of chunks mounted, 0 when there is nothing to mount.
  pub fn mount_percent(&self) -> f32 {
    if self.total_chunks_to_mount == 0 {
      return 0.0;
    }
    self.chunks_mounted as f32 / self.total_chunks_to_mount as f32
  }

  /// Integer-division mount percent, only ever 0 or 1 while mounting is in bounds.
  pub fn truncated_mount_percent(&self) -> f32 {
    if self.total_chunks_to_mount == 0 {
      return 0.0;
    }
    (self.chunks_mounted / self.total_chunks_to_mount) as f32
  }

  pub fn to_progress(&self, config: &ProgressConfig) -> LoadingProgress {
    let mount_percent = if config.truncate_mount_percent {
      self.truncated_mount_percent()
    } else {
      self.mount_percent()
    };
    LoadingProgress {
      bytes_downloaded: self.bytes_downloaded,
      total_bytes_to_download: self.total_bytes_to_download,
      download_percent: self.download_percent(),
      chunks_mounted: self.chunks_mounted,
      total_chunks_to_mount: self.total_chunks_to_mount,
      mount_percent,
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::structures::{LoadingStats, ProgressConfig};

  fn stats(bytes_downloaded: i64, total_bytes_to_download: i64, chunks_mounted: i32, total_chunks_to_mount: i32) -> LoadingStats {
    LoadingStats { bytes_downloaded, total_bytes_to_download, chunks_mounted, total_chunks_to_mount }
  }

  #[test]
  fn nothing_to_mount_is_zero() {
    let progress = stats(50, 200, 3, 0).to_progress(&ProgressConfig::default());
    assert_eq!(progress.download_percent, 0.25);
    assert_eq!(progress.mount_percent, 0.0);
    assert_eq!(progress.chunks_mounted, 3);
  }

  #[test]
  fn nothing_to_download_is_zero() {
    assert_eq!(stats(0, 0, 0, 0).download_percent(), 0.0);
    assert_eq!(stats(10, 0, 0, 0).download_percent(), 0.0);
  }

  #[test]
  fn mount_percent_is_fractional() {
    assert_eq!(stats(0, 0, 3, 4).mount_percent(), 0.75);
  }

  #[test]
  fn truncated_mount_percent_rounds_down() {
    let config = ProgressConfig { truncate_mount_percent: true };
    assert_eq!(stats(0, 0, 3, 4).to_progress(&config).mount_percent, 0.0);
    assert_eq!(stats(0, 0, 4, 4).to_progress(&config).mount_percent, 1.0);
  }
}
