/// State of a single chunk as reported by the downloader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStatus {
  /// Chunk is downloaded and mounted
  Mounted,
  /// Chunk is fully cached locally but not mounted
  Cached,
  /// Chunk is currently being downloaded
  Downloading,
  /// Some of the chunk is cached locally
  Partial,
  /// None of the chunk is cached locally
  Remote,
  /// The chunk id is not in the manifest
  Unknown,
}
