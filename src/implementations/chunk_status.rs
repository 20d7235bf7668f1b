use crate::structures::ChunkStatus;

impl ChunkStatus {
  /// Stable integer code used when logging a chunk's status.
  pub fn code(&self) -> i32 {
    match self {
      Self::Mounted => 0,
      Self::Cached => 1,
      Self::Downloading => 2,
      Self::Partial => 3,
      Self::Remote => 4,
      Self::Unknown => 5,
    }
  }
}

impl std::fmt::Display for ChunkStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

#[cfg(test)]
mod tests {
  use crate::structures::ChunkStatus;

  #[test]
  fn codes_are_stable() {
    assert_eq!(ChunkStatus::Mounted.code(), 0);
    assert_eq!(ChunkStatus::Remote.code(), 4);
    assert_eq!(ChunkStatus::Unknown.to_string(), "5");
  }
}
