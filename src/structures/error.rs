#[derive(Debug)]
pub enum Error {
  /// The manifest check has not completed successfully, so nothing can be patched
  ManifestNotUpToDate(),
  /// Called outside of a tokio runtime
  NoRuntime(tokio::runtime::TryCurrentError),
  MutexPoisoned(String),
  JoinError(tokio::task::JoinError),
  IoError(std::io::Error),
  JsonError(json::Error),

  /// Configuration was valid json but not a valid patcher configuration, argument is the reason
  InvalidConfig(String),
}
