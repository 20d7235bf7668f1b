use crate::structures::Error;

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::NoRuntime(error) => Some(error),
      Self::JoinError(error) => Some(error),
      Self::IoError(error) => Some(error),
      Self::JsonError(error) => Some(error),
      _ => None,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::ManifestNotUpToDate() => write!(f, "Manifest Update Failed. Can't patch the game"),
      Self::NoRuntime(error) => write!(f, "No tokio runtime available: {}", error),
      Self::MutexPoisoned(error) => write!(f, "Mutex poisoned: {}", error),
      Self::JoinError(error) => write!(f, "Patch task failed: {}", error),
      Self::IoError(error) => write!(f, "IO error: {}", error),
      Self::JsonError(error) => write!(f, "Json error: {}", error),
      Self::InvalidConfig(reason) => write!(f, "Invalid patcher configuration: {}", reason),
    }
  }
}

impl From<tokio::runtime::TryCurrentError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::runtime::TryCurrentError) -> Self {
    log_error(&error);
    Self::NoRuntime(error)
  }
}

impl From<tokio::task::JoinError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::task::JoinError) -> Self {
    log_error(&error);
    Self::JoinError(error)
  }
}

impl<T> From<std::sync::PoisonError<std::sync::MutexGuard<'_, T>>> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::sync::PoisonError<std::sync::MutexGuard<'_, T>>) -> Self {
    log_error(&error);
    Self::MutexPoisoned(error.to_string())
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = core::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}

#[cfg(test)]
mod tests {
  use crate::structures::Error;

  #[test]
  fn stale_manifest_message() {
    assert_eq!(Error::ManifestNotUpToDate().to_string(), "Manifest Update Failed. Can't patch the game");
  }

  #[test]
  fn json_errors_convert() {
    let error : Error = json::parse("{ not json").unwrap_err().into();
    assert!(matches!(error, Error::JsonError(_)));
    assert!(std::error::Error::source(&error).is_some());
  }

  #[test]
  fn missing_runtime_converts() {
    let error : Error = tokio::runtime::Handle::try_current().unwrap_err().into();
    assert!(matches!(error, Error::NoRuntime(_)));
  }
}
