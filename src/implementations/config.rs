use std::path::Path;

use json::JsonValue;
use tracing::info;

use crate::structures::{BroadcastPolicy, Deployment, Error, PatcherConfig, ProgressConfig};

impl Default for ProgressConfig {
  fn default() -> Self {
    Self {
      truncate_mount_percent: false,
    }
  }
}

impl Default for PatcherConfig {
  fn default() -> Self {
    Self {
      deployment: Deployment::default(),
      platform: "Windows".to_string(),
      worker_count: 8,
      download_priority: 1,
      broadcast_policy: BroadcastPolicy::DownloadAndMount,
      progress: ProgressConfig::default(),
    }
  }
}

impl BroadcastPolicy {
  fn parse(value: &str) -> Result<Self, Error> {
    match value {
      "download_and_mount" => Ok(Self::DownloadAndMount),
      "mount_only" => Ok(Self::MountOnly),
      other => Err(Error::InvalidConfig(format!("Unknown broadcast_policy: {}", other))),
    }
  }
}

impl PatcherConfig {
  /// Reads a json configuration file, see [`PatcherConfig::from_json_str`].
  pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
    let text = std::fs::read_to_string(path.as_ref())?;
    info!("Loading patcher configuration from {}", path.as_ref().display());
    Self::from_json_str(&text)
  }

  /**
  Parses a configuration such as:

  ```json
  {
    "deployment": { "name": "PakLoadingDemoLive", "content_build_id": "PakLoadingDemoKey" },
    "platform": "Windows",
    "worker_count": 8,
    "download_priority": 1,
    "broadcast_policy": "mount_only",
    "truncate_mount_percent": false
  }
  ```

  Missing keys keep their default value.
  */
  pub fn from_json_str(text: &str) -> Result<Self, Error> {
    let root = json::parse(text)?;
    if !root.is_object() {
      return Err(Error::InvalidConfig("Root is not an object".to_string()));
    }
    let mut config = Self::default();

    let deployment = &root["deployment"];
    if !deployment.is_null() {
      if let Some(name) = optional_str(deployment, "name")? {
        config.deployment.name = name;
      }
      if let Some(content_build_id) = optional_str(deployment, "content_build_id")? {
        config.deployment.content_build_id = content_build_id;
      }
    }
    if let Some(platform) = optional_str(&root, "platform")? {
      config.platform = platform;
    }
    if !root["worker_count"].is_null() {
      config.worker_count = root["worker_count"].as_usize().filter(|count| *count > 0)
        .ok_or_else(|| Error::InvalidConfig("worker_count must be a positive integer".to_string()))?;
    }
    if !root["download_priority"].is_null() {
      config.download_priority = root["download_priority"].as_i32()
        .ok_or_else(|| Error::InvalidConfig("download_priority must be an integer".to_string()))?;
    }
    if let Some(policy) = optional_str(&root, "broadcast_policy")? {
      config.broadcast_policy = BroadcastPolicy::parse(&policy)?;
    }
    if !root["truncate_mount_percent"].is_null() {
      config.progress.truncate_mount_percent = root["truncate_mount_percent"].as_bool()
        .ok_or_else(|| Error::InvalidConfig("truncate_mount_percent must be a boolean".to_string()))?;
    }
    Ok(config)
  }
}

fn optional_str(object: &JsonValue, key: &str) -> Result<Option<String>, Error> {
  let value = &object[key];
  if value.is_null() {
    return Ok(None);
  }
  value.as_str().map(|value| Some(value.to_string())).ok_or_else(|| Error::InvalidConfig(format!("{} must be a string", key)))
}

#[cfg(test)]
mod tests {
  use crate::structures::{BroadcastPolicy, Error, PatcherConfig};

  #[test]
  fn defaults_match_demo_deployment() {
    let config = PatcherConfig::default();
    assert_eq!(config.deployment.name, "PakLoadingDemoLive");
    assert_eq!(config.deployment.content_build_id, "PakLoadingDemoKey");
    assert_eq!(config.platform, "Windows");
    assert_eq!(config.worker_count, 8);
    assert_eq!(config.download_priority, 1);
    assert_eq!(config.broadcast_policy, BroadcastPolicy::DownloadAndMount);
    assert!(!config.progress.truncate_mount_percent);
  }

  #[test]
  fn empty_object_is_default() {
    assert_eq!(PatcherConfig::from_json_str("{}").unwrap(), PatcherConfig::default());
  }

  #[test]
  fn parses_every_key() {
    let config = PatcherConfig::from_json_str(r#"{
      "deployment": { "name": "Staging", "content_build_id": "Build42" },
      "platform": "Linux",
      "worker_count": 4,
      "download_priority": 3,
      "broadcast_policy": "mount_only",
      "truncate_mount_percent": true
    }"#).unwrap();
    assert_eq!(config.deployment.name, "Staging");
    assert_eq!(config.deployment.content_build_id, "Build42");
    assert_eq!(config.platform, "Linux");
    assert_eq!(config.worker_count, 4);
    assert_eq!(config.download_priority, 3);
    assert_eq!(config.broadcast_policy, BroadcastPolicy::MountOnly);
    assert!(config.progress.truncate_mount_percent);
  }

  #[test]
  fn rejects_bad_values() {
    assert!(matches!(PatcherConfig::from_json_str(r#"{ "worker_count": 0 }"#), Err(Error::InvalidConfig(_))));
    assert!(matches!(PatcherConfig::from_json_str(r#"{ "platform": 5 }"#), Err(Error::InvalidConfig(_))));
    assert!(matches!(PatcherConfig::from_json_str(r#"{ "broadcast_policy": "never" }"#), Err(Error::InvalidConfig(_))));
    assert!(matches!(PatcherConfig::from_json_str("[]"), Err(Error::InvalidConfig(_))));
    assert!(matches!(PatcherConfig::from_json_str("nope"), Err(Error::JsonError(_))));
  }

  #[test]
  fn missing_file_is_io_error() {
    assert!(matches!(PatcherConfig::load("/definitely/not/here.json"), Err(Error::IoError(_))));
  }
}
