use crate::structures::Deployment;

impl Deployment {
  pub fn new(name: impl Into<String>, content_build_id: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      content_build_id: content_build_id.into(),
    }
  }
}

impl Default for Deployment {
  fn default() -> Self {
    Self::new("PakLoadingDemoLive", "PakLoadingDemoKey")
  }
}
