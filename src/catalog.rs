use crate::structures::AssetData;
use crate::traits::AssetCatalog;

/// A fixed, in-memory asset catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetCatalog {
  assets: Vec<AssetData>,
}

impl StaticAssetCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_asset(mut self, class_name: impl Into<String>, asset_name: impl Into<String>) -> Self {
    self.assets.push(AssetData {
      asset_name: asset_name.into(),
      class_name: class_name.into(),
    });
    self
  }
}

impl AssetCatalog for StaticAssetCatalog {
  fn assets_by_class(&self, class_name: &str) -> Vec<AssetData> {
    self.assets.iter().filter(|asset| asset.class_name == class_name).cloned().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::StaticAssetCatalog;
  use crate::traits::{AssetCatalog, WORLD_CLASS};

  #[test]
  fn filters_by_class() {
    let catalog = StaticAssetCatalog::new()
      .with_asset(WORLD_CLASS, "MainMenu")
      .with_asset("Texture2D", "Logo")
      .with_asset(WORLD_CLASS, "Level1");
    let worlds : Vec<String> = catalog.assets_by_class(WORLD_CLASS).into_iter().map(|asset| asset.asset_name).collect();
    assert_eq!(worlds, vec!["MainMenu", "Level1"]);
  }
}
