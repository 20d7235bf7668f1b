use crate::structures::AssetData;

/// Class name of loadable worlds (maps) in the asset catalog.
pub const WORLD_CLASS : &str = "World";

pub trait AssetCatalog: Send + Sync {
  fn assets_by_class(&self, class_name: &str) -> Vec<AssetData>;
}
