#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetData {
  pub asset_name: String,
  pub class_name: String,
}
