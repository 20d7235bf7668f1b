/// Identifies the remote manifest to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
  pub name: String,
  pub content_build_id: String,
}
