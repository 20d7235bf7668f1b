//Modules
mod catalog;
mod functions;
mod implementations;
mod overlay;
mod patch_complete;
pub mod patcher;
mod patcher_builder;
pub mod structures;
pub mod traits;

pub use crate::catalog::StaticAssetCatalog;
pub use crate::functions::human_readable_bytesize;
pub use crate::overlay::{MessageLog, TracingOverlay};
pub use crate::patch_complete::PatchCompleteDelegate;
pub use crate::patcher::Patcher;
pub use crate::patcher_builder::PatcherBuilder;
