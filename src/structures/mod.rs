pub mod error;
pub use error::Error;

pub mod chunk_status;
pub use chunk_status::ChunkStatus;

pub mod loading_stats;
pub use loading_stats::LoadingStats;

pub mod loading_progress;
pub use loading_progress::LoadingProgress;

pub mod deployment;
pub use deployment::Deployment;

pub mod config;
pub use config::{BroadcastPolicy, PatcherConfig, ProgressConfig};

pub mod overlay_message;
pub use overlay_message::{Colour, OverlayMessage};

pub mod asset_data;
pub use asset_data::AssetData;
