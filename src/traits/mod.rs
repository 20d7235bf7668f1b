mod chunk_downloader;
mod debug_overlay;
mod asset_catalog;

pub use chunk_downloader::ChunkDownloader;
pub use debug_overlay::DebugOverlay;
pub use asset_catalog::{AssetCatalog, WORLD_CLASS};
