use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::overlay::TracingOverlay;
use crate::patch_complete::PatchCompleteDelegate;
use crate::patcher::{Patcher, PatcherState};
use crate::structures::{Error, PatcherConfig};
use crate::traits::{AssetCatalog, ChunkDownloader, DebugOverlay};

pub struct PatcherBuilder {
  pub(crate) downloader: Arc<dyn ChunkDownloader>,
  pub(crate) config: PatcherConfig,
  pub(crate) overlay: Arc<dyn DebugOverlay>,
  pub(crate) catalog: Option<Arc<dyn AssetCatalog>>,
  pub(crate) chunk_download_list: Vec<i32>,
}

impl PatcherBuilder {
    pub fn new(downloader: Arc<dyn ChunkDownloader>) -> Self {
        Self {
            downloader,
            config: PatcherConfig::default(),
            overlay: Arc::new(TracingOverlay),
            catalog: None,
            chunk_download_list: Vec::new(),
        }
    }

    pub fn set_config(&mut self, config: PatcherConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn set_overlay(&mut self, overlay: Arc<dyn DebugOverlay>) -> &mut Self {
        self.overlay = overlay;
        self
    }

    pub fn set_asset_catalog(&mut self, catalog: Arc<dyn AssetCatalog>) -> &mut Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn set_chunk_download_list(&mut self, chunk_ids: Vec<i32>) -> &mut Self {
        self.chunk_download_list = chunk_ids;
        self
    }

    pub fn build(&self) -> Result<Patcher, Error> {
        if self.config.worker_count == 0 {
            return Err(Error::InvalidConfig("worker_count must be a positive integer".to_string()));
        }
        Ok(Patcher {
            inner: Arc::new(PatcherState {
                config: self.config.clone(),
                downloader: self.downloader.clone(),
                overlay: self.overlay.clone(),
                catalog: self.catalog.clone(),
                chunk_download_list: Mutex::new(self.chunk_download_list.clone()),
                initialized: AtomicBool::new(false),
                manifest_up_to_date: AtomicBool::new(false),
                patch_complete: AtomicBool::new(false),
                on_patch_complete: PatchCompleteDelegate::new(),
                tasks: Mutex::new(Vec::new()),
            })
        })
    }
}
