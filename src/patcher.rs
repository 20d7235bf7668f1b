//Standard library
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

//External crates
use futures::future::join_all;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use crate::functions::human_readable_bytesize;
use crate::patch_complete::PatchCompleteDelegate;
use crate::structures::{BroadcastPolicy, Colour, Error, LoadingProgress, OverlayMessage, PatcherConfig};
use crate::traits::{AssetCatalog, ChunkDownloader, DebugOverlay, WORLD_CLASS};

/**
Drives the chunk downloader through manifest update, download, mount and the final
patch-complete broadcast.

Cloning a `Patcher` yields another handle to the same state. Continuations hold their own
handle, so dropping every `Patcher` while a download is in flight is fine.
*/
#[derive(Clone)]
pub struct Patcher {
  pub(crate) inner: Arc<PatcherState>,
}

pub(crate) struct PatcherState {
  pub(crate) config: PatcherConfig,
  pub(crate) downloader: Arc<dyn ChunkDownloader>,
  pub(crate) overlay: Arc<dyn DebugOverlay>,
  pub(crate) catalog: Option<Arc<dyn AssetCatalog>>,
  pub(crate) chunk_download_list: Mutex<Vec<i32>>,
  pub(crate) initialized: AtomicBool,
  pub(crate) manifest_up_to_date: AtomicBool,
  pub(crate) patch_complete: AtomicBool,
  pub(crate) on_patch_complete: PatchCompleteDelegate,
  pub(crate) tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Patcher {
  /// Initializes the downloader, restores the cached build and starts the manifest update.
  #[instrument(skip(self), fields(deployment = %self.inner.config.deployment.name))]
  pub fn init(&self) -> Result<(), Error> {
    let runtime = Handle::try_current()?;
    // nothing below can fail once the flag is claimed
    if self.inner.initialized.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
      warn!("Patcher was already initialized");
      return Ok(());
    }

    let state = &self.inner;
    let deployment = &state.config.deployment;
    state.downloader.initialize(&state.config.platform, state.config.worker_count);

    if state.downloader.load_cached_build(&deployment.name) {
      info!("Loaded cached build for {}", &deployment.name);
    } else {
      info!("No cached build found for {}", &deployment.name);
    }

    let update_state = self.inner.clone();
    state.spawn(&runtime, async move {
      let deployment = &update_state.config.deployment;
      let success = update_state.downloader.update_build(&deployment.name, &deployment.content_build_id).await;
      update_state.on_manifest_update_complete(success);
    });

    let listener = Arc::downgrade(&self.inner);
    state.on_patch_complete.add(move |success| {
      if let Some(state) = listener.upgrade() {
        state.patch_complete_callback(success);
      }
    });
    Ok(())
  }

  /// Waits for every in-flight continuation, then shuts the downloader down.
  #[instrument(skip(self))]
  pub async fn shutdown(&self) -> Result<(), Error> {
    let settled = self.settle().await;
    self.inner.downloader.shutdown();
    info!("Chunk downloader shut down");
    settled
  }

  /**
  Waits until no continuation is running, including the ones spawned by other continuations.

  Every task is awaited even if one of them panicked; the first failure is returned.
  */
  pub async fn settle(&self) -> Result<(), Error> {
    let mut first_error = None;
    loop {
      let tasks = std::mem::take(&mut *self.inner.lock_tasks());
      if tasks.is_empty() {
        break;
      }
      for result in join_all(tasks).await {
        if let Err(e) = result {
          first_error.get_or_insert(Error::from(e));
        }
      }
    }
    match first_error {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  /// Current download and mount progress, also written to the overlay.
  pub fn loading_progress(&self) -> LoadingProgress {
    let stats = self.inner.downloader.loading_stats();
    let overlay = &self.inner.overlay;

    overlay.add_message(OverlayMessage::frame(format!("Total Bytes To Download: {} ({})", stats.total_bytes_to_download, human_readable_bytesize(stats.total_bytes_to_download))));
    overlay.add_message(OverlayMessage::frame(format!("Bytes Downloaded: {} ({})", stats.bytes_downloaded, human_readable_bytesize(stats.bytes_downloaded))));
    overlay.add_message(OverlayMessage::frame(format!("Total Chunks To Mount: {}", stats.total_chunks_to_mount)));
    overlay.add_message(OverlayMessage::frame(format!("ChunksMounted: {}", stats.chunks_mounted)));

    stats.to_progress(&self.inner.config.progress)
  }

  /**
  Starts downloading the chunk download list, and switches the downloader to loading mode.

  Returns as soon as both are launched. Fails with [`Error::ManifestNotUpToDate`] without
  touching the downloader when the manifest update hasn't succeeded.
  */
  #[instrument(skip(self))]
  pub fn download_chunks(&self) -> Result<(), Error> {
    let state = &self.inner;
    state.overlay.add_message(OverlayMessage::notice(Colour::Cyan, "DOWNLOADING CHUNKS"));

    if !state.manifest_up_to_date.load(Ordering::SeqCst) {
      info!("Manifest Update Failed. Can't patch the game");
      return Err(Error::ManifestNotUpToDate());
    }
    let runtime = Handle::try_current()?;

    // mount exactly what this launch downloads, even if the list changes meanwhile
    let chunk_ids = state.chunk_download_list.lock()?.clone();
    for chunk_id in &chunk_ids {
      state.overlay.add_message(OverlayMessage::notice(Colour::Cyan, chunk_id.to_string()));
      let status = state.downloader.chunk_status(*chunk_id);
      info!("Chunk {} status: {}", chunk_id, status);
    }
    state.overlay.add_message(OverlayMessage::notice(Colour::Cyan, format!("Total Chunks To Download: {}", chunk_ids.len())));

    let download_state = self.inner.clone();
    state.spawn(&runtime, async move {
      let success = download_state.downloader.download_chunks(&chunk_ids, download_state.config.download_priority).await;
      download_state.on_download_complete(success, chunk_ids);
    });

    let loading_state = self.inner.clone();
    state.spawn(&runtime, async move {
      let success = loading_state.downloader.begin_loading_mode().await;
      loading_state.on_loading_mode_complete(success);
    });
    Ok(())
  }

  /// Shows the name of every world asset in the catalog.
  pub fn print_asset_registry_maps(&self) {
    for name in self.inner.world_asset_names() {
      self.inner.overlay.add_message(OverlayMessage::notice(Colour::White, name));
    }
  }

  pub fn set_chunk_download_list(&self, chunk_ids: Vec<i32>) -> Result<(), Error> {
    *self.inner.chunk_download_list.lock()? = chunk_ids;
    Ok(())
  }

  pub fn chunk_download_list(&self) -> Result<Vec<i32>, Error> {
    Ok(self.inner.chunk_download_list.lock()?.clone())
  }

  pub fn is_manifest_up_to_date(&self) -> bool {
    self.inner.manifest_up_to_date.load(Ordering::SeqCst)
  }

  pub fn is_patch_complete(&self) -> bool {
    self.inner.patch_complete.load(Ordering::SeqCst)
  }

  /// Listeners added here are called with the patch result.
  pub fn on_patch_complete(&self) -> &PatchCompleteDelegate {
    &self.inner.on_patch_complete
  }

  pub fn config(&self) -> &PatcherConfig {
    &self.inner.config
  }
}

impl PatcherState {
  /// Spawns a continuation and tracks it, so `settle` always waits for it.
  fn spawn<F>(&self, runtime: &Handle, future: F)
  where
    F: Future<Output = ()> + Send + 'static,
  {
    let join_handle = runtime.spawn(future);
    self.lock_tasks().push(join_handle);
  }

  /// A panicking continuation can't leave a half-written list behind, so poisoning is ignored.
  fn lock_tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
    self.tasks.lock().unwrap_or_else(|poisoned| {
      warn!("Task tracker mutex was poisoned, recovering");
      poisoned.into_inner()
    })
  }

  fn on_manifest_update_complete(&self, success: bool) {
    self.manifest_up_to_date.store(success, Ordering::SeqCst);
    if success {
      self.overlay.add_message(OverlayMessage::notice(Colour::White, "Download manifest up to date."));
    } else {
      error!("Updating the build manifest for {} failed", &self.config.deployment.name);
      self.overlay.add_message(OverlayMessage::notice(Colour::White, "Download manifest update failed."));
    }
  }

  fn on_download_complete(self: &Arc<Self>, success: bool, chunk_ids: Vec<i32>) {
    if !success {
      info!("Load process failed");
      self.on_patch_complete.broadcast(false);
      return;
    }

    info!("Download complete");
    self.overlay.add_message(OverlayMessage::notice(Colour::Green, "Download complete"));

    let mount_state = self.clone();
    self.spawn(&Handle::current(), async move {
      let success = mount_state.downloader.mount_chunks(&chunk_ids).await;
      mount_state.on_mount_complete(success);
    });

    if self.config.broadcast_policy == BroadcastPolicy::DownloadAndMount {
      self.on_patch_complete.broadcast(true);
    }
  }

  fn on_loading_mode_complete(&self, success: bool) {
    if success {
      info!("Loading mode complete");
    } else {
      error!("Loading mode failed");
    }
  }

  fn on_mount_complete(&self, success: bool) {
    if success {
      self.overlay.add_message(OverlayMessage::notice(Colour::Green, "Mount complete"));
    } else {
      error!("Mounting chunks failed");
    }
    self.on_patch_complete.broadcast(success);
  }

  fn patch_complete_callback(&self, success: bool) {
    self.patch_complete.store(true, Ordering::SeqCst);
    if success {
      self.overlay.add_message(OverlayMessage::notice(Colour::Green, "Patch complete"));
    }

    for name in self.world_asset_names() {
      info!("{}", &name);
      self.overlay.add_message(OverlayMessage::notice(Colour::White, name));
    }
  }

  fn world_asset_names(&self) -> Vec<String> {
    match &self.catalog {
      Some(catalog) => catalog.assets_by_class(WORLD_CLASS).into_iter().map(|asset| asset.asset_name).collect(),
      None => Vec::new(),
    }
  }
}
