use crate::structures::OverlayMessage;

/// Sink for on-screen debug messages.
pub trait DebugOverlay: Send + Sync {
  fn add_message(&self, message: OverlayMessage);
}
