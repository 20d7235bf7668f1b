use std::sync::Mutex;

use tracing::{debug, info};

use crate::structures::{Colour, OverlayMessage};
use crate::traits::DebugOverlay;

/// Writes overlay messages to the tracing subscriber instead of a screen.
#[derive(Debug, Default)]
pub struct TracingOverlay;

impl DebugOverlay for TracingOverlay {
  fn add_message(&self, message: OverlayMessage) {
    // single-frame lines are redrawn on every progress query
    if message.duration.is_zero() {
      debug!(colour = ?message.colour, "{}", message.text);
    } else {
      info!(colour = ?message.colour, duration = ?message.duration, "{}", message.text);
    }
  }
}

/// Keeps every overlay message, newest last.
#[derive(Debug, Default)]
pub struct MessageLog {
  messages: Mutex<Vec<OverlayMessage>>,
}

impl MessageLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn messages(&self) -> Vec<OverlayMessage> {
    match self.messages.lock() {
      Ok(messages) => messages.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  pub fn texts(&self) -> Vec<String> {
    self.messages().into_iter().map(|message| message.text).collect()
  }

  pub fn contains(&self, text: &str) -> bool {
    self.messages().iter().any(|message| message.text == text)
  }

  pub fn count_of(&self, colour: Colour, text: &str) -> usize {
    self.messages().iter().filter(|message| message.colour == colour && message.text == text).count()
  }

  /// All messages joined into one newline separated string.
  pub fn get_logs(&self) -> String {
    self.texts().join("\n")
  }
}

impl DebugOverlay for MessageLog {
  fn add_message(&self, message: OverlayMessage) {
    match self.messages.lock() {
      Ok(mut messages) => messages.push(message),
      Err(poisoned) => poisoned.into_inner().push(message),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::MessageLog;
  use crate::structures::{Colour, OverlayMessage};
  use crate::traits::DebugOverlay;

  #[test]
  fn message_log_keeps_order() {
    let log = MessageLog::new();
    log.add_message(OverlayMessage::new(Duration::from_secs(12), Colour::Green, "Download complete"));
    log.add_message(OverlayMessage::new(Duration::ZERO, Colour::Cyan, "ChunksMounted: 1"));
    assert_eq!(log.texts(), vec!["Download complete", "ChunksMounted: 1"]);
    assert_eq!(log.get_logs(), "Download complete\nChunksMounted: 1");
    assert_eq!(log.count_of(Colour::Green, "Download complete"), 1);
    assert_eq!(log.count_of(Colour::Cyan, "Download complete"), 0);
  }
}
