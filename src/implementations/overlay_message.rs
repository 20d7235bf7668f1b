use std::time::Duration;

use crate::structures::{Colour, OverlayMessage};

/// How long status notices stay on screen.
pub(crate) const NOTICE_DURATION : Duration = Duration::from_secs(12);

impl OverlayMessage {
  pub fn new(duration: Duration, colour: Colour, text: impl Into<String>) -> Self {
    Self {
      duration,
      colour,
      text: text.into(),
    }
  }

  pub(crate) fn notice(colour: Colour, text: impl Into<String>) -> Self {
    Self::new(NOTICE_DURATION, colour, text)
  }

  /// A single-frame line, redrawn every time progress is queried.
  pub(crate) fn frame(text: impl Into<String>) -> Self {
    Self::new(Duration::ZERO, Colour::Cyan, text)
  }
}
