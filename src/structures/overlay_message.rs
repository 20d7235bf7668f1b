use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
  White,
  Cyan,
  Green,
}

/// A line of text shown on the debug overlay for `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayMessage {
  pub duration: Duration,
  pub colour: Colour,
  pub text: String,
}
