use std::sync::{Arc, Mutex};

use tracing::trace;

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Multicast "patch complete" signal, carries whether the patch succeeded.
#[derive(Default)]
pub struct PatchCompleteDelegate {
  listeners: Mutex<Vec<Listener>>,
}

impl PatchCompleteDelegate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&self, listener: impl Fn(bool) + Send + Sync + 'static) {
    match self.listeners.lock() {
      Ok(mut listeners) => listeners.push(Arc::new(listener)),
      Err(poisoned) => poisoned.into_inner().push(Arc::new(listener)),
    }
  }

  pub fn len(&self) -> usize {
    match self.listeners.lock() {
      Ok(listeners) => listeners.len(),
      Err(poisoned) => poisoned.into_inner().len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /**
  Calls every listener in registration order.

  Listeners may add listeners or broadcast again; those added during a broadcast are first
  called on the next one.
  */
  pub fn broadcast(&self, success: bool) {
    trace!("Broadcasting patch complete: {}", success);
    let listeners : Vec<Listener> = match self.listeners.lock() {
      Ok(listeners) => listeners.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    };
    for listener in listeners.iter() {
      listener(success);
    }
  }
}

impl std::fmt::Debug for PatchCompleteDelegate {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_struct("PatchCompleteDelegate").field("listeners", &self.len()).finish()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::Mutex;

  use super::PatchCompleteDelegate;

  #[test]
  fn broadcasts_to_every_listener_in_order() {
    let delegate = PatchCompleteDelegate::new();
    let received = Arc::new(Mutex::new(Vec::new()));
    for id in 0..3 {
      let received = received.clone();
      delegate.add(move |success| received.lock().unwrap().push((id, success)));
    }
    assert_eq!(delegate.len(), 3);
    delegate.broadcast(false);
    assert_eq!(*received.lock().unwrap(), vec![(0, false), (1, false), (2, false)]);
  }

  #[test]
  fn listener_can_add_listeners_during_broadcast() {
    let delegate = Arc::new(PatchCompleteDelegate::new());
    let late_calls = Arc::new(Mutex::new(Vec::new()));
    let (inner, calls) = (delegate.clone(), late_calls.clone());
    delegate.add(move |_| {
      let calls = calls.clone();
      inner.add(move |success| calls.lock().unwrap().push(success));
      assert!(!inner.is_empty());
    });

    let (sender, receiver) = std::sync::mpsc::channel();
    let broadcaster = delegate.clone();
    std::thread::spawn(move || {
      broadcaster.broadcast(true);
      let _ = sender.send(());
    });
    assert!(receiver.recv_timeout(std::time::Duration::from_secs(3)).is_ok());
    assert_eq!(delegate.len(), 2);
    assert!(late_calls.lock().unwrap().is_empty());

    delegate.broadcast(false);
    assert_eq!(delegate.len(), 3);
    assert_eq!(*late_calls.lock().unwrap(), vec![false]);
  }

  #[test]
  fn broadcast_without_listeners_is_noop() {
    let delegate = PatchCompleteDelegate::new();
    assert!(delegate.is_empty());
    delegate.broadcast(true);
  }
}
