use std::sync::atomic::{AtomicUsize, Ordering};

use pipelink_core_rs::hal::ClockGate;

/// In-memory clock gate counting enable/disable transitions.
#[derive(Default)]
pub struct VirtualClockGate {
  enables:  AtomicUsize,
  disables: AtomicUsize,
}

impl VirtualClockGate {
  /// Creates a gate with the clocks off.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of enable transitions seen.
  #[must_use]
  pub fn enables(&self) -> usize {
    self.enables.load(Ordering::SeqCst)
  }

  /// Number of disable transitions seen.
  #[must_use]
  pub fn disables(&self) -> usize {
    self.disables.load(Ordering::SeqCst)
  }

  /// Whether the clocks are currently on.
  #[must_use]
  pub fn is_on(&self) -> bool {
    self.enables() > self.disables()
  }
}

impl ClockGate for VirtualClockGate {
  fn enable(&self) {
    self.enables.fetch_add(1, Ordering::SeqCst);
  }

  fn disable(&self) {
    self.disables.fetch_add(1, Ordering::SeqCst);
  }
}
