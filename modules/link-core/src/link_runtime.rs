use core::time::Duration;

use crate::tag_signal::TagSignal;

/// Blocking services the host environment injects into the core.
///
/// The core itself is `no_std`; anything that must park the calling context
/// (waiting out a tag ack, letting aggregated data flush) goes through this
/// trait, one implementation per runtime.
pub trait LinkRuntime: Send + Sync {
  /// Completion primitive used for tag round-trips.
  type Signal: TagSignal;

  /// Creates a fresh, unfired signal.
  fn signal(&self) -> Self::Signal;

  /// Parks the calling context for `duration`.
  fn sleep(&self, duration: Duration);
}
