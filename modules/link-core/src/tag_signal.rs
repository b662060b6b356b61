use core::time::Duration;

/// Completion primitive correlating one tag command with its hardware ack.
///
/// One clone sits in the tag table for the ack path to fire; the issuing
/// call blocks on another. How blocking is realised is up to the
/// [`crate::LinkRuntime`] that manufactured the signal.
pub trait TagSignal: Clone + Send + Sync + 'static {
  /// Wakes every waiter. Idempotent; later calls have no effect.
  fn complete(&self);

  /// Blocks the calling context until [`TagSignal::complete`] fires or
  /// `timeout` elapses. Returns `false` on timeout.
  fn wait_timeout(&self, timeout: Duration) -> bool;
}
