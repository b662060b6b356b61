use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use pipelink_core_rs::TagSignal;

#[cfg(test)]
mod tests;

/// Condition-variable completion used for tag round-trips.
///
/// Clones share one flag: the ack path fires it through
/// [`TagSignal::complete`], the quiesce call blocks on
/// [`TagSignal::wait_timeout`] against an absolute deadline so spurious
/// wakeups cannot stretch the bound.
#[derive(Clone)]
pub struct CondvarTagSignal {
  inner: Arc<SignalInner>,
}

struct SignalInner {
  fired: Mutex<bool>,
  cond:  Condvar,
}

impl CondvarTagSignal {
  /// Creates an unfired signal.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(SignalInner { fired: Mutex::new(false), cond: Condvar::new() }) }
  }
}

impl Default for CondvarTagSignal {
  fn default() -> Self {
    Self::new()
  }
}

impl TagSignal for CondvarTagSignal {
  fn complete(&self) {
    let mut fired = self.inner.fired.lock().unwrap_or_else(PoisonError::into_inner);
    *fired = true;
    self.inner.cond.notify_all();
  }

  fn wait_timeout(&self, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    let mut fired = self.inner.fired.lock().unwrap_or_else(PoisonError::into_inner);
    while !*fired {
      let now = Instant::now();
      if now >= deadline {
        return false;
      }
      let (guard, _) = self
        .inner
        .cond
        .wait_timeout(fired, deadline - now)
        .unwrap_or_else(PoisonError::into_inner);
      fired = guard;
    }
    true
  }
}
