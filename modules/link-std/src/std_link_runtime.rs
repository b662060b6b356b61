use std::time::Duration;

use pipelink_core_rs::LinkRuntime;

use crate::condvar_tag_signal::CondvarTagSignal;

/// Blocking services backed by the standard library.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLinkRuntime;

impl StdLinkRuntime {
  /// Creates the runtime.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl LinkRuntime for StdLinkRuntime {
  type Signal = CondvarTagSignal;

  fn signal(&self) -> CondvarTagSignal {
    CondvarTagSignal::new()
  }

  fn sleep(&self, duration: Duration) {
    std::thread::sleep(duration);
  }
}
