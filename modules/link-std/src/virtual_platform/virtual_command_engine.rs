use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use pipelink_core_rs::hal::{CommandEngine, HalError};
use pipelink_core_rs::TagHandle;

use super::locked;

/// In-memory immediate-command path recording every tag issued.
///
/// The engine never acks by itself; tests deliver acks through
/// [`pipelink_core_rs::LinkContext::complete_tag`], usually from a helper
/// thread watching [`VirtualCommandEngine::sent`].
#[derive(Default)]
pub struct VirtualCommandEngine {
  sent:   Mutex<Vec<TagHandle>>,
  reject: AtomicBool,
}

impl VirtualCommandEngine {
  /// Creates an engine with an empty stream.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every subsequent tag command fail to issue.
  pub fn reject(&self) {
    self.reject.store(true, Ordering::SeqCst);
  }

  /// Every tag issued so far, in order.
  #[must_use]
  pub fn sent(&self) -> Vec<TagHandle> {
    locked(&self.sent).clone()
  }

  /// Number of tags issued so far.
  #[must_use]
  pub fn sent_count(&self) -> usize {
    locked(&self.sent).len()
  }
}

impl CommandEngine for VirtualCommandEngine {
  fn send_packet_tag(&self, tag: TagHandle) -> Result<(), HalError> {
    if self.reject.load(Ordering::SeqCst) {
      return Err(HalError::Rejected);
    }
    locked(&self.sent).push(tag);
    Ok(())
  }
}
