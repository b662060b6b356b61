use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pipelink_core_rs::LinkContext;
use pipelink_std_rs::virtual_platform::VirtualCommandEngine;
use pipelink_std_rs::StdLinkRuntime;

/// Background thread acknowledging every tag the command engine emits,
/// standing in for the hardware interrupt path.
pub struct TagAcker {
  stop:   Arc<AtomicBool>,
  worker: JoinHandle<usize>,
}

impl TagAcker {
  pub fn spawn(context: Arc<LinkContext<StdLinkRuntime>>, commands: Arc<VirtualCommandEngine>) -> Self {
    let stop = Arc::new(AtomicBool::new(false));
    let worker = thread::spawn({
      let stop = stop.clone();
      move || {
        let mut seen = HashSet::new();
        let mut acked = 0;
        while !stop.load(Ordering::SeqCst) {
          for tag in commands.sent() {
            if seen.insert(tag) && context.complete_tag(tag) {
              acked += 1;
            }
          }
          thread::sleep(Duration::from_millis(1));
        }
        acked
      }
    });
    Self { stop, worker }
  }

  /// Stops the thread and returns how many tags it acknowledged.
  pub fn finish(self) -> usize {
    self.stop.store(true, Ordering::SeqCst);
    self.worker.join().unwrap_or(0)
  }
}
