use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use hashbrown::HashMap;
use pipelink_core_rs::hal::{DmaAllocator, DmaRegion};

use super::locked;

const BASE_TOKEN: u64 = 0x1000_0000;
const PHYS_OFFSET: u64 = 0x10_0000_0000;

/// In-memory DMA-coherent allocator with exhaustion injection.
pub struct VirtualDmaAllocator {
  next:             AtomicU64,
  allocations:      AtomicUsize,
  fail_after:       AtomicUsize,
  live:             Mutex<HashMap<u64, u32>>,
  unbalanced_frees: AtomicUsize,
}

impl VirtualDmaAllocator {
  /// Creates an allocator with unlimited memory.
  #[must_use]
  pub fn new() -> Self {
    Self {
      next: AtomicU64::new(0),
      allocations: AtomicUsize::new(0),
      fail_after: AtomicUsize::new(usize::MAX),
      live: Mutex::new(HashMap::new()),
      unbalanced_frees: AtomicUsize::new(0),
    }
  }

  /// Lets `count` further allocations succeed, then fails all of them.
  pub fn fail_after(&self, count: usize) {
    let done = self.allocations.load(Ordering::SeqCst);
    self.fail_after.store(done.saturating_add(count), Ordering::SeqCst);
  }

  /// Number of regions handed out and not yet freed.
  #[must_use]
  pub fn outstanding(&self) -> usize {
    locked(&self.live).len()
  }

  /// Number of frees that did not match a live region.
  #[must_use]
  pub fn unbalanced_frees(&self) -> usize {
    self.unbalanced_frees.load(Ordering::SeqCst)
  }
}

impl Default for VirtualDmaAllocator {
  fn default() -> Self {
    Self::new()
  }
}

impl DmaAllocator for VirtualDmaAllocator {
  fn alloc(&self, size: u32) -> Option<DmaRegion> {
    if self.allocations.fetch_add(1, Ordering::SeqCst) >= self.fail_after.load(Ordering::SeqCst) {
      return None;
    }
    let slot = self.next.fetch_add(1, Ordering::SeqCst);
    let base = BASE_TOKEN + slot * 0x1_0000;
    locked(&self.live).insert(base, size);
    Some(DmaRegion { base, phys: base + PHYS_OFFSET })
  }

  fn free(&self, region: DmaRegion, size: u32) {
    let mut live = locked(&self.live);
    match live.remove(&region.base) {
      Some(recorded) if recorded == size => {}
      _ => {
        self.unbalanced_frees.fetch_add(1, Ordering::SeqCst);
      }
    }
  }
}
