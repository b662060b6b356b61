use std::sync::Mutex;

use hashbrown::HashMap;
use pipelink_core_rs::hal::{DmaRegion, PipeMemPool};

use super::locked;

const BASE_TOKEN: u64 = 0x4000_0000;
const PHYS_BASE: u64 = 0xF900_0000;

/// In-memory pipe-local pool. Bump-allocated; capacity is never reclaimed,
/// which is enough to model exhaustion and leak tracking in tests.
pub struct VirtualPipeMemPool {
  state: Mutex<PoolState>,
}

struct PoolState {
  capacity: u32,
  cursor:   u32,
  live:     HashMap<u32, u32>,
}

impl VirtualPipeMemPool {
  /// Creates a pool holding `capacity` bytes.
  #[must_use]
  pub fn new(capacity: u32) -> Self {
    Self { state: Mutex::new(PoolState { capacity, cursor: 0, live: HashMap::new() }) }
  }

  /// Number of reservations handed out and not yet freed.
  #[must_use]
  pub fn outstanding(&self) -> usize {
    locked(&self.state).live.len()
  }
}

impl PipeMemPool for VirtualPipeMemPool {
  fn alloc(&self, size: u32) -> Option<u32> {
    let mut state = locked(&self.state);
    let offset = state.cursor;
    if offset.checked_add(size)? > state.capacity {
      return None;
    }
    state.cursor += size;
    state.live.insert(offset, size);
    Some(offset)
  }

  fn free(&self, offset: u32, _size: u32) {
    locked(&self.state).live.remove(&offset);
  }

  fn region_at(&self, offset: u32, _size: u32) -> DmaRegion {
    DmaRegion { base: BASE_TOKEN + u64::from(offset), phys: PHYS_BASE + u64::from(offset) }
  }
}
