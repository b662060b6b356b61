use crate::hal::dma_allocator::DmaRegion;

/// Pipe-local memory pool, addressed by byte offset.
///
/// Pipe-local memory sits next to the hardware block and avoids bus traffic
/// for FIFO accesses; clients may prefer it over general DMA memory.
pub trait PipeMemPool: Send + Sync {
  /// Reserves `size` bytes, returning the pool offset, or `None` when the
  /// pool is full.
  fn alloc(&self, size: u32) -> Option<u32>;

  /// Releases a reservation made by [`PipeMemPool::alloc`].
  fn free(&self, offset: u32, size: u32);

  /// Describes the window at `offset` so it can be queued against.
  fn region_at(&self, offset: u32, size: u32) -> DmaRegion;
}
