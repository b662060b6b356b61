/// One DMA-coherent memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmaRegion {
  /// CPU-visible base token.
  pub base: u64,
  /// Bus address handed to the hardware.
  pub phys: u64,
}

/// DMA-coherent allocator backing core-owned FIFO memory.
pub trait DmaAllocator: Send + Sync {
  /// Allocates `size` bytes, or `None` when memory is exhausted.
  fn alloc(&self, size: u32) -> Option<DmaRegion>;

  /// Returns a region previously handed out by [`DmaAllocator::alloc`].
  fn free(&self, region: DmaRegion, size: u32);
}
