use crate::fifo_backing::FifoBacking;

#[cfg(test)]
mod tests;

/// One descriptor or data FIFO region attached to a pipe.
///
/// `base` is the CPU-visible token for the region and `phys` the bus address
/// the hardware queues against; both are opaque to the core, which only
/// routes them between allocator, transport, and caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FifoBuffer {
  base:    u64,
  phys:    u64,
  size:    u32,
  backing: FifoBacking,
}

impl FifoBuffer {
  /// Describes a buffer owned by the connecting driver.
  #[must_use]
  pub const fn caller_supplied(base: u64, phys: u64, size: u32) -> Self {
    Self { base, phys, size, backing: FifoBacking::CallerSupplied }
  }

  /// Describes a buffer the core allocated from DMA-coherent memory.
  #[must_use]
  pub const fn driver_dma(base: u64, phys: u64, size: u32) -> Self {
    Self { base, phys, size, backing: FifoBacking::DriverDma }
  }

  /// Describes a buffer the core carved out of pipe-local memory.
  #[must_use]
  pub const fn pipe_mem(base: u64, phys: u64, size: u32, offset: u32) -> Self {
    Self { base, phys, size, backing: FifoBacking::PipeMem { offset } }
  }

  /// CPU-visible base token.
  #[must_use]
  pub const fn base(self) -> u64 {
    self.base
  }

  /// Bus address handed to the hardware.
  #[must_use]
  pub const fn phys(self) -> u64 {
    self.phys
  }

  /// Region size in bytes.
  #[must_use]
  pub const fn size(self) -> u32 {
    self.size
  }

  /// Ownership and origin of the region.
  #[must_use]
  pub const fn backing(self) -> FifoBacking {
    self.backing
  }

  /// `true` when the core must not free this buffer.
  #[must_use]
  pub const fn is_caller_supplied(self) -> bool {
    matches!(self.backing, FifoBacking::CallerSupplied)
  }
}
