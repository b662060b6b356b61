/// Ownership and origin of a FIFO buffer.
///
/// Only the driver-owned variants are ever freed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FifoBacking {
  /// Handed in by the connecting driver; the core never frees it.
  #[default]
  CallerSupplied,
  /// Allocated by the core from DMA-coherent memory.
  DriverDma,
  /// Carved by the core out of pipe-local memory at the given byte offset.
  PipeMem {
    /// Byte offset of the reservation inside the pool.
    offset: u32,
  },
}
