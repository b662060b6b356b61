use alloc::sync::Arc;

use crate::hal::{ClockGate, CommandEngine, DmaAllocator, PipeMemPool, PipeRegisters, Transport};

/// Bundle of platform collaborators injected into a [`crate::LinkContext`].
#[derive(Clone)]
pub struct LinkHal {
  /// Pipe register file.
  pub registers: Arc<dyn PipeRegisters>,
  /// DMA-coherent allocator for FIFO memory.
  pub dma:       Arc<dyn DmaAllocator>,
  /// Pipe-local memory pool.
  pub pipe_mem:  Arc<dyn PipeMemPool>,
  /// Transport connect/disconnect surface.
  pub transport: Arc<dyn Transport>,
  /// Immediate-command path used for tag round-trips.
  pub commands:  Arc<dyn CommandEngine>,
  /// Shared clock gate.
  pub clocks:    Arc<dyn ClockGate>,
}
