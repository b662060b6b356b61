use std::sync::Arc;

use pipelink_core_rs::{LinkConfig, LinkContext, LinkHal};

use super::virtual_clock_gate::VirtualClockGate;
use super::virtual_command_engine::VirtualCommandEngine;
use super::virtual_dma_allocator::VirtualDmaAllocator;
use super::virtual_pipe_mem_pool::VirtualPipeMemPool;
use super::virtual_pipe_registers::VirtualPipeRegisters;
use super::virtual_transport::VirtualTransport;

const DEFAULT_PIPE_MEM_CAPACITY: u32 = 32 * 1024;

/// One complete in-memory platform.
///
/// Collaborators stay reachable for inspection and fault injection while a
/// [`LinkContext`] built by [`VirtualPlatform::context`] drives them.
pub struct VirtualPlatform {
  /// Register file.
  pub registers: Arc<VirtualPipeRegisters>,
  /// DMA-coherent allocator.
  pub dma:       Arc<VirtualDmaAllocator>,
  /// Pipe-local memory pool.
  pub pipe_mem:  Arc<VirtualPipeMemPool>,
  /// Transport surface.
  pub transport: Arc<VirtualTransport>,
  /// Immediate-command path.
  pub commands:  Arc<VirtualCommandEngine>,
  /// Clock gate.
  pub clocks:    Arc<VirtualClockGate>,
}

impl VirtualPlatform {
  /// Creates a platform with the default pipe-memory capacity.
  #[must_use]
  pub fn new() -> Self {
    Self::with_pipe_mem_capacity(DEFAULT_PIPE_MEM_CAPACITY)
  }

  /// Creates a platform whose pipe-local pool holds `capacity` bytes.
  #[must_use]
  pub fn with_pipe_mem_capacity(capacity: u32) -> Self {
    Self {
      registers: Arc::new(VirtualPipeRegisters::new()),
      dma:       Arc::new(VirtualDmaAllocator::new()),
      pipe_mem:  Arc::new(VirtualPipeMemPool::new(capacity)),
      transport: Arc::new(VirtualTransport::new()),
      commands:  Arc::new(VirtualCommandEngine::new()),
      clocks:    Arc::new(VirtualClockGate::new()),
    }
  }

  /// The HAL bundle pointing at this platform's collaborators.
  #[must_use]
  pub fn hal(&self) -> LinkHal {
    LinkHal {
      registers: self.registers.clone(),
      dma:       self.dma.clone(),
      pipe_mem:  self.pipe_mem.clone(),
      transport: self.transport.clone(),
      commands:  self.commands.clone(),
      clocks:    self.clocks.clone(),
    }
  }

  /// Builds a context driving this platform with the std runtime.
  #[must_use]
  pub fn context(&self, config: LinkConfig) -> LinkContext<crate::StdLinkRuntime> {
    LinkContext::new(crate::StdLinkRuntime::new(), config, self.hal())
  }
}

impl Default for VirtualPlatform {
  fn default() -> Self {
    Self::new()
  }
}
