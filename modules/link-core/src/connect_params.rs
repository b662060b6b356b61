use alloc::sync::Arc;

use crate::bam_handle::BamHandle;
use crate::client_kind::ClientKind;
use crate::endpoint_config::EndpointConfig;
use crate::endpoint_notify::EndpointNotify;
use crate::fifo_buffer::FifoBuffer;

/// Inputs a peripheral driver supplies when connecting one pipe.
///
/// FIFO sizes are mandatory and must be nonzero. Buffers are optional:
/// when absent the core allocates them (pipe-local memory first if
/// preferred, DMA memory otherwise), when present the core adopts them
/// without ever taking ownership.
#[derive(Clone)]
pub struct ConnectParams {
  pub(crate) client:             ClientKind,
  pub(crate) peer_bam:           BamHandle,
  pub(crate) peer_pipe_index:    u32,
  pub(crate) desc_fifo_size:     u32,
  pub(crate) data_fifo_size:     u32,
  pub(crate) config:             EndpointConfig,
  pub(crate) desc:               Option<FifoBuffer>,
  pub(crate) data:               Option<FifoBuffer>,
  pub(crate) pipe_mem_preferred: bool,
  pub(crate) notify:             Option<Arc<dyn EndpointNotify>>,
  pub(crate) notify_context:     u64,
}

impl ConnectParams {
  /// Starts a parameter set for `client` connecting to the peer block
  /// `peer_bam` through the peer's pipe `peer_pipe_index`.
  #[must_use]
  pub fn new(client: ClientKind, peer_bam: BamHandle, peer_pipe_index: u32) -> Self {
    Self {
      client,
      peer_bam,
      peer_pipe_index,
      desc_fifo_size: 0,
      data_fifo_size: 0,
      config: EndpointConfig::default(),
      desc: None,
      data: None,
      pipe_mem_preferred: false,
      notify: None,
      notify_context: 0,
    }
  }

  /// Sets the descriptor and data FIFO sizes in bytes. Both must be nonzero.
  #[must_use]
  pub const fn with_fifo_sizes(mut self, desc_fifo_size: u32, data_fifo_size: u32) -> Self {
    self.desc_fifo_size = desc_fifo_size;
    self.data_fifo_size = data_fifo_size;
    self
  }

  /// Sets the per-pipe hardware configuration.
  #[must_use]
  pub const fn with_config(mut self, config: EndpointConfig) -> Self {
    self.config = config;
    self
  }

  /// Adopts a caller-allocated descriptor FIFO; the core will never free it.
  #[must_use]
  pub const fn with_desc_buffer(mut self, base: u64, phys: u64, size: u32) -> Self {
    self.desc = Some(FifoBuffer::caller_supplied(base, phys, size));
    self.desc_fifo_size = size;
    self
  }

  /// Adopts a caller-allocated data FIFO; the core will never free it.
  #[must_use]
  pub const fn with_data_buffer(mut self, base: u64, phys: u64, size: u32) -> Self {
    self.data = Some(FifoBuffer::caller_supplied(base, phys, size));
    self.data_fifo_size = size;
    self
  }

  /// Prefers pipe-local memory over DMA memory for core-allocated FIFOs.
  #[must_use]
  pub const fn prefer_pipe_mem(mut self) -> Self {
    self.pipe_mem_preferred = true;
    self
  }

  /// Registers the notify callback and the opaque context echoed with every
  /// event.
  #[must_use]
  pub fn with_notify(mut self, notify: Arc<dyn EndpointNotify>, context: u64) -> Self {
    self.notify = Some(notify);
    self.notify_context = context;
    self
  }

  /// The logical client these parameters connect.
  #[must_use]
  pub const fn client(&self) -> ClientKind {
    self.client
  }
}
