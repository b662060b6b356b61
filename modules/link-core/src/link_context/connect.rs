use super::LinkContext;
use crate::connect_outcome::ConnectOutcome;
use crate::connect_params::ConnectParams;
use crate::fifo_buffer::FifoBuffer;
use crate::hal::PipeRegister;
use crate::link_error::LinkError;
use crate::link_runtime::LinkRuntime;
use crate::transport_mode::TransportMode;

impl<R> LinkContext<R>
where
  R: LinkRuntime,
{
  /// Connects one logical client to its fixed pipe in BAM-to-BAM mode.
  ///
  /// Walks the acquire chain in order (clock gate, registry slot, endpoint
  /// configuration, transport endpoint and direction, descriptor FIFO, data
  /// FIFO, transport finalise, head-of-line tuning) and on failure unwinds
  /// exactly the resources acquired so far, in reverse order. A failed
  /// connect never leaves a slot valid and never leaves the clock gate
  /// unbalanced.
  ///
  /// # Errors
  /// [`LinkError::InvalidArgument`] for a zero FIFO size,
  /// [`LinkError::ResourceExhausted`] when the client has no pipe mapping,
  /// the pipe is already bound, or FIFO memory ran out, and
  /// [`LinkError::OperationFailed`] when the hardware rejects a step.
  pub fn connect(&self, params: &ConnectParams) -> Result<ConnectOutcome, LinkError> {
    self.clients_up();
    let outcome = self.drive_connect(params);
    if outcome.is_err() {
      self.clients_down();
    }
    outcome
  }

  fn drive_connect(&self, params: &ConnectParams) -> Result<ConnectOutcome, LinkError> {
    if params.desc_fifo_size == 0 || params.data_fifo_size == 0 {
      log::error!("rejecting connect for {:?}: zero FIFO size", params.client);
      return Err(LinkError::InvalidArgument);
    }

    let handle = {
      let mut registry = self.registry.lock();
      let handle = match registry.acquire(self.config.operation, params.client) {
        Ok(handle) => handle,
        Err(err) => {
          log::error!("cannot bind {:?}: {err}", params.client);
          return Err(LinkError::ResourceExhausted);
        }
      };
      if let Some(slot) = registry.get_mut(handle) {
        slot.config = params.config;
        slot.notify = params.notify.clone();
        slot.notify_context = params.notify_context;
      }
      handle
    };

    if self.hal.registers.configure(handle.index(), &params.config).is_err() {
      log::error!("{handle}: endpoint configuration rejected");
      self.release_slot(handle);
      return Err(LinkError::OperationFailed);
    }

    let endpoint = match self.hal.transport.alloc_endpoint() {
      Ok(endpoint) => endpoint,
      Err(err) => {
        log::error!("{handle}: endpoint allocation failed: {err}");
        self.release_slot(handle);
        return Err(LinkError::OperationFailed);
      }
    };

    let mut transport = match self.hal.transport.default_config(endpoint) {
      Ok(config) => config,
      Err(err) => {
        log::error!("{handle}: cannot read default transport config: {err}");
        let _ = self.hal.transport.free_endpoint(endpoint);
        self.release_slot(handle);
        return Err(LinkError::OperationFailed);
      }
    };

    if params.client.is_consumer() {
      transport.mode = TransportMode::Source;
      transport.source = self.config.bam;
      transport.source_pipe = handle.index();
      transport.destination = params.peer_bam;
      transport.destination_pipe = params.peer_pipe_index;
    } else {
      transport.mode = TransportMode::Destination;
      transport.source = params.peer_bam;
      transport.source_pipe = params.peer_pipe_index;
      transport.destination = self.config.bam;
      transport.destination_pipe = handle.index();
    }

    let desc = match params.desc {
      Some(buffer) => {
        log::debug!("{handle}: adopting caller-allocated descriptor FIFO");
        buffer
      }
      None => match self.allocate_fifo(params.desc_fifo_size, params.pipe_mem_preferred) {
        Some(buffer) => buffer,
        None => {
          log::error!("{handle}: descriptor FIFO allocation failed");
          let _ = self.hal.transport.free_endpoint(endpoint);
          self.release_slot(handle);
          return Err(LinkError::ResourceExhausted);
        }
      },
    };
    log::debug!("{handle}: descriptor FIFO phys={:#x} size={}", desc.phys(), desc.size());

    let data = match params.data {
      Some(buffer) => {
        log::debug!("{handle}: adopting caller-allocated data FIFO");
        buffer
      }
      None => match self.allocate_fifo(params.data_fifo_size, params.pipe_mem_preferred) {
        Some(buffer) => buffer,
        None => {
          log::error!("{handle}: data FIFO allocation failed");
          self.free_fifo(&desc);
          let _ = self.hal.transport.free_endpoint(endpoint);
          self.release_slot(handle);
          return Err(LinkError::ResourceExhausted);
        }
      },
    };
    log::debug!("{handle}: data FIFO phys={:#x} size={}", data.phys(), data.size());

    transport.desc = desc;
    transport.data = data;
    transport.event_threshold = self.config.event_threshold;
    // BAM-to-BAM pipes run without host arming
    transport.auto_enable = true;

    if self.hal.transport.connect(endpoint, &transport).is_err() {
      log::error!("{handle}: transport connect failed");
      self.free_fifo(&data);
      self.free_fifo(&desc);
      let _ = self.hal.transport.free_endpoint(endpoint);
      self.release_slot(handle);
      return Err(LinkError::OperationFailed);
    }

    {
      let mut registry = self.registry.lock();
      if let Some(slot) = registry.get_mut(handle) {
        slot.endpoint = Some(endpoint);
        slot.desc = Some(desc);
        slot.data = Some(data);
        slot.suspended = false;
      }
    }

    if params.client.wants_holb_disable() {
      log::debug!("{handle}: disabling head-of-line blocking, timer={:#x}", self.config.holb_timer);
      self.hal.registers.write(PipeRegister::HolBlockEnable, handle.index(), 1);
      self.hal.registers.write(PipeRegister::HolBlockTimer, handle.index(), self.config.holb_timer);
    }

    log::debug!("{handle}: connected as {:?}", params.client);
    Ok(ConnectOutcome { handle, bam: self.config.bam, pipe_index: handle.index(), desc, data })
  }

  fn allocate_fifo(&self, size: u32, pipe_mem_preferred: bool) -> Option<FifoBuffer> {
    if pipe_mem_preferred {
      if let Some(offset) = self.hal.pipe_mem.alloc(size) {
        let region = self.hal.pipe_mem.region_at(offset, size);
        return Some(FifoBuffer::pipe_mem(region.base, region.phys, size, offset));
      }
      log::debug!("pipe memory exhausted, falling back to DMA");
    }
    let region = self.hal.dma.alloc(size)?;
    Some(FifoBuffer::driver_dma(region.base, region.phys, size))
  }
}
