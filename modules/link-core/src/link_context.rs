use portable_atomic::{AtomicU64, AtomicUsize, Ordering};
use spin::Mutex;

use crate::endpoint_event::EndpointEvent;
use crate::endpoint_handle::EndpointHandle;
use crate::endpoint_registry::EndpointRegistry;
use crate::fifo_backing::FifoBacking;
use crate::fifo_buffer::FifoBuffer;
use crate::hal::DmaRegion;
use crate::link_config::LinkConfig;
use crate::link_error::LinkError;
use crate::link_hal::LinkHal;
use crate::link_runtime::LinkRuntime;
use crate::tag_handle::TagHandle;
use crate::tag_signal::TagSignal;
use crate::tag_table::TagTable;

mod connect;
mod disconnect;
mod quiesce;

/// Lifecycle engine for one pipe block.
///
/// Explicitly constructed and dependency-injected: every hardware touchpoint
/// goes through the [`LinkHal`] bundle, every blocking service through the
/// [`LinkRuntime`]. Independent instances may coexist.
///
/// Different handles may be driven concurrently from independent execution
/// contexts. Operations on one handle must not overlap; serialising them is
/// the caller's responsibility. No operation may be invoked from a context
/// that cannot block.
pub struct LinkContext<R>
where
  R: LinkRuntime, {
  runtime:        R,
  config:         LinkConfig,
  hal:            LinkHal,
  active_clients: AtomicUsize,
  next_tag:       AtomicU64,
  registry:       Mutex<EndpointRegistry>,
  tags:           Mutex<TagTable<R::Signal>>,
}

impl<R> LinkContext<R>
where
  R: LinkRuntime,
{
  /// Creates an idle context. No clocks are touched until the first connect.
  #[must_use]
  pub fn new(runtime: R, config: LinkConfig, hal: LinkHal) -> Self {
    Self {
      runtime,
      config,
      hal,
      active_clients: AtomicUsize::new(0),
      next_tag: AtomicU64::new(0),
      registry: Mutex::new(EndpointRegistry::new()),
      tags: Mutex::new(TagTable::new()),
    }
  }

  /// Static configuration this context was built with.
  #[must_use]
  pub const fn config(&self) -> &LinkConfig {
    &self.config
  }

  /// Number of currently connected clients.
  #[must_use]
  pub fn active_clients(&self) -> usize {
    self.active_clients.load(Ordering::SeqCst)
  }

  /// Whether `handle` maps to a live connection.
  #[must_use]
  pub fn is_connected(&self, handle: EndpointHandle) -> bool {
    self.registry.lock().get(handle).is_some_and(|slot| slot.is_valid())
  }

  /// Whether the data path behind `handle` is currently quiesced.
  #[must_use]
  pub fn is_suspended(&self, handle: EndpointHandle) -> bool {
    self
      .registry
      .lock()
      .get(handle)
      .is_some_and(|slot| slot.is_valid() && slot.is_suspended())
  }

  /// `true` when no slot is live; the context may be torn down.
  #[must_use]
  pub fn is_drained(&self) -> bool {
    self.registry.lock().is_drained()
  }

  /// Hardware-ack ingress for tag commands.
  ///
  /// Platform bindings call this when the stream reports a tag completion.
  /// Unknown tags, such as an ack racing a wait that already timed out,
  /// are ignored and return `false`.
  pub fn complete_tag(&self, tag: TagHandle) -> bool {
    let signal = self.tags.lock().remove(tag);
    match signal {
      Some(signal) => {
        signal.complete();
        true
      }
      None => {
        log::warn!("ignoring unknown {tag}");
        false
      }
    }
  }

  /// Forwards a data-path event to the notify callback registered for
  /// `handle`, if any. The callback runs outside all internal locks.
  pub fn notify_client(&self, handle: EndpointHandle, event: EndpointEvent) {
    let target = {
      let registry = self.registry.lock();
      registry
        .get(handle)
        .filter(|slot| slot.is_valid())
        .and_then(|slot| slot.notify.clone().map(|notify| (notify, slot.notify_context)))
    };
    if let Some((notify, context)) = target {
      notify.notify(context, event);
    }
  }

  pub(crate) fn clients_up(&self) {
    if self.active_clients.fetch_add(1, Ordering::SeqCst) == 0 && self.config.platform.gates_clocks() {
      self.hal.clocks.enable();
    }
  }

  pub(crate) fn clients_down(&self) {
    if self.active_clients.fetch_sub(1, Ordering::SeqCst) == 1 && self.config.platform.gates_clocks() {
      self.hal.clocks.disable();
    }
  }

  pub(crate) fn checked_handle(&self, handle: EndpointHandle) -> Result<(), LinkError> {
    if self.is_connected(handle) {
      Ok(())
    } else {
      log::error!("bad handle {handle}");
      Err(LinkError::InvalidArgument)
    }
  }

  pub(crate) fn next_tag(&self) -> TagHandle {
    TagHandle::new(self.next_tag.fetch_add(1, Ordering::SeqCst) + 1)
  }

  pub(crate) fn release_slot(&self, handle: EndpointHandle) {
    self.registry.lock().release(handle);
  }

  pub(crate) fn free_fifo(&self, fifo: &FifoBuffer) {
    match fifo.backing() {
      FifoBacking::CallerSupplied => {}
      FifoBacking::DriverDma => {
        self
          .hal
          .dma
          .free(DmaRegion { base: fifo.base(), phys: fifo.phys() }, fifo.size());
      }
      FifoBacking::PipeMem { offset } => self.hal.pipe_mem.free(offset, fifo.size()),
    }
  }
}
