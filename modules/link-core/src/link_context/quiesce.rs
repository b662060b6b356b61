use core::time::Duration;

use super::LinkContext;
use crate::endpoint_handle::EndpointHandle;
use crate::hal::PipeRegister;
use crate::link_error::LinkError;
use crate::link_runtime::LinkRuntime;
use crate::tag_signal::TagSignal;

impl<R> LinkContext<R>
where
  R: LinkRuntime,
{
  /// Quiesces the data path behind `handle` without disconnecting it.
  ///
  /// Blocks the pipe, injects a tag command, and waits until the hardware
  /// acknowledges it; at that point all previously queued data has
  /// drained. Idempotent: suspending an already-suspended pipe performs no
  /// second tag round-trip. On a platform without suspend support this is a
  /// no-op success.
  ///
  /// # Errors
  /// [`LinkError::InvalidArgument`] for an unknown or unbound handle,
  /// [`LinkError::OperationFailed`] when the tag command cannot be issued,
  /// and [`LinkError::Timeout`] when the ack does not arrive within the
  /// configured bound. In both failure cases the pipe is re-enabled and left
  /// in its pre-suspend state.
  pub fn suspend(&self, handle: EndpointHandle) -> Result<(), LinkError> {
    self.checked_handle(handle)?;
    self.quiesce(handle)
  }

  /// Re-enables a previously suspended data path.
  ///
  /// Clears the blocking state unconditionally, so resuming an active pipe
  /// is harmless. On a platform without suspend support this is a no-op
  /// success.
  ///
  /// # Errors
  /// [`LinkError::InvalidArgument`] for an unknown or unbound handle.
  pub fn resume(&self, handle: EndpointHandle) -> Result<(), LinkError> {
    self.checked_handle(handle)?;
    self.enable_data_path(handle);
    Ok(())
  }

  pub(crate) fn quiesce(&self, handle: EndpointHandle) -> Result<(), LinkError> {
    if !self.config.platform.supports_suspend() {
      return Ok(());
    }

    let (client, aggr, suspended) = {
      let registry = self.registry.lock();
      let Some(slot) = registry.get(handle) else {
        return Err(LinkError::InvalidArgument);
      };
      let Some(client) = slot.client else {
        return Err(LinkError::InvalidArgument);
      };
      (client, slot.config.aggr, slot.suspended)
    };
    if suspended {
      return Ok(());
    }

    self.hal.registers.write(PipeRegister::Ctrl, handle.index(), 1);

    let tag = self.next_tag();
    let signal = self.runtime.signal();
    self.tags.lock().insert(tag, signal.clone());
    log::debug!("{handle}: waiting on {tag}");

    if self.hal.commands.send_packet_tag(tag).is_err() {
      log::error!("{handle}: failed to issue tag command");
      self.tags.lock().remove(tag);
      self.hal.registers.write(PipeRegister::Ctrl, handle.index(), 0);
      return Err(LinkError::OperationFailed);
    }

    if !signal.wait_timeout(self.config.tag_timeout) {
      log::error!("{handle}: {tag} not acknowledged within {:?}", self.config.tag_timeout);
      self.tags.lock().remove(tag);
      self.hal.registers.write(PipeRegister::Ctrl, handle.index(), 0);
      return Err(LinkError::Timeout);
    }

    if client.is_consumer() && aggr.enabled && aggr.time_limit_ms > 0 {
      // residual batched data may be held up to the aggregation time limit
      self.runtime.sleep(Duration::from_millis(u64::from(aggr.time_limit_ms)));
    }

    let mut registry = self.registry.lock();
    if let Some(slot) = registry.get_mut(handle) {
      slot.suspended = true;
    }
    Ok(())
  }

  pub(crate) fn enable_data_path(&self, handle: EndpointHandle) {
    if !self.config.platform.supports_suspend() {
      return;
    }
    self.hal.registers.write(PipeRegister::Ctrl, handle.index(), 0);
    let mut registry = self.registry.lock();
    if let Some(slot) = registry.get_mut(handle) {
      slot.suspended = false;
    }
  }
}
