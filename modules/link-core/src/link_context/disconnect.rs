use super::LinkContext;
use crate::endpoint_handle::EndpointHandle;
use crate::link_error::LinkError;
use crate::link_runtime::LinkRuntime;

impl<R> LinkContext<R>
where
  R: LinkRuntime,
{
  /// Disconnects a pipe, inverting every step of [`LinkContext::connect`].
  ///
  /// The data path is quiesced first; if that or any later teardown step
  /// fails, the error is returned immediately and the slot is left as-is so
  /// the caller can inspect state or retry. No automatic recovery is
  /// attempted.
  ///
  /// # Errors
  /// [`LinkError::InvalidArgument`] for an unknown or unbound handle,
  /// [`LinkError::OperationFailed`] when the transport rejects a teardown
  /// step, and [`LinkError::Timeout`] when the quiesce tag goes
  /// unacknowledged.
  pub fn disconnect(&self, handle: EndpointHandle) -> Result<(), LinkError> {
    self.checked_handle(handle)?;

    if let Err(err) = self.quiesce(handle) {
      log::error!("{handle}: failed to quiesce data path: {err}");
      return Err(err);
    }

    let (endpoint, desc, data) = {
      let registry = self.registry.lock();
      let Some(slot) = registry.get(handle) else {
        return Err(LinkError::InvalidArgument);
      };
      (slot.endpoint, slot.desc, slot.data)
    };
    let Some(endpoint) = endpoint else {
      return Err(LinkError::InvalidArgument);
    };

    if self.hal.transport.disconnect(endpoint).is_err() {
      log::error!("{handle}: transport disconnect failed");
      return Err(LinkError::OperationFailed);
    }

    if let Some(desc) = desc {
      self.free_fifo(&desc);
    }
    if let Some(data) = data {
      self.free_fifo(&data);
    }

    if self.hal.transport.free_endpoint(endpoint).is_err() {
      log::error!("{handle}: endpoint release failed");
      return Err(LinkError::OperationFailed);
    }

    // flag symmetry only; the slot is cleared right after
    self.enable_data_path(handle);
    self.release_slot(handle);
    self.clients_down();
    log::debug!("{handle}: disconnected");
    Ok(())
  }
}
