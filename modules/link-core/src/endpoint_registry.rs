use crate::client_kind::ClientKind;
use crate::endpoint_context::EndpointContext;
use crate::endpoint_handle::EndpointHandle;
use crate::endpoint_registry_error::EndpointRegistryError;
use crate::operation_mode::OperationMode;
use crate::pipe_map::{pipe_index, PIPE_COUNT};

#[cfg(test)]
mod tests;

/// Fixed table of pipe slots, one per physical pipe.
///
/// Pure lookup plus state flags: clients map to slots through the static
/// pipe table, never by dynamic allocation. Serialisation across callers is
/// imposed by the orchestrator, not in here.
pub struct EndpointRegistry {
  slots: [EndpointContext; PIPE_COUNT],
}

impl EndpointRegistry {
  /// Creates a registry with every slot free.
  #[must_use]
  pub fn new() -> Self {
    Self { slots: core::array::from_fn(|_| EndpointContext::default()) }
  }

  /// Binds `client` to its fixed pipe and marks the slot live.
  ///
  /// # Errors
  /// [`EndpointRegistryError::NoMapping`] when the operation mode does not
  /// route the client, [`EndpointRegistryError::SlotBusy`] when the mapped
  /// pipe is already bound.
  pub fn acquire(&mut self, mode: OperationMode, client: ClientKind) -> Result<EndpointHandle, EndpointRegistryError> {
    let Some(handle) = pipe_index(mode, client) else {
      return Err(EndpointRegistryError::NoMapping(client));
    };
    let Some(slot) = self.slots.get_mut(handle.slot()) else {
      return Err(EndpointRegistryError::NoMapping(client));
    };
    if slot.valid {
      return Err(EndpointRegistryError::SlotBusy(client));
    }
    *slot = EndpointContext::default();
    slot.valid = true;
    slot.client = Some(client);
    Ok(handle)
  }

  /// Returns the slot behind `handle` to its zero state.
  pub fn release(&mut self, handle: EndpointHandle) {
    if let Some(slot) = self.slots.get_mut(handle.slot()) {
      *slot = EndpointContext::default();
    }
  }

  /// Read access to the slot behind `handle`, if the index is in range.
  #[must_use]
  pub fn get(&self, handle: EndpointHandle) -> Option<&EndpointContext> {
    self.slots.get(handle.slot())
  }

  pub(crate) fn get_mut(&mut self, handle: EndpointHandle) -> Option<&mut EndpointContext> {
    self.slots.get_mut(handle.slot())
  }

  /// `true` when no slot is live. Required before subsystem teardown.
  #[must_use]
  pub fn is_drained(&self) -> bool {
    self.slots.iter().all(|slot| !slot.valid)
  }
}

impl Default for EndpointRegistry {
  fn default() -> Self {
    Self::new()
  }
}
