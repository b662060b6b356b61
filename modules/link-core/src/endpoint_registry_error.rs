use core::fmt;

use crate::client_kind::ClientKind;

/// Errors returned by the endpoint registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRegistryError {
  /// The active operation mode has no pipe mapping for the client.
  NoMapping(ClientKind),
  /// The mapped pipe is already bound to a live connection.
  SlotBusy(ClientKind),
}

impl fmt::Display for EndpointRegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EndpointRegistryError::NoMapping(client) => write!(f, "no pipe mapping for {client:?}"),
      EndpointRegistryError::SlotBusy(client) => write!(f, "pipe for {client:?} already bound"),
    }
  }
}

impl core::error::Error for EndpointRegistryError {}
