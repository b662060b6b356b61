//! Static client-to-pipe mapping.
//!
//! The assignment of logical clients to physical pipes is a board-level
//! fact, not a runtime decision, so it lives in a fixed table keyed by the
//! operation mode.

use crate::client_kind::ClientKind;
use crate::endpoint_handle::EndpointHandle;
use crate::operation_mode::OperationMode;

#[cfg(test)]
mod tests;

/// Number of physical pipes exposed by the block.
pub const PIPE_COUNT: usize = 16;

/// Resolves the fixed physical pipe backing `client`, or `None` when the
/// operation mode does not route that client through the core.
#[must_use]
pub const fn pipe_index(mode: OperationMode, client: ClientKind) -> Option<EndpointHandle> {
  let raw: Option<u32> = match client {
    ClientKind::UsbProducer => Some(0),
    ClientKind::UsbConsumer => Some(1),
    ClientKind::A2EmbeddedProducer => match mode {
      OperationMode::Standard => Some(2),
      OperationMode::UsbTethered => None,
    },
    ClientKind::A2EmbeddedConsumer => match mode {
      OperationMode::Standard => Some(3),
      OperationMode::UsbTethered => None,
    },
    ClientKind::A2TetheredProducer => Some(4),
    ClientKind::A2TetheredConsumer => Some(5),
    ClientKind::Hsic1Producer => Some(6),
    ClientKind::Hsic1Consumer => Some(7),
    ClientKind::Hsic2Producer => Some(8),
    ClientKind::Hsic2Consumer => Some(9),
    ClientKind::Hsic3Producer => Some(10),
    ClientKind::Hsic3Consumer => Some(11),
    ClientKind::Hsic4Producer => Some(12),
    ClientKind::Hsic4Consumer => Some(13),
  };
  match raw {
    Some(index) => Some(EndpointHandle::new(index)),
    None => None,
  }
}
