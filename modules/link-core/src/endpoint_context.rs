use alloc::sync::Arc;

use crate::client_kind::ClientKind;
use crate::endpoint_config::EndpointConfig;
use crate::endpoint_id::EndpointId;
use crate::endpoint_notify::EndpointNotify;
use crate::fifo_buffer::FifoBuffer;

/// Book-keeping record for one physical pipe slot.
///
/// A slot is `valid` exactly while one successful connect is outstanding;
/// `suspended` is only meaningful on a valid slot. FIFO buffers stay owned
/// by the slot from allocation until disconnect frees them, unless caller
/// supplied.
#[derive(Default)]
pub struct EndpointContext {
  pub(crate) valid:          bool,
  pub(crate) client:         Option<ClientKind>,
  pub(crate) suspended:      bool,
  pub(crate) endpoint:       Option<EndpointId>,
  pub(crate) desc:           Option<FifoBuffer>,
  pub(crate) data:           Option<FifoBuffer>,
  pub(crate) config:         EndpointConfig,
  pub(crate) notify:         Option<Arc<dyn EndpointNotify>>,
  pub(crate) notify_context: u64,
}

impl EndpointContext {
  /// Whether a client currently owns this slot.
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.valid
  }

  /// The owning client, while the slot is valid.
  #[must_use]
  pub const fn client(&self) -> Option<ClientKind> {
    self.client
  }

  /// Whether the data path is quiesced. Only meaningful on a valid slot.
  #[must_use]
  pub const fn is_suspended(&self) -> bool {
    self.suspended
  }

  /// Hardware settings the slot was connected with.
  #[must_use]
  pub const fn config(&self) -> &EndpointConfig {
    &self.config
  }

  /// Descriptor FIFO bound to the pipe, while connected.
  #[must_use]
  pub const fn desc_fifo(&self) -> Option<FifoBuffer> {
    self.desc
  }

  /// Data FIFO bound to the pipe, while connected.
  #[must_use]
  pub const fn data_fifo(&self) -> Option<FifoBuffer> {
    self.data
  }
}
