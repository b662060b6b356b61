use crate::hal::hal_error::HalError;
use crate::tag_handle::TagHandle;

/// Immediate-command path into the data stream.
pub trait CommandEngine: Send + Sync {
  /// Injects a packet-tag command carrying `tag` into the stream.
  ///
  /// The hardware echoes the tag once all previously queued data has been
  /// processed; the platform binding delivers that echo through
  /// [`crate::LinkContext::complete_tag`].
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the command could not be issued.
  fn send_packet_tag(&self, tag: TagHandle) -> Result<(), HalError>;
}
