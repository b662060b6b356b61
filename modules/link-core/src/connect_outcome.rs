use crate::bam_handle::BamHandle;
use crate::endpoint_handle::EndpointHandle;
use crate::fifo_buffer::FifoBuffer;

/// Transport-side facts a client needs to finish its half of the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectOutcome {
  /// Handle for all subsequent lifecycle calls.
  pub handle:     EndpointHandle,
  /// Transport handle of the core-side block.
  pub bam:        BamHandle,
  /// Physical pipe index assigned to the client.
  pub pipe_index: u32,
  /// Descriptor FIFO actually in use, driver- or caller-allocated.
  pub desc:       FifoBuffer,
  /// Data FIFO actually in use, driver- or caller-allocated.
  pub data:       FifoBuffer,
}
