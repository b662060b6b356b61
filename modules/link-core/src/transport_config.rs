use crate::bam_handle::BamHandle;
use crate::fifo_buffer::FifoBuffer;
use crate::transport_mode::TransportMode;

/// Connection descriptor handed to the transport layer.
///
/// Starts from [`crate::hal::Transport::default_config`] and is filled in by
/// the orchestrator: direction first, then the two FIFOs, then the
/// signalling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportConfig {
  /// Direction of the core-side pipe.
  pub mode:             TransportMode,
  /// Transport handle of the sourcing block.
  pub source:           BamHandle,
  /// Transport handle of the destination block.
  pub destination:      BamHandle,
  /// Pipe index on the sourcing block.
  pub source_pipe:      u32,
  /// Pipe index on the destination block.
  pub destination_pipe: u32,
  /// Descriptor FIFO backing the connection.
  pub desc:             FifoBuffer,
  /// Data FIFO backing the connection.
  pub data:             FifoBuffer,
  /// Completion-event threshold.
  pub event_threshold:  u32,
  /// Enables the connection as soon as it is established (BAM-to-BAM).
  pub auto_enable:      bool,
}
