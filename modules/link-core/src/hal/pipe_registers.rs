use crate::endpoint_config::EndpointConfig;
use crate::hal::hal_error::HalError;

/// Per-pipe registers the lifecycle core programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeRegister {
  /// Pipe control; writing 1 blocks the data path, writing 0 re-enables it.
  Ctrl,
  /// Head-of-line blocking enable.
  HolBlockEnable,
  /// Head-of-line blocking timer.
  HolBlockTimer,
}

/// Register-file access for the pipe block.
pub trait PipeRegisters: Send + Sync {
  /// Writes `value` to `register` of the pipe at `pipe_index`.
  fn write(&self, register: PipeRegister, pipe_index: u32, value: u32);

  /// Reads `register` of the pipe at `pipe_index`.
  fn read(&self, register: PipeRegister, pipe_index: u32) -> u32;

  /// Applies the connect-time hardware settings to a pipe.
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the hardware refuses the configuration.
  fn configure(&self, pipe_index: u32, config: &EndpointConfig) -> Result<(), HalError>;
}
