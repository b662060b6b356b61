use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use hashbrown::HashMap;
use pipelink_core_rs::hal::{HalError, PipeRegister, PipeRegisters};
use pipelink_core_rs::EndpointConfig;

use super::locked;

/// In-memory register file recording every write and configuration.
#[derive(Default)]
pub struct VirtualPipeRegisters {
  cells:            Mutex<HashMap<(PipeRegister, u32), u32>>,
  writes:           Mutex<Vec<(PipeRegister, u32, u32)>>,
  configured:       Mutex<Vec<(u32, EndpointConfig)>>,
  reject_configure: AtomicBool,
}

impl VirtualPipeRegisters {
  /// Creates an all-zero register file.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every subsequent [`PipeRegisters::configure`] call fail.
  pub fn reject_configure(&self) {
    self.reject_configure.store(true, Ordering::SeqCst);
  }

  /// Current value of one register cell (zero if never written).
  #[must_use]
  pub fn value(&self, register: PipeRegister, pipe_index: u32) -> u32 {
    locked(&self.cells).get(&(register, pipe_index)).copied().unwrap_or(0)
  }

  /// Every value written to one register cell, in order.
  #[must_use]
  pub fn writes_to(&self, register: PipeRegister, pipe_index: u32) -> Vec<u32> {
    locked(&self.writes)
      .iter()
      .filter(|(reg, pipe, _)| *reg == register && *pipe == pipe_index)
      .map(|(_, _, value)| *value)
      .collect()
  }

  /// Pipes that had an endpoint configuration applied, in order.
  #[must_use]
  pub fn configured_pipes(&self) -> Vec<u32> {
    locked(&self.configured).iter().map(|(pipe, _)| *pipe).collect()
  }
}

impl PipeRegisters for VirtualPipeRegisters {
  fn write(&self, register: PipeRegister, pipe_index: u32, value: u32) {
    locked(&self.cells).insert((register, pipe_index), value);
    locked(&self.writes).push((register, pipe_index, value));
  }

  fn read(&self, register: PipeRegister, pipe_index: u32) -> u32 {
    self.value(register, pipe_index)
  }

  fn configure(&self, pipe_index: u32, config: &EndpointConfig) -> Result<(), HalError> {
    if self.reject_configure.load(Ordering::SeqCst) {
      return Err(HalError::Rejected);
    }
    locked(&self.configured).push((pipe_index, *config));
    Ok(())
  }
}
