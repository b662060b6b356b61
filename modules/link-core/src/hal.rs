//! Collaborator interfaces the platform must implement.
//!
//! The core drives hardware exclusively through these traits: a register
//! file, two memory allocators, the transport connect surface, the
//! immediate-command path, and the shared clock gate. A platform binding
//! implements them against real hardware; tests implement them in memory.

mod clock_gate;
mod command_engine;
mod dma_allocator;
mod hal_error;
mod pipe_mem_pool;
mod pipe_registers;
mod transport;

pub use clock_gate::ClockGate;
pub use command_engine::CommandEngine;
pub use dma_allocator::{DmaAllocator, DmaRegion};
pub use hal_error::HalError;
pub use pipe_mem_pool::PipeMemPool;
pub use pipe_registers::{PipeRegister, PipeRegisters};
pub use transport::Transport;
