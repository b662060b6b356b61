//! Software-only implementation of every hardware collaborator.
//!
//! Each piece records what the core asked of it and can be told to reject
//! or exhaust itself, so tests can probe the rollback path of every single
//! connect step. [`VirtualPlatform`] bundles the pieces and builds ready
//! [`pipelink_core_rs::LinkContext`]s against them.

use std::sync::{Mutex, MutexGuard, PoisonError};

mod virtual_clock_gate;
mod virtual_command_engine;
mod virtual_dma_allocator;
mod virtual_pipe_mem_pool;
mod virtual_pipe_registers;
mod virtual_platform_struct;
mod virtual_transport;

pub use virtual_clock_gate::VirtualClockGate;
pub use virtual_command_engine::VirtualCommandEngine;
pub use virtual_dma_allocator::VirtualDmaAllocator;
pub use virtual_pipe_mem_pool::VirtualPipeMemPool;
pub use virtual_pipe_registers::VirtualPipeRegisters;
pub use virtual_platform_struct::VirtualPlatform;
pub use virtual_transport::VirtualTransport;

pub(crate) fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
