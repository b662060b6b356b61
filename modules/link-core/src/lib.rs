#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![deny(clippy::print_stdout, clippy::dbg_macro)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

//! Runtime-agnostic lifecycle core for BAM-to-BAM pipe clients.
//!
//! Peripheral drivers connect to a fixed set of hardware pipes, move data
//! through them without host staging, and must quiesce a pipe (drain all
//! in-flight traffic via a tag round-trip) before suspending it. This crate
//! owns that lifecycle: the slot registry, the connect/disconnect acquire
//! chain with its exact-inverse rollback, and the suspend/resume protocol.
//!
//! Every hardware touchpoint is injected through the [`hal`] traits bundled
//! in a [`LinkHal`], and every blocking service (tag waits, flush delays)
//! through a [`LinkRuntime`], so independent instances can be constructed
//! against real hardware or an in-memory platform alike.

extern crate alloc;

mod aggr_config;
mod bam_handle;
mod client_kind;
mod connect_outcome;
mod connect_params;
mod endpoint_config;
mod endpoint_context;
mod endpoint_event;
mod endpoint_handle;
mod endpoint_id;
mod endpoint_notify;
mod endpoint_registry;
mod endpoint_registry_error;
mod fifo_backing;
mod fifo_buffer;
pub mod hal;
mod link_config;
mod link_context;
mod link_error;
mod link_hal;
mod link_runtime;
mod operation_mode;
mod pipe_map;
mod platform_mode;
mod tag_handle;
mod tag_signal;
mod tag_table;
mod transport_config;
mod transport_mode;

pub use aggr_config::AggrConfig;
pub use bam_handle::BamHandle;
pub use client_kind::ClientKind;
pub use connect_outcome::ConnectOutcome;
pub use connect_params::ConnectParams;
pub use endpoint_config::EndpointConfig;
pub use endpoint_context::EndpointContext;
pub use endpoint_event::EndpointEvent;
pub use endpoint_handle::EndpointHandle;
pub use endpoint_id::EndpointId;
pub use endpoint_notify::EndpointNotify;
pub use endpoint_registry::EndpointRegistry;
pub use endpoint_registry_error::EndpointRegistryError;
pub use fifo_backing::FifoBacking;
pub use fifo_buffer::FifoBuffer;
pub use link_config::LinkConfig;
pub use link_context::LinkContext;
pub use link_error::LinkError;
pub use link_hal::LinkHal;
pub use link_runtime::LinkRuntime;
pub use operation_mode::OperationMode;
pub use pipe_map::{pipe_index, PIPE_COUNT};
pub use platform_mode::PlatformMode;
pub use tag_handle::TagHandle;
pub use tag_signal::TagSignal;
pub use tag_table::TagTable;
pub use transport_config::TransportConfig;
pub use transport_mode::TransportMode;
