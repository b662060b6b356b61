#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![deny(clippy::print_stdout, clippy::dbg_macro)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

//! Standard-library bindings for the pipe lifecycle core.
//!
//! Provides the blocking services the core injects, namely a
//! condition-variable tag signal with a bounded wait and a thread-sleep
//! flush delay, plus an in-memory virtual platform implementing every
//! hardware collaborator, for tests, examples, and software-modelled
//! deployments.

mod condvar_tag_signal;
mod std_link_runtime;
pub mod virtual_platform;

pub use condvar_tag_signal::CondvarTagSignal;
pub use std_link_runtime::StdLinkRuntime;
