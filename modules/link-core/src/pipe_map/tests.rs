#![cfg(test)]

use alloc::vec::Vec;

use super::{pipe_index, PIPE_COUNT};
use crate::client_kind::ClientKind;
use crate::operation_mode::OperationMode;

#[test]
fn standard_mode_maps_every_client_to_a_distinct_pipe() {
  let mut seen: Vec<u32> = Vec::new();
  for client in ClientKind::ALL {
    let handle = pipe_index(OperationMode::Standard, client).unwrap();
    assert!((handle.index() as usize) < PIPE_COUNT, "{client:?}");
    assert!(!seen.contains(&handle.index()), "pipe {} mapped twice", handle.index());
    seen.push(handle.index());
  }
}

#[test]
fn tethered_mode_drops_only_the_embedded_pair() {
  for client in ClientKind::ALL {
    let mapped = pipe_index(OperationMode::UsbTethered, client).is_some();
    let embedded = matches!(client, ClientKind::A2EmbeddedProducer | ClientKind::A2EmbeddedConsumer);
    assert_eq!(mapped, !embedded, "{client:?}");
  }
}
