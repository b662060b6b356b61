#![cfg(test)]

use super::EndpointRegistry;
use crate::client_kind::ClientKind;
use crate::endpoint_registry_error::EndpointRegistryError;
use crate::operation_mode::OperationMode;

#[test]
fn acquire_marks_the_slot_live() {
  let mut registry = EndpointRegistry::new();
  let handle = registry.acquire(OperationMode::Standard, ClientKind::UsbConsumer).unwrap();

  let slot = registry.get(handle).unwrap();
  assert!(slot.is_valid());
  assert_eq!(slot.client(), Some(ClientKind::UsbConsumer));
  assert!(!slot.is_suspended());
  assert!(!registry.is_drained());
}

#[test]
fn double_acquire_reports_slot_busy() {
  let mut registry = EndpointRegistry::new();
  registry.acquire(OperationMode::Standard, ClientKind::Hsic1Producer).unwrap();

  let err = registry.acquire(OperationMode::Standard, ClientKind::Hsic1Producer).unwrap_err();
  assert_eq!(err, EndpointRegistryError::SlotBusy(ClientKind::Hsic1Producer));
}

#[test]
fn unmapped_client_reports_no_mapping() {
  let mut registry = EndpointRegistry::new();
  let err = registry.acquire(OperationMode::UsbTethered, ClientKind::A2EmbeddedProducer).unwrap_err();
  assert_eq!(err, EndpointRegistryError::NoMapping(ClientKind::A2EmbeddedProducer));
}

#[test]
fn release_returns_the_slot_to_zero_state() {
  let mut registry = EndpointRegistry::new();
  let handle = registry.acquire(OperationMode::Standard, ClientKind::UsbProducer).unwrap();

  registry.release(handle);
  assert!(!registry.get(handle).unwrap().is_valid());
  assert!(registry.is_drained());

  // the slot is immediately reusable
  registry.acquire(OperationMode::Standard, ClientKind::UsbProducer).unwrap();
}
