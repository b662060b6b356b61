use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use hashbrown::HashMap;
use pipelink_core_rs::hal::{HalError, Transport};
use pipelink_core_rs::{EndpointId, TransportConfig};

use super::locked;

/// In-memory transport with per-operation rejection injection.
#[derive(Default)]
pub struct VirtualTransport {
  next_endpoint:         AtomicU64,
  live:                  Mutex<HashMap<EndpointId, bool>>,
  last_config:           Mutex<Option<TransportConfig>>,
  reject_alloc:          AtomicBool,
  reject_default_config: AtomicBool,
  reject_connect:        AtomicBool,
  reject_disconnect:     AtomicBool,
  reject_free:           AtomicBool,
}

impl VirtualTransport {
  /// Creates a transport with no endpoints allocated.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes endpoint allocation report exhaustion.
  pub fn reject_alloc(&self) {
    self.reject_alloc.store(true, Ordering::SeqCst);
  }

  /// Makes default-config reads fail.
  pub fn reject_default_config(&self) {
    self.reject_default_config.store(true, Ordering::SeqCst);
  }

  /// Makes connection establishment fail.
  pub fn reject_connect(&self) {
    self.reject_connect.store(true, Ordering::SeqCst);
  }

  /// Makes connection teardown fail.
  pub fn reject_disconnect(&self) {
    self.reject_disconnect.store(true, Ordering::SeqCst);
  }

  /// Makes endpoint release fail.
  pub fn reject_free(&self) {
    self.reject_free.store(true, Ordering::SeqCst);
  }

  /// Number of endpoint objects currently allocated.
  #[must_use]
  pub fn live_endpoints(&self) -> usize {
    locked(&self.live).len()
  }

  /// Number of endpoints currently connected.
  #[must_use]
  pub fn connected_endpoints(&self) -> usize {
    locked(&self.live).values().filter(|connected| **connected).count()
  }

  /// The configuration used by the most recent successful connect.
  #[must_use]
  pub fn last_config(&self) -> Option<TransportConfig> {
    *locked(&self.last_config)
  }
}

impl Transport for VirtualTransport {
  fn alloc_endpoint(&self) -> Result<EndpointId, HalError> {
    if self.reject_alloc.load(Ordering::SeqCst) {
      return Err(HalError::Exhausted);
    }
    let endpoint = EndpointId::new(self.next_endpoint.fetch_add(1, Ordering::SeqCst) + 1);
    locked(&self.live).insert(endpoint, false);
    Ok(endpoint)
  }

  fn default_config(&self, endpoint: EndpointId) -> Result<TransportConfig, HalError> {
    if self.reject_default_config.load(Ordering::SeqCst) || !locked(&self.live).contains_key(&endpoint) {
      return Err(HalError::Rejected);
    }
    Ok(TransportConfig::default())
  }

  fn connect(&self, endpoint: EndpointId, config: &TransportConfig) -> Result<(), HalError> {
    if self.reject_connect.load(Ordering::SeqCst) {
      return Err(HalError::Rejected);
    }
    let mut live = locked(&self.live);
    match live.get_mut(&endpoint) {
      Some(connected) if !*connected => {
        *connected = true;
        *locked(&self.last_config) = Some(*config);
        Ok(())
      }
      _ => Err(HalError::Rejected),
    }
  }

  fn disconnect(&self, endpoint: EndpointId) -> Result<(), HalError> {
    if self.reject_disconnect.load(Ordering::SeqCst) {
      return Err(HalError::Rejected);
    }
    let mut live = locked(&self.live);
    match live.get_mut(&endpoint) {
      Some(connected) if *connected => {
        *connected = false;
        Ok(())
      }
      _ => Err(HalError::Rejected),
    }
  }

  fn free_endpoint(&self, endpoint: EndpointId) -> Result<(), HalError> {
    if self.reject_free.load(Ordering::SeqCst) {
      return Err(HalError::Rejected);
    }
    match locked(&self.live).remove(&endpoint) {
      Some(_) => Ok(()),
      None => Err(HalError::Rejected),
    }
  }
}
