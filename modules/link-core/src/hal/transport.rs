use crate::endpoint_id::EndpointId;
use crate::hal::hal_error::HalError;
use crate::transport_config::TransportConfig;

/// BAM-style transport connect/disconnect surface.
pub trait Transport: Send + Sync {
  /// Reserves a transport endpoint object.
  ///
  /// # Errors
  /// [`HalError::Exhausted`] when no endpoint object is available.
  fn alloc_endpoint(&self) -> Result<EndpointId, HalError>;

  /// Default connection settings for a freshly allocated endpoint.
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the endpoint state cannot be read.
  fn default_config(&self, endpoint: EndpointId) -> Result<TransportConfig, HalError>;

  /// Establishes the connection described by `config`.
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the transport refuses the connection.
  fn connect(&self, endpoint: EndpointId, config: &TransportConfig) -> Result<(), HalError>;

  /// Tears an established connection down.
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the transport refuses the teardown.
  fn disconnect(&self, endpoint: EndpointId) -> Result<(), HalError>;

  /// Releases an endpoint object.
  ///
  /// # Errors
  /// [`HalError::Rejected`] when the endpoint cannot be released.
  fn free_endpoint(&self, endpoint: EndpointId) -> Result<(), HalError>;
}
