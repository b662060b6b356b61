use crate::endpoint_event::EndpointEvent;

/// Callback surface back into the owning peripheral driver.
///
/// The `context` value is stored verbatim at connect time and handed back
/// with every event; the core never interprets it.
pub trait EndpointNotify: Send + Sync {
  /// Delivers one data-path event together with the connect-time context.
  fn notify(&self, context: u64, event: EndpointEvent);
}
