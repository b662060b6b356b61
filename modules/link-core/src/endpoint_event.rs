/// Data-path events forwarded to the owning peripheral driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointEvent {
  /// A transfer the client queued towards the core has completed.
  WriteDone,
  /// Data destined for the client is ready to be picked up.
  ReceiveReady,
}
