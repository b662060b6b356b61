/// Identifier of a transport endpoint object.
///
/// Handed out by [`crate::hal::Transport::alloc_endpoint`] and passed back
/// verbatim for connect, disconnect, and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointId(u64);

impl EndpointId {
  /// Wraps a raw endpoint identifier.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// The raw identifier value.
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.0
  }
}
