use core::fmt;

/// Opaque handle identifying a connected pipe.
///
/// Numerically this is the physical pipe index, which is what the hardware
/// registers and the transport layer are addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndpointHandle(u32);

impl EndpointHandle {
  /// Wraps a raw pipe index.
  #[must_use]
  pub const fn new(index: u32) -> Self {
    Self(index)
  }

  /// The physical pipe index behind this handle.
  #[must_use]
  pub const fn index(self) -> u32 {
    self.0
  }

  pub(crate) const fn slot(self) -> usize {
    self.0 as usize
  }
}

impl fmt::Display for EndpointHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ep{}", self.0)
  }
}
