use core::fmt;

/// Correlation token carried by one in-flight tag command.
///
/// Unique per issue; the hardware echoes it back when every datum queued
/// ahead of the tag has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagHandle(u64);

impl TagHandle {
  /// Wraps a raw correlation value.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// The raw correlation value.
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.0
  }
}

impl fmt::Display for TagHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "tag-{}", self.0)
  }
}
