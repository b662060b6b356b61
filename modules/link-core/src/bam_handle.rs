/// Handle of one hardware transport block.
///
/// Both ends of a BAM-to-BAM connection are named by such a handle; the
/// core-side handle comes from [`crate::LinkConfig`], the peer side from the
/// connecting driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BamHandle(u64);

impl BamHandle {
  /// Wraps a raw transport block handle.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// The raw handle value.
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.0
  }
}
