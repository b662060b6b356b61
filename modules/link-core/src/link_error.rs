use core::fmt;

/// Failure classes surfaced by every lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
  /// A required input was missing, zero, or out of range.
  InvalidArgument,
  /// No pipe could be bound: missing mapping, occupied slot, or allocator
  /// exhaustion.
  ResourceExhausted,
  /// The hardware or transport rejected an operation mid-flight. Treated as
  /// an operational failure, not an input error.
  OperationFailed,
  /// The hardware did not acknowledge a tag command within the configured
  /// bound.
  Timeout,
}

impl fmt::Display for LinkError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LinkError::InvalidArgument => f.write_str("invalid argument"),
      LinkError::ResourceExhausted => f.write_str("resource exhausted"),
      LinkError::OperationFailed => f.write_str("operation rejected by hardware"),
      LinkError::Timeout => f.write_str("tag command timed out"),
    }
  }
}

impl core::error::Error for LinkError {}
