use core::fmt;

/// Failure reported by a hardware collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
  /// The hardware refused the operation.
  Rejected,
  /// The backing resource ran out.
  Exhausted,
}

impl fmt::Display for HalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HalError::Rejected => f.write_str("rejected by hardware"),
      HalError::Exhausted => f.write_str("hardware resource exhausted"),
    }
  }
}

impl core::error::Error for HalError {}
