use core::time::Duration;

use crate::bam_handle::BamHandle;
use crate::operation_mode::OperationMode;
use crate::platform_mode::PlatformMode;

/// Static construction parameters for a [`crate::LinkContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
  /// Hardware integration mode.
  pub platform:        PlatformMode,
  /// Pipe-routing profile.
  pub operation:       OperationMode,
  /// Transport handle of the core-side block, returned to every client.
  pub bam:             BamHandle,
  /// Event threshold programmed into each transport connection.
  pub event_threshold: u32,
  /// Timer value written when disabling head-of-line blocking.
  pub holb_timer:      u32,
  /// Upper bound on one tag-command round-trip.
  pub tag_timeout:     Duration,
}

impl LinkConfig {
  /// Default completion-event threshold for transport connections.
  pub const DEFAULT_EVENT_THRESHOLD: u32 = 0x10;
  /// Default head-of-line blocking timer value.
  pub const DEFAULT_HOLB_TIMER: u32 = 0xff;
  /// Default bound on one tag round-trip.
  pub const DEFAULT_TAG_TIMEOUT: Duration = Duration::from_secs(5);

  /// Creates a configuration with standard routing and default tunables.
  #[must_use]
  pub const fn new(platform: PlatformMode, bam: BamHandle) -> Self {
    Self {
      platform,
      operation: OperationMode::Standard,
      bam,
      event_threshold: Self::DEFAULT_EVENT_THRESHOLD,
      holb_timer: Self::DEFAULT_HOLB_TIMER,
      tag_timeout: Self::DEFAULT_TAG_TIMEOUT,
    }
  }

  /// Selects the pipe-routing profile.
  #[must_use]
  pub const fn with_operation(mut self, operation: OperationMode) -> Self {
    self.operation = operation;
    self
  }

  /// Overrides the tag round-trip bound.
  #[must_use]
  pub const fn with_tag_timeout(mut self, timeout: Duration) -> Self {
    self.tag_timeout = timeout;
    self
  }
}
