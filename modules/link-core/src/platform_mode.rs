/// Hardware integration mode the context runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformMode {
  /// Real hardware: clocks are gated on the active-client count and pipes
  /// support tag commands and suspend.
  Normal,
  /// Software-modelled hardware: no clock gating, and the tag/suspend
  /// machinery does not exist, so quiesce requests succeed as no-ops.
  Virtual,
}

impl PlatformMode {
  /// Whether pipes on this platform can be suspended via a tag round-trip.
  #[must_use]
  pub const fn supports_suspend(self) -> bool {
    matches!(self, PlatformMode::Normal)
  }

  /// Whether the shared clock resource must track the active-client count.
  #[must_use]
  pub const fn gates_clocks(self) -> bool {
    matches!(self, PlatformMode::Normal)
  }
}
