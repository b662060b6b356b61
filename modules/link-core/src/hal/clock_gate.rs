/// Shared clock resource gated on the active-client count.
///
/// Enabled when the count leaves zero, disabled when it returns to zero;
/// the core guarantees the calls are balanced.
pub trait ClockGate: Send + Sync {
  /// Turns the shared clocks on.
  fn enable(&self);

  /// Turns the shared clocks off.
  fn disable(&self);
}
