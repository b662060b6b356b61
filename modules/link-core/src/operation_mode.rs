/// Pipe-routing profile, fixed at context construction.
///
/// The profile decides which logical clients own a pipe at all; a client
/// without a mapping in the active profile cannot connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
  /// All client families routed through the core.
  Standard,
  /// USB-tethered routing: embedded modem traffic bypasses the core, so the
  /// embedded client pair has no pipe mapping.
  UsbTethered,
}
