/// Which side of a transport connection the core-side pipe plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
  /// The core-side pipe sources data (the client consumes).
  #[default]
  Source,
  /// The core-side pipe is the destination (the client produces).
  Destination,
}
