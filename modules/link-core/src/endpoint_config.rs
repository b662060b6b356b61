use crate::aggr_config::AggrConfig;

/// Per-pipe hardware settings applied while connecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndpointConfig {
  /// Address-translation treatment for packets crossing this pipe.
  pub nat_enabled: bool,
  /// Header bytes the hardware strips or inserts at the pipe boundary.
  pub header_len:  u8,
  /// Aggregation behaviour; only meaningful on consumer pipes.
  pub aggr:        AggrConfig,
}
