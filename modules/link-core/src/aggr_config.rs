/// Aggregation behaviour on a consumer pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggrConfig {
  /// Whether the hardware batches data before handing it to the peer.
  pub enabled:       bool,
  /// Longest time the hardware may hold a partial batch, in milliseconds.
  /// A quiesced pipe must wait this long for residual batched data to flush.
  pub time_limit_ms: u32,
}
