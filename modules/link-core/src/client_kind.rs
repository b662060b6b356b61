use self::ClientKind::*;


/// Logical identity of a peripheral client bound to one pipe.
///
/// Producers push data into the core, consumers pull data out of it; the
/// distinction decides which side of a transport connection the core-side
/// pipe plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
  /// USB controller, uplink.
  UsbProducer,
  /// USB controller, downlink.
  UsbConsumer,
  /// Embedded modem data path, uplink.
  A2EmbeddedProducer,
  /// Embedded modem data path, downlink.
  A2EmbeddedConsumer,
  /// Tethered modem data path, uplink.
  A2TetheredProducer,
  /// Tethered modem data path, downlink.
  A2TetheredConsumer,
  /// HSIC channel 1, uplink.
  Hsic1Producer,
  /// HSIC channel 1, downlink.
  Hsic1Consumer,
  /// HSIC channel 2, uplink.
  Hsic2Producer,
  /// HSIC channel 2, downlink.
  Hsic2Consumer,
  /// HSIC channel 3, uplink.
  Hsic3Producer,
  /// HSIC channel 3, downlink.
  Hsic3Consumer,
  /// HSIC channel 4, uplink.
  Hsic4Producer,
  /// HSIC channel 4, downlink.
  Hsic4Consumer,
}

impl ClientKind {
  /// Every known client, producers and consumers alike.
  pub const ALL: [ClientKind; 14] = [
    UsbProducer,
    UsbConsumer,
    A2EmbeddedProducer,
    A2EmbeddedConsumer,
    A2TetheredProducer,
    A2TetheredConsumer,
    Hsic1Producer,
    Hsic1Consumer,
    Hsic2Producer,
    Hsic2Consumer,
    Hsic3Producer,
    Hsic3Consumer,
    Hsic4Producer,
    Hsic4Consumer,
  ];

  /// Returns `true` when the client drains data out of the core.
  #[must_use]
  pub const fn is_consumer(self) -> bool {
    matches!(
      self,
      UsbConsumer | A2EmbeddedConsumer | A2TetheredConsumer | Hsic1Consumer | Hsic2Consumer | Hsic3Consumer | Hsic4Consumer
    )
  }

  /// Returns `true` when the client feeds data into the core.
  #[must_use]
  pub const fn is_producer(self) -> bool {
    !self.is_consumer()
  }

  /// HSIC consumer pipes must not stall the rest of the block when their
  /// peer stops draining, so head-of-line blocking is disabled for them at
  /// connect time.
  #[must_use]
  pub const fn wants_holb_disable(self) -> bool {
    matches!(self, Hsic1Consumer | Hsic2Consumer | Hsic3Consumer | Hsic4Consumer)
  }
}
