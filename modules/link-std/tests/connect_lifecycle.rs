use std::sync::{Arc, Mutex};

use pipelink_core_rs::hal::PipeRegister;
use pipelink_core_rs::{
  BamHandle, ClientKind, ConnectParams, EndpointEvent, EndpointNotify, FifoBacking, LinkConfig, LinkError,
  OperationMode, PlatformMode, TransportMode,
};
use pipelink_std_rs::virtual_platform::VirtualPlatform;

mod support;
use support::TagAcker;

const OWN_BAM: BamHandle = BamHandle::new(7);
const PEER_BAM: BamHandle = BamHandle::new(40);

fn usb_consumer() -> ConnectParams {
  ConnectParams::new(ClientKind::UsbConsumer, PEER_BAM, 9).with_fifo_sizes(0x100, 0x400)
}

#[test]
fn connect_reports_transport_facts_for_a_consumer() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let outcome = context.connect(&usb_consumer()).unwrap();
  assert_eq!(outcome.pipe_index, 1);
  assert_eq!(outcome.bam, OWN_BAM);
  assert_eq!(outcome.desc.size(), 0x100);
  assert_eq!(outcome.data.size(), 0x400);
  assert!(context.is_connected(outcome.handle));
  assert!(!context.is_suspended(outcome.handle));
  assert_eq!(context.active_clients(), 1);
  assert!(platform.clocks.is_on());

  let transport = platform.transport.last_config().unwrap();
  assert_eq!(transport.mode, TransportMode::Source);
  assert_eq!(transport.source, OWN_BAM);
  assert_eq!(transport.source_pipe, 1);
  assert_eq!(transport.destination, PEER_BAM);
  assert_eq!(transport.destination_pipe, 9);
  assert_eq!(transport.event_threshold, LinkConfig::DEFAULT_EVENT_THRESHOLD);
  assert!(transport.auto_enable);
  assert_eq!(platform.registers.configured_pipes(), vec![1]);
}

#[test]
fn connect_reverses_direction_for_a_producer() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let params = ConnectParams::new(ClientKind::UsbProducer, PEER_BAM, 12).with_fifo_sizes(0x100, 0x400);
  let outcome = context.connect(&params).unwrap();
  assert_eq!(outcome.pipe_index, 0);

  let transport = platform.transport.last_config().unwrap();
  assert_eq!(transport.mode, TransportMode::Destination);
  assert_eq!(transport.source, PEER_BAM);
  assert_eq!(transport.source_pipe, 12);
  assert_eq!(transport.destination, OWN_BAM);
  assert_eq!(transport.destination_pipe, 0);
}

#[test]
fn connecting_the_same_client_twice_is_refused() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  context.connect(&usb_consumer()).unwrap();
  let second = context.connect(&usb_consumer());
  assert_eq!(second.unwrap_err(), LinkError::ResourceExhausted);

  assert_eq!(context.active_clients(), 1);
  assert_eq!(platform.clocks.enables(), 1);
  assert_eq!(platform.clocks.disables(), 0);
  assert_eq!(platform.transport.live_endpoints(), 1);
}

#[test]
fn zero_fifo_sizes_are_rejected_before_touching_hardware() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let params = ConnectParams::new(ClientKind::UsbConsumer, PEER_BAM, 9).with_fifo_sizes(0x100, 0);
  assert_eq!(context.connect(&params).unwrap_err(), LinkError::InvalidArgument);

  assert_eq!(context.active_clients(), 0);
  assert!(context.is_drained());
  assert_eq!(platform.clocks.enables(), platform.clocks.disables());
  assert_eq!(platform.transport.live_endpoints(), 0);
  assert!(platform.registers.configured_pipes().is_empty());
}

#[test]
fn tethered_mode_drops_the_embedded_modem_mapping() {
  let platform = VirtualPlatform::new();
  let config = LinkConfig::new(PlatformMode::Normal, OWN_BAM).with_operation(OperationMode::UsbTethered);
  let context = platform.context(config);

  let params = ConnectParams::new(ClientKind::A2EmbeddedConsumer, PEER_BAM, 3).with_fifo_sizes(0x100, 0x400);
  assert_eq!(context.connect(&params).unwrap_err(), LinkError::ResourceExhausted);
  assert!(context.is_drained());

  // the tethered client still routes
  let params = ConnectParams::new(ClientKind::A2TetheredConsumer, PEER_BAM, 3).with_fifo_sizes(0x100, 0x400);
  assert_eq!(context.connect(&params).unwrap().pipe_index, 5);
}

#[test]
fn disconnect_releases_everything_and_the_pipe_can_reconnect() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let outcome = context.connect(&usb_consumer()).unwrap();
  context.disconnect(outcome.handle).unwrap();

  assert!(context.is_drained());
  assert_eq!(context.active_clients(), 0);
  assert!(!platform.clocks.is_on());
  assert_eq!(platform.transport.live_endpoints(), 0);
  assert_eq!(platform.dma.outstanding(), 0);
  assert_eq!(platform.dma.unbalanced_frees(), 0);
  assert_eq!(context.disconnect(outcome.handle).unwrap_err(), LinkError::InvalidArgument);

  let again = context.connect(&usb_consumer()).unwrap();
  assert_eq!(again.pipe_index, 1);
  acker.finish();
}

#[test]
fn caller_supplied_buffers_are_adopted_and_never_freed() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let params = ConnectParams::new(ClientKind::UsbConsumer, PEER_BAM, 9)
    .with_desc_buffer(0xA000, 0x8_A000, 0x100)
    .with_data_buffer(0xB000, 0x8_B000, 0x400);
  let outcome = context.connect(&params).unwrap();
  assert!(outcome.desc.is_caller_supplied());
  assert!(outcome.data.is_caller_supplied());
  assert_eq!(outcome.data.phys(), 0x8_B000);
  assert_eq!(platform.dma.outstanding(), 0);

  context.disconnect(outcome.handle).unwrap();
  assert_eq!(platform.dma.unbalanced_frees(), 0);
  acker.finish();
}

#[test]
fn pipe_memory_is_preferred_and_dma_backs_the_overflow() {
  let platform = VirtualPlatform::with_pipe_mem_capacity(0x100);
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let params = usb_consumer().prefer_pipe_mem();
  let outcome = context.connect(&params).unwrap();

  assert_eq!(outcome.desc.backing(), FifoBacking::PipeMem { offset: 0 });
  assert_eq!(outcome.data.backing(), FifoBacking::DriverDma);
  assert_eq!(platform.pipe_mem.outstanding(), 1);
  assert_eq!(platform.dma.outstanding(), 1);
}

#[test]
fn head_of_line_blocking_is_disabled_for_hsic_consumers_only() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let params = ConnectParams::new(ClientKind::Hsic1Consumer, PEER_BAM, 2).with_fifo_sizes(0x100, 0x400);
  let outcome = context.connect(&params).unwrap();
  assert_eq!(outcome.pipe_index, 7);
  assert_eq!(platform.registers.value(PipeRegister::HolBlockEnable, 7), 1);
  assert_eq!(
    platform.registers.value(PipeRegister::HolBlockTimer, 7),
    LinkConfig::DEFAULT_HOLB_TIMER
  );

  context.connect(&usb_consumer()).unwrap();
  assert!(platform.registers.writes_to(PipeRegister::HolBlockEnable, 1).is_empty());
}

#[derive(Default)]
struct RecordingNotify {
  events: Mutex<Vec<(u64, EndpointEvent)>>,
}

impl EndpointNotify for RecordingNotify {
  fn notify(&self, context: u64, event: EndpointEvent) {
    self.events.lock().unwrap().push((context, event));
  }
}

#[test]
fn data_path_events_reach_the_registered_callback() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let notify = Arc::new(RecordingNotify::default());
  let params = usb_consumer().with_notify(notify.clone(), 0x42);
  let outcome = context.connect(&params).unwrap();

  context.notify_client(outcome.handle, EndpointEvent::ReceiveReady);
  context.notify_client(outcome.handle, EndpointEvent::WriteDone);
  assert_eq!(
    notify.events.lock().unwrap().as_slice(),
    &[(0x42, EndpointEvent::ReceiveReady), (0x42, EndpointEvent::WriteDone)]
  );

  context.disconnect(outcome.handle).unwrap();
  context.notify_client(outcome.handle, EndpointEvent::WriteDone);
  assert_eq!(notify.events.lock().unwrap().len(), 2);
  acker.finish();
}
