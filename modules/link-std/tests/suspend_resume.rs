use std::sync::Arc;
use std::time::{Duration, Instant};

use pipelink_core_rs::hal::PipeRegister;
use pipelink_core_rs::{
  AggrConfig, BamHandle, ClientKind, ConnectParams, EndpointConfig, LinkConfig, LinkError, PlatformMode,
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
fn suspend_blocks_the_pipe_and_waits_for_the_drain_ack() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let outcome = context.connect(&usb_consumer()).unwrap();
  context.suspend(outcome.handle).unwrap();

  assert!(context.is_suspended(outcome.handle));
  assert_eq!(platform.registers.value(PipeRegister::Ctrl, outcome.pipe_index), 1);
  assert_eq!(platform.commands.sent_count(), 1);
  assert_eq!(acker.finish(), 1);
}

#[test]
fn suspending_twice_skips_the_second_tag_round_trip() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let outcome = context.connect(&usb_consumer()).unwrap();
  context.suspend(outcome.handle).unwrap();
  context.suspend(outcome.handle).unwrap();

  assert_eq!(platform.commands.sent_count(), 1);
  assert!(context.is_suspended(outcome.handle));
  acker.finish();
}

#[test]
fn resume_reopens_the_pipe_and_is_idempotent() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let outcome = context.connect(&usb_consumer()).unwrap();
  context.suspend(outcome.handle).unwrap();
  context.resume(outcome.handle).unwrap();

  assert!(!context.is_suspended(outcome.handle));
  assert_eq!(platform.registers.value(PipeRegister::Ctrl, outcome.pipe_index), 0);

  context.resume(outcome.handle).unwrap();
  assert!(!context.is_suspended(outcome.handle));
  acker.finish();
}

#[test]
fn a_rejected_tag_command_reopens_the_pipe() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM));

  let outcome = context.connect(&usb_consumer()).unwrap();
  platform.commands.reject();

  assert_eq!(context.suspend(outcome.handle).unwrap_err(), LinkError::OperationFailed);
  assert!(!context.is_suspended(outcome.handle));
  assert_eq!(platform.registers.writes_to(PipeRegister::Ctrl, outcome.pipe_index), vec![1, 0]);
}

#[test]
fn an_unacknowledged_tag_times_out_and_reopens_the_pipe() {
  let platform = VirtualPlatform::new();
  let config = LinkConfig::new(PlatformMode::Normal, OWN_BAM).with_tag_timeout(Duration::from_millis(50));
  let context = platform.context(config);

  let outcome = context.connect(&usb_consumer()).unwrap();
  assert_eq!(context.suspend(outcome.handle).unwrap_err(), LinkError::Timeout);
  assert!(!context.is_suspended(outcome.handle));
  assert_eq!(platform.registers.writes_to(PipeRegister::Ctrl, outcome.pipe_index), vec![1, 0]);

  // a late hardware ack for the abandoned tag is ignored
  let stale = platform.commands.sent().pop().unwrap();
  assert!(!context.complete_tag(stale));
}

#[test]
fn suspend_lingers_for_the_aggregation_flush_window() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let config = EndpointConfig {
    aggr: AggrConfig { enabled: true, time_limit_ms: 30 },
    ..EndpointConfig::default()
  };
  let outcome = context.connect(&usb_consumer().with_config(config)).unwrap();

  let started = Instant::now();
  context.suspend(outcome.handle).unwrap();
  assert!(started.elapsed() >= Duration::from_millis(30));
  assert!(context.is_suspended(outcome.handle));
  acker.finish();
}

#[test]
fn producers_do_not_wait_out_the_aggregation_window() {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, OWN_BAM)));
  let acker = TagAcker::spawn(context.clone(), platform.commands.clone());

  let config = EndpointConfig {
    aggr: AggrConfig { enabled: true, time_limit_ms: 5_000 },
    ..EndpointConfig::default()
  };
  let params = ConnectParams::new(ClientKind::UsbProducer, PEER_BAM, 12)
    .with_fifo_sizes(0x100, 0x400)
    .with_config(config);
  let outcome = context.connect(&params).unwrap();

  let started = Instant::now();
  context.suspend(outcome.handle).unwrap();
  assert!(started.elapsed() < Duration::from_secs(1));
  acker.finish();
}

#[test]
fn a_virtual_platform_skips_clocks_and_quiesce_entirely() {
  let platform = VirtualPlatform::new();
  let context = platform.context(LinkConfig::new(PlatformMode::Virtual, OWN_BAM));

  let outcome = context.connect(&usb_consumer()).unwrap();
  assert_eq!(platform.clocks.enables(), 0);

  context.suspend(outcome.handle).unwrap();
  assert!(!context.is_suspended(outcome.handle));
  assert_eq!(platform.commands.sent_count(), 0);
  assert!(platform.registers.writes_to(PipeRegister::Ctrl, outcome.pipe_index).is_empty());

  context.resume(outcome.handle).unwrap();

  // no tag round-trip is needed to tear down
  context.disconnect(outcome.handle).unwrap();
  assert!(context.is_drained());
  assert_eq!(platform.clocks.disables(), 0);
}
