//! Drives one USB downlink pipe through its full lifecycle against the
//! in-memory platform, with a thread standing in for the hardware ack path.
//!
//! ```shell
//! cargo run --example usb_link
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pipelink_core_rs::{
  BamHandle, ClientKind, ConnectParams, EndpointEvent, EndpointNotify, LinkConfig, LinkError, PlatformMode,
};
use pipelink_std_rs::virtual_platform::VirtualPlatform;

struct PrintingNotify;

impl EndpointNotify for PrintingNotify {
  fn notify(&self, context: u64, event: EndpointEvent) {
    println!("client {context:#x}: {event:?}");
  }
}

fn main() -> Result<(), LinkError> {
  let platform = VirtualPlatform::new();
  let context = Arc::new(platform.context(LinkConfig::new(PlatformMode::Normal, BamHandle::new(7))));

  // hardware ack path: acknowledge every tag the command engine emits
  let stop = Arc::new(AtomicBool::new(false));
  let acker = thread::spawn({
    let context = context.clone();
    let commands = platform.commands.clone();
    let stop = stop.clone();
    move || {
      while !stop.load(Ordering::SeqCst) {
        for tag in commands.sent() {
          context.complete_tag(tag);
        }
        thread::sleep(Duration::from_millis(1));
      }
    }
  });

  let params = ConnectParams::new(ClientKind::UsbConsumer, BamHandle::new(40), 9)
    .with_fifo_sizes(0x100, 0x400)
    .with_notify(Arc::new(PrintingNotify), 0x42);
  let outcome = context.connect(&params)?;
  println!("connected {} on pipe {} of bam {:?}", outcome.handle, outcome.pipe_index, outcome.bam);

  context.notify_client(outcome.handle, EndpointEvent::ReceiveReady);

  context.suspend(outcome.handle)?;
  println!("suspended: {}", context.is_suspended(outcome.handle));
  context.resume(outcome.handle)?;

  context.disconnect(outcome.handle)?;
  println!("drained: {}", context.is_drained());

  stop.store(true, Ordering::SeqCst);
  let _ = acker.join();
  Ok(())
}
