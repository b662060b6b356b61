#![cfg(test)]

use std::thread;
use std::time::{Duration, Instant};

use pipelink_core_rs::TagSignal;

use super::CondvarTagSignal;

#[test]
fn wait_returns_true_once_completed() {
  let signal = CondvarTagSignal::new();
  let waiter = signal.clone();

  let handle = thread::spawn(move || waiter.wait_timeout(Duration::from_secs(5)));
  thread::sleep(Duration::from_millis(10));
  signal.complete();

  assert!(handle.join().unwrap());
}

#[test]
fn wait_times_out_when_never_completed() {
  let signal = CondvarTagSignal::new();
  let started = Instant::now();
  assert!(!signal.wait_timeout(Duration::from_millis(30)));
  assert!(started.elapsed() >= Duration::from_millis(30));
}

#[test]
fn complete_before_wait_is_not_lost() {
  let signal = CondvarTagSignal::new();
  signal.complete();
  assert!(signal.wait_timeout(Duration::from_millis(1)));
}
