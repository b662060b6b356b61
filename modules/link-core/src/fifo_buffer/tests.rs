#![cfg(test)]

use super::FifoBuffer;
use crate::fifo_backing::FifoBacking;

#[test]
fn constructors_stamp_the_matching_backing() {
  assert_eq!(FifoBuffer::caller_supplied(1, 2, 3).backing(), FifoBacking::CallerSupplied);
  assert_eq!(FifoBuffer::driver_dma(1, 2, 3).backing(), FifoBacking::DriverDma);
  assert_eq!(FifoBuffer::pipe_mem(1, 2, 3, 64).backing(), FifoBacking::PipeMem { offset: 64 });
}

#[test]
fn only_caller_supplied_buffers_are_exempt_from_freeing() {
  assert!(FifoBuffer::caller_supplied(0, 0, 4096).is_caller_supplied());
  assert!(!FifoBuffer::driver_dma(0, 0, 4096).is_caller_supplied());
  assert!(!FifoBuffer::pipe_mem(0, 0, 4096, 0).is_caller_supplied());
}
