//! Host capability: capture control and byte sink.
//!
//! The driver is polymorphic over the host transport. Any concrete adapter
//! (serial line, network socket, in-memory buffer) implements [`Host`];
//! [`MemoryHost`] is a scripted implementation for deterministic tests and
//! the demo binary.

use std::collections::VecDeque;

/// Capability the driver consumes from its host.
///
/// `got_start_request` is polled only while idle, `got_stop_request` only
/// while a capture is in flight and not yet complete. `send_byte` is called
/// once per extracted byte, in frame order, and must not block indefinitely.
pub trait Host {
    /// True when the host wants a capture session to begin.
    fn got_start_request(&mut self) -> bool;

    /// True when the host wants the in-flight session aborted.
    fn got_stop_request(&mut self) -> bool;

    /// Receives one byte of the extracted frame.
    fn send_byte(&mut self, byte: u8);
}

/// Scripted in-memory host.
///
/// Start and stop requests are queued ahead of time and consumed one per
/// poll; emitted bytes are collected for inspection.
#[derive(Debug, Default)]
pub struct MemoryHost {
    start_requests: VecDeque<bool>,
    stop_requests: VecDeque<bool>,
    received: Vec<u8>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for one future `got_start_request` poll.
    pub fn push_start(&mut self, request: bool) {
        self.start_requests.push_back(request);
    }

    /// Queues the answer for one future `got_stop_request` poll.
    pub fn push_stop(&mut self, request: bool) {
        self.stop_requests.push_back(request);
    }

    /// Bytes received so far, in emission order.
    #[inline]
    pub fn received(&self) -> &[u8] {
        &self.received
    }

    /// Drops collected bytes, keeping queued requests.
    pub fn clear_received(&mut self) {
        self.received.clear();
    }
}

impl Host for MemoryHost {
    fn got_start_request(&mut self) -> bool {
        self.start_requests.pop_front().unwrap_or(false)
    }

    fn got_stop_request(&mut self) -> bool {
        self.stop_requests.pop_front().unwrap_or(false)
    }

    fn send_byte(&mut self, byte: u8) {
        self.received.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_requests_consumed_in_order() {
        let mut host = MemoryHost::new();
        host.push_start(false);
        host.push_start(true);

        assert!(!host.got_start_request());
        assert!(host.got_start_request());
        // Exhausted script reads as no request.
        assert!(!host.got_start_request());
    }

    #[test]
    fn test_bytes_collected_in_order() {
        let mut host = MemoryHost::new();
        host.send_byte(0x01);
        host.send_byte(0x02);
        assert_eq!(host.received(), &[0x01, 0x02]);
    }
}
