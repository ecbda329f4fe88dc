//! Frame extraction strategies.
//!
//! Two structurally different ways to drain the FIFO once a capture
//! completes: raw frames have an exact byte count known at configuration
//! time, compressed frames are length-bounded with in-stream end-marker
//! detection. Both run inside a single burst-read scope and forward bytes
//! to the host sink in order.

pub(crate) mod jpeg;
pub(crate) mod raw;
