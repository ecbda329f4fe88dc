//! Marker-delimited compressed frame extraction.

use crate::bus::Bus;
use crate::fifo::BurstReader;
use crate::host::Host;

/// JPEG end-of-image marker pair.
const MARKER_FIRST: u8 = 0xFF;
const MARKER_SECOND: u8 = 0xD9;

/// Drains a compressed frame, bounded by the hardware-reported length and
/// terminated early by the end-of-image marker.
///
/// Every byte is emitted as read, including the marker pair itself. The
/// reported length can include padding past the true payload, so the marker
/// ends the frame; conversely the reported length bounds the read even when
/// no marker appears. Returns the number of bytes emitted.
///
/// The sliding window is seeded with values that cannot match the marker,
/// and termination requires at least two real bytes, so a frame starting
/// with the marker's second byte never ends the read on byte one.
pub(crate) fn extract<B: Bus, H: Host>(bus: &mut B, host: &mut H, length: u32) -> u32 {
    let mut burst = BurstReader::begin(bus);
    let mut prev = 0x00u8;
    let mut cur = 0x00u8;
    let mut emitted = 0u32;

    while emitted < length {
        prev = cur;
        cur = burst.read_byte();
        host.send_byte(cur);
        emitted += 1;

        if emitted >= 2 && prev == MARKER_FIRST && cur == MARKER_SECOND {
            break;
        }
    }

    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::MockBus;
    use crate::host::MemoryHost;
    use proptest::prelude::*;

    fn run(frame: Vec<u8>, reported: u32) -> Vec<u8> {
        let mut bus = MockBus::new();
        bus.load_frame(frame);
        let mut host = MemoryHost::new();
        extract(&mut bus, &mut host, reported);
        host.received().to_vec()
    }

    #[test]
    fn test_stops_at_marker_discarding_padding() {
        let frame = vec![0xFF, 0xD8, 0x11, 0x22, 0xFF, 0xD9, 0xAA, 0xBB];
        let emitted = run(frame, 8);
        assert_eq!(emitted, &[0xFF, 0xD8, 0x11, 0x22, 0xFF, 0xD9]);
    }

    #[test]
    fn test_length_bound_without_marker() {
        let frame = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let emitted = run(frame, 4);
        assert_eq!(emitted, &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_marker_in_first_two_bytes_terminates() {
        // A pair at index 1 is the earliest legal termination point.
        let emitted = run(vec![0xFF, 0xD9, 0x33], 3);
        assert_eq!(emitted, &[0xFF, 0xD9]);
    }

    #[test]
    fn test_leading_second_marker_byte_does_not_terminate() {
        // 0xD9 as the very first byte must not pair with the window seed.
        let emitted = run(vec![0xD9, 0x01, 0x02], 3);
        assert_eq!(emitted, &[0xD9, 0x01, 0x02]);
    }

    #[test]
    fn test_split_marker_across_reads_detected() {
        let emitted = run(vec![0x00, 0xFF, 0xD9, 0x44], 4);
        assert_eq!(emitted, &[0x00, 0xFF, 0xD9]);
    }

    proptest! {
        /// Emission never exceeds the reported length and always ends at the
        /// earliest marker pair at index >= 1.
        #[test]
        fn prop_termination(frame in proptest::collection::vec(any::<u8>(), 0..512)) {
            let reported = frame.len() as u32;
            let emitted = run(frame.clone(), reported);

            prop_assert!(emitted.len() <= frame.len());

            let earliest = frame
                .windows(2)
                .position(|w| w == [MARKER_FIRST, MARKER_SECOND]);
            match earliest {
                Some(i) => prop_assert_eq!(emitted.len(), i + 2),
                None => prop_assert_eq!(emitted.len(), frame.len()),
            }
        }
    }
}
