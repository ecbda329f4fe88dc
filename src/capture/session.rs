//! Capture session plan.

/// Extraction strategy and sizing recorded by a `begin_*` entry point.
///
/// A session plan outlives individual captures: every completed or aborted
/// frame returns the driver to idle with the same plan, ready for the next
/// start request. A new `begin_*` call replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// Fixed-length raw frame. The byte count is computed from the preset
    /// at configuration time.
    Raw {
        /// Exact frame length in bytes.
        length: u32,
    },
    /// Length-delimited compressed frame. The byte count is read from the
    /// hardware length registers when the capture completes.
    Compressed,
}

impl Session {
    /// Short mode name for logging.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Session::Raw { .. } => "raw",
            Session::Compressed => "compressed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(Session::Raw { length: 1 }.mode_name(), "raw");
        assert_eq!(Session::Compressed.mode_name(), "compressed");
    }
}
