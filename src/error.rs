use core::fmt;

/// Error returned when handing a shim's text to a sink fails.
///
/// Producing a shim never fails; only the sink side of the seam can.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A [`fmt::Write`] sink refused the text.
    #[error("formatter sink rejected the text")]
    Fmt(#[from] fmt::Error),

    /// An [`io::Write`](std::io::Write) sink failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A fixed-capacity sink has no room for the text.
    #[error("sink has room for {available} more units, text needs {required}")]
    Capacity {
        /// Units the text needs.
        required: usize,
        /// Units still free in the sink.
        available: usize,
    },

    /// The shim produced a unit that is not a single-byte character.
    #[error("shim produced unit {unit:#x}, which is not a single-byte character")]
    InvalidText {
        /// The offending unit.
        unit: u32,
    },
}
