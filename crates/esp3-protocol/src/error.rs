//! Protocol error types.

use thiserror::Error;

use crate::packet::PacketType;

/// The frame region a checksum belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcRegion {
    /// CRC over the four header bytes.
    Header,
    /// CRC over the data and optional data regions.
    Data,
}

impl std::fmt::Display for CrcRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrcRegion::Header => write!(f, "header"),
            CrcRegion::Data => write!(f, "data"),
        }
    }
}

/// Errors that can occur when working with ESP3 frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Esp3Error {
    /// Fewer bytes are available than the frame declares. Not fatal for a
    /// stream: retry once more data has arrived.
    #[error("truncated frame: expected at least {needed} bytes, got {available}")]
    Truncated {
        /// Number of bytes the frame requires.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// A checksum did not match the received bytes. The frame is corrupt
    /// and must be discarded.
    #[error("{region} checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Which frame region failed validation.
        region: CrcRegion,
        /// Checksum computed over the received bytes.
        expected: u8,
        /// Checksum carried by the frame.
        actual: u8,
    },

    /// The buffer does not start with the sync byte.
    #[error("missing sync byte: got 0x{0:02X}")]
    MissingSync(u8),

    /// A payload region exceeds its one-byte length budget.
    #[error("{field} too long: maximum {max} bytes, got {actual}")]
    PayloadTooLong {
        /// Name of the offending region.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
        /// Actual length supplied.
        actual: usize,
    },

    /// A packet was reinterpreted as a type it does not carry.
    #[error("incompatible packet type: expected {expected}, got {actual}")]
    IncompatiblePacketType {
        /// The packet type required by the reinterpretation.
        expected: PacketType,
        /// The packet's actual type.
        actual: PacketType,
    },
}
