//! Profile and attribute error types.

use thiserror::Error;

use crate::identifier::EepId;

/// Errors that can occur while resolving profiles or decoding attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EepError {
    /// A bit-field read or write would cross the end of the payload.
    #[error(
        "bit field out of range: offset {offset} width {width} in a {payload_bits}-bit payload"
    )]
    OutOfRange {
        /// Bit offset of the field, MSB-first from payload byte 0.
        offset: usize,
        /// Width of the field in bits.
        width: usize,
        /// Total number of payload bits available.
        payload_bits: usize,
    },

    /// The telegram's overall length does not fit the profile. The whole
    /// decode fails; nothing was extracted.
    #[error("invalid telegram length for {eep}: {actual} bytes")]
    InvalidTelegramLength {
        /// The profile that rejected the telegram.
        eep: EepId,
        /// Length of the rejected payload.
        actual: usize,
    },

    /// No profile is registered for this identifier.
    #[error("no profile registered for {0}")]
    ProfileNotFound(EepId),
}
