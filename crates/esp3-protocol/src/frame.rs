//! Streaming frame reassembly.
//!
//! The serial transport delivers bytes in arbitrary chunks. [`FrameCodec`]
//! accumulates them and yields complete, checksum-validated packets:
//!
//! - bytes before the next sync marker are discarded,
//! - a frame whose header checksum fails is abandoned at its sync byte and
//!   scanning resumes one byte later,
//! - a frame whose data checksum fails is consumed whole (the header
//!   checksum already vouched for the declared lengths),
//! - an incomplete frame stays buffered until more data arrives.

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::crc8::crc8;
use crate::error::{CrcRegion, Esp3Error};
use crate::packet::Packet;

/// Initial capacity of the reassembly buffer.
const BUFFER_CAPACITY: usize = 1024;

/// A codec for reassembling ESP3 packets from a byte stream.
#[derive(Debug, Default)]
pub struct FrameCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameCodec {
    /// Create a new frame codec.
    pub fn new() -> Self {
        FrameCodec {
            buffer: BytesMut::with_capacity(BUFFER_CAPACITY),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to extract the next complete packet from the buffer.
    ///
    /// Returns `Ok(Some(packet))` when a valid frame is available,
    /// `Ok(None)` when more data is needed, or `Err` once per corrupt
    /// frame. After an error the corrupt bytes have already been dropped;
    /// calling again continues with the rest of the stream.
    pub fn next_packet(&mut self) -> Result<Option<Packet>, Esp3Error> {
        loop {
            // Scan for the sync byte, discarding any preceding garbage
            while !self.buffer.is_empty() && self.buffer[0] != SYNC_BYTE {
                self.buffer.advance(1);
            }

            // Need sync + header + header CRC before anything can be checked
            if self.buffer.len() < 1 + HEADER_SIZE + 1 {
                return Ok(None);
            }

            let header = &self.buffer[1..1 + HEADER_SIZE];
            let header_crc = self.buffer[1 + HEADER_SIZE];
            let computed = crc8(header);
            if computed != header_crc {
                // The declared lengths cannot be trusted. Drop the sync byte
                // and rescan; a real frame boundary may start inside what
                // looked like a header.
                self.buffer.advance(1);
                return Err(Esp3Error::ChecksumMismatch {
                    region: CrcRegion::Header,
                    expected: computed,
                    actual: header_crc,
                });
            }

            let data_len = ((header[0] as usize) << 8) | header[1] as usize;
            let opt_len = header[2] as usize;
            let total = MIN_FRAME_SIZE + data_len + opt_len;
            if self.buffer.len() < total {
                return Ok(None);
            }

            let frame = self.buffer.split_to(total);
            match Packet::decode(&frame) {
                Ok(packet) => return Ok(Some(packet)),
                Err(err) => return Err(err),
            }
        }
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
