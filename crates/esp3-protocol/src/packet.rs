//! ESP3 packet type and the byte-level codec.
//!
//! A [`Packet`] is the in-memory form of one ESP3 frame. [`Packet::encode`]
//! produces the exact wire bytes including sync marker and both checksums;
//! [`Packet::decode`] is the strict one-shot inverse over a complete frame.
//! For reassembling frames out of an arbitrarily chunked serial stream, use
//! [`FrameCodec`](crate::FrameCodec) instead.

use crate::constants::*;
use crate::crc8::crc8;
use crate::error::{CrcRegion, Esp3Error};

// ============================================================================
// Packet Type
// ============================================================================

/// ESP3 packet type discriminant.
///
/// Unrecognized discriminants are preserved as [`PacketType::Unknown`] so
/// that newer transceiver firmware does not break the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketType {
    /// Radio telegram (ERP1).
    RadioErp1,
    /// Response to any host command.
    Response,
    /// Radio sub-telegram.
    RadioSubTel,
    /// Asynchronous event.
    Event,
    /// Common command.
    CommonCommand,
    /// Smart Acknowledge command.
    SmartAckCommand,
    /// Remote management command.
    RemoteManCommand,
    /// Radio message.
    RadioMessage,
    /// Advanced radio protocol telegram (ERP2).
    RadioAdvanced,
    /// Unrecognized packet type, raw discriminant preserved.
    Unknown(u8),
}

impl PacketType {
    /// Get the wire discriminant for this packet type.
    pub fn code(&self) -> u8 {
        match self {
            PacketType::RadioErp1 => PACKET_TYPE_RADIO_ERP1,
            PacketType::Response => PACKET_TYPE_RESPONSE,
            PacketType::RadioSubTel => PACKET_TYPE_RADIO_SUB_TEL,
            PacketType::Event => PACKET_TYPE_EVENT,
            PacketType::CommonCommand => PACKET_TYPE_COMMON_COMMAND,
            PacketType::SmartAckCommand => PACKET_TYPE_SMART_ACK_COMMAND,
            PacketType::RemoteManCommand => PACKET_TYPE_REMOTE_MAN_COMMAND,
            PacketType::RadioMessage => PACKET_TYPE_RADIO_MESSAGE,
            PacketType::RadioAdvanced => PACKET_TYPE_RADIO_ADVANCED,
            PacketType::Unknown(code) => *code,
        }
    }

    /// Whether this is a radio packet carrying an ERP1 telegram.
    pub fn is_radio(&self) -> bool {
        matches!(self, PacketType::RadioErp1 | PacketType::RadioSubTel)
    }
}

impl From<u8> for PacketType {
    fn from(code: u8) -> Self {
        match code {
            PACKET_TYPE_RADIO_ERP1 => PacketType::RadioErp1,
            PACKET_TYPE_RESPONSE => PacketType::Response,
            PACKET_TYPE_RADIO_SUB_TEL => PacketType::RadioSubTel,
            PACKET_TYPE_EVENT => PacketType::Event,
            PACKET_TYPE_COMMON_COMMAND => PacketType::CommonCommand,
            PACKET_TYPE_SMART_ACK_COMMAND => PacketType::SmartAckCommand,
            PACKET_TYPE_REMOTE_MAN_COMMAND => PacketType::RemoteManCommand,
            PACKET_TYPE_RADIO_MESSAGE => PacketType::RadioMessage,
            PACKET_TYPE_RADIO_ADVANCED => PacketType::RadioAdvanced,
            code => PacketType::Unknown(code),
        }
    }
}

impl std::fmt::Display for PacketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PacketType::RadioErp1 => write!(f, "RADIO_ERP1"),
            PacketType::Response => write!(f, "RESPONSE"),
            PacketType::RadioSubTel => write!(f, "RADIO_SUB_TEL"),
            PacketType::Event => write!(f, "EVENT"),
            PacketType::CommonCommand => write!(f, "COMMON_COMMAND"),
            PacketType::SmartAckCommand => write!(f, "SMART_ACK_COMMAND"),
            PacketType::RemoteManCommand => write!(f, "REMOTE_MAN_COMMAND"),
            PacketType::RadioMessage => write!(f, "RADIO_MESSAGE"),
            PacketType::RadioAdvanced => write!(f, "RADIO_ADVANCED"),
            PacketType::Unknown(code) => write!(f, "UNKNOWN(0x{:02X})", code),
        }
    }
}

// ============================================================================
// Packet
// ============================================================================

/// One ESP3 frame in memory.
///
/// The sync byte and both CRCs exist only on the wire: they are produced by
/// [`Packet::encode`] and validated by [`Packet::decode`], never stored.
/// Both payload regions are bounded to 255 bytes at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    packet_type: PacketType,
    data: Vec<u8>,
    opt_data: Vec<u8>,
}

impl Packet {
    /// Create a packet from typed fields.
    ///
    /// Fails with [`Esp3Error::PayloadTooLong`] if either region exceeds
    /// its one-byte length budget.
    pub fn new(
        packet_type: PacketType,
        data: Vec<u8>,
        opt_data: Vec<u8>,
    ) -> Result<Self, Esp3Error> {
        if data.len() > MAX_DATA_SIZE {
            return Err(Esp3Error::PayloadTooLong {
                field: "data",
                max: MAX_DATA_SIZE,
                actual: data.len(),
            });
        }
        if opt_data.len() > MAX_OPT_DATA_SIZE {
            return Err(Esp3Error::PayloadTooLong {
                field: "opt_data",
                max: MAX_OPT_DATA_SIZE,
                actual: opt_data.len(),
            });
        }
        Ok(Packet {
            packet_type,
            data,
            opt_data,
        })
    }

    /// The packet type discriminant.
    pub fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// The data region.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The optional data region.
    pub fn opt_data(&self) -> &[u8] {
        &self.opt_data
    }

    /// Encode the packet to wire bytes.
    ///
    /// Layout: `[sync][len_hi][len_lo][opt_len][type][crc8h][data][opt_data][crc8d]`.
    /// Encoding the same packet twice yields identical bytes.
    pub fn encode(&self) -> Vec<u8> {
        let data_len = self.data.len();
        let mut buf = Vec::with_capacity(MIN_FRAME_SIZE + data_len + self.opt_data.len());

        buf.push(SYNC_BYTE);
        buf.push((data_len >> 8) as u8);
        buf.push(data_len as u8);
        buf.push(self.opt_data.len() as u8);
        buf.push(self.packet_type.code());
        buf.push(crc8(&buf[1..5]));
        buf.extend_from_slice(&self.data);
        buf.extend_from_slice(&self.opt_data);
        buf.push(crc8(&buf[6..]));

        buf
    }

    /// Decode a complete frame.
    ///
    /// Validates the sync byte first, then the header checksum, then the
    /// declared region lengths, then the data checksum. The returned
    /// packet's regions are owned copies; the source buffer may be reused.
    pub fn decode(bytes: &[u8]) -> Result<Packet, Esp3Error> {
        if bytes.is_empty() {
            return Err(Esp3Error::Truncated {
                needed: MIN_FRAME_SIZE,
                available: 0,
            });
        }
        if bytes[0] != SYNC_BYTE {
            return Err(Esp3Error::MissingSync(bytes[0]));
        }
        if bytes.len() < MIN_FRAME_SIZE - 1 {
            return Err(Esp3Error::Truncated {
                needed: MIN_FRAME_SIZE,
                available: bytes.len(),
            });
        }

        let header = &bytes[1..1 + HEADER_SIZE];
        let header_crc = bytes[1 + HEADER_SIZE];
        let computed = crc8(header);
        if computed != header_crc {
            return Err(Esp3Error::ChecksumMismatch {
                region: CrcRegion::Header,
                expected: computed,
                actual: header_crc,
            });
        }

        let data_len = ((header[0] as usize) << 8) | header[1] as usize;
        let opt_len = header[2] as usize;
        let total = MIN_FRAME_SIZE + data_len + opt_len;
        if bytes.len() < total {
            return Err(Esp3Error::Truncated {
                needed: total,
                available: bytes.len(),
            });
        }

        let body = &bytes[6..6 + data_len + opt_len];
        let data_crc = bytes[total - 1];
        let computed = crc8(body);
        if computed != data_crc {
            return Err(Esp3Error::ChecksumMismatch {
                region: CrcRegion::Data,
                expected: computed,
                actual: data_crc,
            });
        }

        Ok(Packet {
            packet_type: PacketType::from(header[3]),
            data: body[..data_len].to_vec(),
            opt_data: body[data_len..].to_vec(),
        })
    }
}
