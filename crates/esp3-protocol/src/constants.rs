//! Protocol constants
//!
//! These constants define the frame markers, packet type discriminants,
//! return codes, and other protocol-specific values used in ESP3.

// ============================================================================
// Framing
// ============================================================================

/// Frame synchronization byte. Every ESP3 frame starts with this marker.
pub const SYNC_BYTE: u8 = 0x55;

/// Size of the frame header: data_len(2) + opt_len(1) + packet_type(1).
pub const HEADER_SIZE: usize = 4;

/// Minimum number of bytes in a complete frame:
/// sync(1) + header(4) + header_crc8(1) + data_crc8(1).
pub const MIN_FRAME_SIZE: usize = 7;

/// Maximum length of the data region.
pub const MAX_DATA_SIZE: usize = 255;

/// Maximum length of the optional data region.
pub const MAX_OPT_DATA_SIZE: usize = 255;

// ============================================================================
// Packet Types
// ============================================================================

/// Radio telegram (ERP1).
pub const PACKET_TYPE_RADIO_ERP1: u8 = 0x01;
/// Response to any host command.
pub const PACKET_TYPE_RESPONSE: u8 = 0x02;
/// Radio sub-telegram (raw sub-telegram info, internal use).
pub const PACKET_TYPE_RADIO_SUB_TEL: u8 = 0x03;
/// Asynchronous event from the transceiver.
pub const PACKET_TYPE_EVENT: u8 = 0x04;
/// Common command (host → transceiver configuration).
pub const PACKET_TYPE_COMMON_COMMAND: u8 = 0x05;
/// Smart Acknowledge command.
pub const PACKET_TYPE_SMART_ACK_COMMAND: u8 = 0x06;
/// Remote management command.
pub const PACKET_TYPE_REMOTE_MAN_COMMAND: u8 = 0x07;
/// Radio message (chained radio data).
pub const PACKET_TYPE_RADIO_MESSAGE: u8 = 0x09;
/// Advanced radio protocol telegram (ERP2).
pub const PACKET_TYPE_RADIO_ADVANCED: u8 = 0x0A;

// ============================================================================
// Response Return Codes
// ============================================================================

/// Command succeeded.
pub const RET_OK: u8 = 0x00;
/// Generic command failure.
pub const RET_ERROR: u8 = 0x01;
/// Command not supported by this transceiver.
pub const RET_NOT_SUPPORTED: u8 = 0x02;
/// A command parameter was out of range.
pub const RET_WRONG_PARAM: u8 = 0x03;
/// Command denied in the current transceiver state.
pub const RET_OPERATION_DENIED: u8 = 0x04;

// ============================================================================
// Radio Opt-Data Defaults
// ============================================================================

/// Sub-telegram count used when transmitting.
pub const SUBTEL_NUM_SEND: u8 = 0x03;
/// Signal strength placeholder used when transmitting.
pub const DBM_SEND: u8 = 0xFF;
/// Security level: telegram is unencrypted.
pub const SECURITY_LEVEL_NONE: u8 = 0x00;
