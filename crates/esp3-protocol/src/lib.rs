//! EnOcean Serial Protocol 3 (ESP3)
//!
//! This crate provides types and utilities for exchanging ESP3 packets with
//! an EnOcean transceiver module over a serial link. ESP3 frames carry radio
//! telegrams, command responses, and management commands between the host
//! and the transceiver.
//!
//! # Frame Format
//!
//! | Field        | Size (bytes) | Description                                  |
//! |--------------|--------------|----------------------------------------------|
//! | sync         | 1            | Fixed `0x55` frame marker.                   |
//! | data_len     | 2            | Length of the data region (hi byte first).   |
//! | opt_len      | 1            | Length of the optional data region.          |
//! | packet_type  | 1            | Packet type discriminant.                    |
//! | header_crc8  | 1            | CRC8 over the four header bytes.             |
//! | data         | data_len     | Type-specific payload.                       |
//! | opt_data     | opt_len      | Type-specific metadata (dBm, addresses, ...).|
//! | data_crc8    | 1            | CRC8 over data and opt_data.                 |
//!
//! # Example
//!
//! ```rust,ignore
//! use esp3_protocol::{FrameCodec, Packet, Response};
//!
//! // Reassemble packets from an arbitrarily chunked byte stream
//! let mut codec = FrameCodec::new();
//! codec.push(&received_bytes);
//! while let Some(packet) = codec.next_packet()? {
//!     if let Ok(response) = Response::try_from(&packet) {
//!         println!("transceiver said: {}", response.return_code());
//!     }
//! }
//! ```

mod builders;
mod constants;
mod crc8;
mod error;
mod frame;
mod packet;
mod response;
mod telegram;
mod types;

pub use builders::*;
pub use constants::*;
pub use crc8::*;
pub use error::*;
pub use frame::*;
pub use packet::*;
pub use response::*;
pub use telegram::*;
pub use types::*;
