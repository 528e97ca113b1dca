//! Parsed view of a radio packet's contents.
//!
//! The data region of an ERP1 radio packet carries one telegram:
//!
//! | Field   | Size (bytes)  | Description                          |
//! |---------|---------------|--------------------------------------|
//! | rorg    | 1             | Radio ORGanization (telegram class). |
//! | payload | data_len - 6  | Profile-specific payload bits.       |
//! | sender  | 4             | Radio address of the originator.     |
//! | status  | 1             | Repeater count and integrity flags.  |
//!
//! The optional data region, when present, carries reception metadata:
//! `subtel_count(1) | destination(4) | dBm(1) | security_level(1)`.

use crate::error::Esp3Error;
use crate::packet::{Packet, PacketType};
use crate::types::DeviceAddress;

/// Minimum data region length: rorg + empty payload + sender + status.
const MIN_TELEGRAM_SIZE: usize = 6;

/// Length of the standard radio opt-data region.
const RADIO_OPT_SIZE: usize = 7;

/// A radio telegram extracted from an ESP3 packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioTelegram {
    /// Radio ORGanization byte (telegram class).
    pub rorg: u8,
    /// Profile-specific payload.
    pub payload: Vec<u8>,
    /// Address of the sending device.
    pub sender: DeviceAddress,
    /// Status byte (repeater count, integrity control).
    pub status: u8,
    /// Number of sub-telegrams received (None without opt-data).
    pub subtel_count: Option<u8>,
    /// Destination address (broadcast for most sensor telegrams).
    pub destination: Option<DeviceAddress>,
    /// Best received signal strength, in -dBm.
    pub dbm: Option<u8>,
    /// Security level the telegram was received with.
    pub security_level: Option<u8>,
}

impl RadioTelegram {
    /// Parse the telegram out of a radio packet.
    ///
    /// Accepts [`PacketType::RadioErp1`] and [`PacketType::RadioSubTel`]
    /// packets; anything else fails with
    /// [`Esp3Error::IncompatiblePacketType`]. A data region shorter than
    /// the fixed telegram fields fails with [`Esp3Error::Truncated`].
    pub fn from_packet(packet: &Packet) -> Result<Self, Esp3Error> {
        if !packet.packet_type().is_radio() {
            return Err(Esp3Error::IncompatiblePacketType {
                expected: PacketType::RadioErp1,
                actual: packet.packet_type(),
            });
        }

        let data = packet.data();
        if data.len() < MIN_TELEGRAM_SIZE {
            return Err(Esp3Error::Truncated {
                needed: MIN_TELEGRAM_SIZE,
                available: data.len(),
            });
        }

        let payload_end = data.len() - 5;
        let mut sender = [0u8; 4];
        sender.copy_from_slice(&data[payload_end..payload_end + 4]);
        let sender = DeviceAddress::new(sender);

        let opt = packet.opt_data();
        let (subtel_count, destination, dbm, security_level) = if opt.len() >= RADIO_OPT_SIZE {
            (
                Some(opt[0]),
                DeviceAddress::from_slice(&opt[1..5]),
                Some(opt[5]),
                Some(opt[6]),
            )
        } else {
            (None, None, None, None)
        };

        Ok(RadioTelegram {
            rorg: data[0],
            payload: data[1..payload_end].to_vec(),
            sender,
            status: data[data.len() - 1],
            subtel_count,
            destination,
            dbm,
            security_level,
        })
    }
}

impl std::fmt::Display for RadioTelegram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rorg=0x{:02X} sender={} payload={}",
            self.rorg,
            self.sender,
            hex::encode_upper(&self.payload)
        )
    }
}
