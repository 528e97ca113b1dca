//! Per-packet-type payload builders.
//!
//! Each builder is a pure function from typed arguments to a
//! `(PacketType, data, opt_data)` triple. Builders never compute checksums;
//! framing and CRC generation belong exclusively to
//! [`Packet::encode`](crate::Packet::encode), so a payload can never be
//! checksummed twice or half-built.
//!
//! All multi-byte integer fields are little-endian. Radio addresses are
//! emitted in transmission order.

use crate::constants::*;
use crate::packet::PacketType;
use crate::response::ReturnCode;
use crate::types::DeviceAddress;

/// A packet's typed content before framing.
pub type PacketParts = (PacketType, Vec<u8>, Vec<u8>);

/// Build an ERP1 radio telegram for transmission.
///
/// Data: `rorg(1) | payload | sender(4) | status(1)`.
/// Opt:  `subtel_num(1) | destination(4) | dBm(1) | security(1)` with the
/// standard transmit values for sub-telegram count and signal strength.
pub fn radio_erp1(
    rorg: u8,
    payload: &[u8],
    sender: DeviceAddress,
    status: u8,
    destination: DeviceAddress,
) -> PacketParts {
    let mut data = Vec::with_capacity(6 + payload.len());
    data.push(rorg);
    data.extend_from_slice(payload);
    data.extend_from_slice(sender.as_bytes());
    data.push(status);

    let mut opt = Vec::with_capacity(7);
    opt.push(SUBTEL_NUM_SEND);
    opt.extend_from_slice(destination.as_bytes());
    opt.push(DBM_SEND);
    opt.push(SECURITY_LEVEL_NONE);

    (PacketType::RadioErp1, data, opt)
}

/// Build a radio sub-telegram.
///
/// Same data layout as [`radio_erp1`]; the optional data carries the
/// observed reception values instead of transmit defaults.
#[allow(clippy::too_many_arguments)]
pub fn radio_sub_tel(
    rorg: u8,
    payload: &[u8],
    sender: DeviceAddress,
    status: u8,
    subtel_count: u8,
    destination: DeviceAddress,
    dbm: u8,
    security_level: u8,
) -> PacketParts {
    let mut data = Vec::with_capacity(6 + payload.len());
    data.push(rorg);
    data.extend_from_slice(payload);
    data.extend_from_slice(sender.as_bytes());
    data.push(status);

    let mut opt = Vec::with_capacity(7);
    opt.push(subtel_count);
    opt.extend_from_slice(destination.as_bytes());
    opt.push(dbm);
    opt.push(security_level);

    (PacketType::RadioSubTel, data, opt)
}

/// Build an advanced (ERP2) radio telegram.
///
/// Data: the raw ERP2 telegram. Opt: `subtel_num(1) | dBm(1)`.
pub fn radio_advanced(raw_telegram: &[u8], subtel_num: u8, dbm: u8) -> PacketParts {
    (
        PacketType::RadioAdvanced,
        raw_telegram.to_vec(),
        vec![subtel_num, dbm],
    )
}

/// Build a radio message.
///
/// Data: `rorg(1) | message`. Opt: `destination(4) | source(4) | dBm(1)`.
pub fn radio_message(
    rorg: u8,
    message: &[u8],
    destination: DeviceAddress,
    source: DeviceAddress,
) -> PacketParts {
    let mut data = Vec::with_capacity(1 + message.len());
    data.push(rorg);
    data.extend_from_slice(message);

    let mut opt = Vec::with_capacity(9);
    opt.extend_from_slice(destination.as_bytes());
    opt.extend_from_slice(source.as_bytes());
    opt.push(DBM_SEND);

    (PacketType::RadioMessage, data, opt)
}

/// Build a remote management command.
///
/// Data: `function(2, LE) | manufacturer(2, LE) | message`.
/// Opt:  `destination(4) | source(4) | dBm(1) | send_with_delay(1)`.
pub fn remote_man_command(
    function: u16,
    manufacturer: u16,
    message: &[u8],
    destination: DeviceAddress,
    source: DeviceAddress,
    send_with_delay: bool,
) -> PacketParts {
    let mut data = Vec::with_capacity(4 + message.len());
    data.extend_from_slice(&function.to_le_bytes());
    data.extend_from_slice(&manufacturer.to_le_bytes());
    data.extend_from_slice(message);

    let mut opt = Vec::with_capacity(10);
    opt.extend_from_slice(destination.as_bytes());
    opt.extend_from_slice(source.as_bytes());
    opt.push(DBM_SEND);
    opt.push(if send_with_delay { 1 } else { 0 });

    (PacketType::RemoteManCommand, data, opt)
}

/// Build a response packet.
///
/// Data: `return_code(1) | payload`. Opt: empty.
pub fn response(return_code: ReturnCode, payload: &[u8]) -> PacketParts {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(return_code.code());
    data.extend_from_slice(payload);

    (PacketType::Response, data, Vec::new())
}
