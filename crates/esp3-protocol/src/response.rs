//! Response packets and return codes.
//!
//! Every host command is answered by a RESPONSE packet whose first data
//! byte is a return code. A generic [`Packet`] can be reinterpreted as a
//! [`Response`] only when it actually is one; anything else is rejected
//! with [`Esp3Error::IncompatiblePacketType`] rather than coerced.

use crate::constants::*;
use crate::error::Esp3Error;
use crate::packet::{Packet, PacketType};

/// Return code carried in the first data byte of a response packet.
///
/// Exactly one of the five known predicates holds for a known code; for an
/// unrecognized code none of them do and the raw value is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    /// Command succeeded.
    Ok,
    /// Generic command failure.
    Error,
    /// Command not supported by this transceiver.
    NotSupported,
    /// A command parameter was out of range.
    WrongParam,
    /// Command denied in the current transceiver state.
    OperationDenied,
    /// Unrecognized return code, raw value preserved.
    Unknown(u8),
}

impl ReturnCode {
    /// Get the wire value for this return code.
    pub fn code(&self) -> u8 {
        match self {
            ReturnCode::Ok => RET_OK,
            ReturnCode::Error => RET_ERROR,
            ReturnCode::NotSupported => RET_NOT_SUPPORTED,
            ReturnCode::WrongParam => RET_WRONG_PARAM,
            ReturnCode::OperationDenied => RET_OPERATION_DENIED,
            ReturnCode::Unknown(code) => *code,
        }
    }
}

impl From<u8> for ReturnCode {
    fn from(code: u8) -> Self {
        match code {
            RET_OK => ReturnCode::Ok,
            RET_ERROR => ReturnCode::Error,
            RET_NOT_SUPPORTED => ReturnCode::NotSupported,
            RET_WRONG_PARAM => ReturnCode::WrongParam,
            RET_OPERATION_DENIED => ReturnCode::OperationDenied,
            code => ReturnCode::Unknown(code),
        }
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnCode::Ok => write!(f, "OK"),
            ReturnCode::Error => write!(f, "ERROR"),
            ReturnCode::NotSupported => write!(f, "NOT_SUPPORTED"),
            ReturnCode::WrongParam => write!(f, "WRONG_PARAM"),
            ReturnCode::OperationDenied => write!(f, "OPERATION_DENIED"),
            ReturnCode::Unknown(code) => write!(f, "UNKNOWN(0x{:02X})", code),
        }
    }
}

/// A decoded response packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    return_code: ReturnCode,
    /// Response payload after the return code byte (command-specific).
    payload: Vec<u8>,
}

impl Response {
    /// Create a response from a return code with no payload.
    pub fn new(return_code: ReturnCode) -> Self {
        Response {
            return_code,
            payload: Vec::new(),
        }
    }

    /// Create a response from a return code and a command-specific payload.
    pub fn with_payload(return_code: ReturnCode, payload: Vec<u8>) -> Self {
        Response {
            return_code,
            payload,
        }
    }

    /// The return code.
    pub fn return_code(&self) -> ReturnCode {
        self.return_code
    }

    /// The command-specific payload after the return code byte.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether the command succeeded.
    pub fn ret_ok(&self) -> bool {
        self.return_code == ReturnCode::Ok
    }

    /// Whether the command failed generically.
    pub fn ret_error(&self) -> bool {
        self.return_code == ReturnCode::Error
    }

    /// Whether the command is unsupported.
    pub fn ret_not_supported(&self) -> bool {
        self.return_code == ReturnCode::NotSupported
    }

    /// Whether a parameter was out of range.
    pub fn ret_wrong_param(&self) -> bool {
        self.return_code == ReturnCode::WrongParam
    }

    /// Whether the operation was denied.
    pub fn ret_operation_denied(&self) -> bool {
        self.return_code == ReturnCode::OperationDenied
    }

    /// Convert into a framable packet.
    pub fn to_packet(&self) -> Result<Packet, Esp3Error> {
        let (ty, data, opt) = crate::builders::response(self.return_code, &self.payload);
        Packet::new(ty, data, opt)
    }
}

impl TryFrom<&Packet> for Response {
    type Error = Esp3Error;

    /// Reinterpret a generic packet as a response.
    ///
    /// Fails fast for any non-response packet type without inspecting the
    /// payload; a response frame with an empty data region is also
    /// rejected, since the return code byte is mandatory.
    fn try_from(packet: &Packet) -> Result<Self, Esp3Error> {
        if packet.packet_type() != PacketType::Response {
            return Err(Esp3Error::IncompatiblePacketType {
                expected: PacketType::Response,
                actual: packet.packet_type(),
            });
        }
        let data = packet.data();
        if data.is_empty() {
            return Err(Esp3Error::Truncated {
                needed: 1,
                available: 0,
            });
        }
        Ok(Response {
            return_code: ReturnCode::from(data[0]),
            payload: data[1..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_packet(code: u8) -> Packet {
        Packet::new(PacketType::Response, vec![code], vec![]).unwrap()
    }

    #[test]
    fn test_ret_ok_exclusive() {
        let response = Response::try_from(&response_packet(0x00)).unwrap();
        assert!(response.ret_ok());
        assert!(!response.ret_error());
        assert!(!response.ret_not_supported());
        assert!(!response.ret_wrong_param());
        assert!(!response.ret_operation_denied());
    }

    #[test]
    fn test_ret_operation_denied() {
        let response = Response::try_from(&response_packet(0x04)).unwrap();
        assert!(response.ret_operation_denied());
        assert!(!response.ret_ok());
    }

    #[test]
    fn test_unknown_code_asserts_no_predicate() {
        let response = Response::try_from(&response_packet(0x7F)).unwrap();
        assert_eq!(response.return_code(), ReturnCode::Unknown(0x7F));
        assert!(!response.ret_ok());
        assert!(!response.ret_error());
        assert!(!response.ret_not_supported());
        assert!(!response.ret_wrong_param());
        assert!(!response.ret_operation_denied());
    }

    #[test]
    fn test_incompatible_reinterpretation() {
        let packet = Packet::new(PacketType::RadioErp1, vec![0xD5, 0x00], vec![]).unwrap();
        let err = Response::try_from(&packet).unwrap_err();
        assert!(matches!(
            err,
            Esp3Error::IncompatiblePacketType {
                expected: PacketType::Response,
                actual: PacketType::RadioErp1,
            }
        ));
    }

    #[test]
    fn test_empty_response_data_rejected() {
        let packet = Packet::new(PacketType::Response, vec![], vec![]).unwrap();
        assert!(matches!(
            Response::try_from(&packet),
            Err(Esp3Error::Truncated { needed: 1, .. })
        ));
    }

    #[test]
    fn test_response_roundtrip() {
        let response = Response::with_payload(ReturnCode::Ok, vec![0x10, 0x20]);
        let packet = response.to_packet().unwrap();
        assert_eq!(Response::try_from(&packet).unwrap(), response);
    }
}
