//! D2-01-01: electronic switch with dimming.
//!
//! VLD actuator status telegram (3 bytes):
//!
//! | Field        | Location      | Description                      |
//! |--------------|---------------|----------------------------------|
//! | command      | byte 0, 3..0  | 0x04 = actuator status response. |
//! | io channel   | byte 1, 4..0  | Output channel the status is for.|
//! | output value | byte 2, 6..0  | Dimming level in percent.        |

use crate::attribute::AttributeSpec;
use crate::identifier::{EepId, RORG_VLD};
use crate::profile::{ChannelSpec, EepProfile};
use crate::scaling::Scaling;

/// Command nibble of an actuator status response.
const CMD_ACTUATOR_STATUS_RESPONSE: u8 = 0x04;

/// An electronic switch/dimmer actuator.
pub struct ElectronicSwitch {
    channels: Vec<ChannelSpec>,
}

impl ElectronicSwitch {
    /// Create the D2-01-01 profile.
    pub fn new() -> Self {
        ElectronicSwitch {
            channels: vec![ChannelSpec {
                channel: 0,
                attributes: vec![
                    AttributeSpec {
                        name: "io_channel",
                        unit: None,
                        bit_offset: 11,
                        bit_width: 5,
                        scaling: Scaling::Raw,
                    },
                    AttributeSpec {
                        name: "output_value",
                        unit: Some("%"),
                        bit_offset: 17,
                        bit_width: 7,
                        scaling: Scaling::Linear {
                            min: 0.0,
                            max: 127.0,
                        },
                    },
                ],
            }],
        }
    }
}

impl Default for ElectronicSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl EepProfile for ElectronicSwitch {
    fn eep(&self) -> EepId {
        EepId::new(RORG_VLD, 0x01, 0x01)
    }

    fn name(&self) -> &'static str {
        "electronic switch"
    }

    fn channels(&self) -> &[ChannelSpec] {
        &self.channels
    }

    fn validate_payload(&self, payload: &[u8]) -> bool {
        payload.len() == 3 && payload[0] & 0x0F == CMD_ACTUATOR_STATUS_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_telegram;

    #[test]
    fn test_status_response_decode() {
        // cmd 0x04, io channel 0, output value 100 (full on).
        let decoded = decode_telegram(&ElectronicSwitch::new(), &[0x04, 0x00, 0x64]).unwrap();

        let reading = |name: &str| {
            decoded
                .readings
                .iter()
                .find(|r| r.name == name)
                .unwrap_or_else(|| panic!("missing attribute {}", name))
        };
        assert_eq!(reading("io_channel").raw, 0);
        assert_eq!(reading("output_value").raw, 100);
    }

    #[test]
    fn test_other_command_rejected() {
        // cmd 0x01 (actuator set output) is not a status response.
        assert!(decode_telegram(&ElectronicSwitch::new(), &[0x01, 0x00, 0x64]).is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(decode_telegram(&ElectronicSwitch::new(), &[0x04, 0x00]).is_err());
    }
}
