//! D5-00-01: single input contact.
//!
//! 1BS payload layout (exactly 1 byte, bits LSB-numbered as in the data
//! sheet):
//!
//! | Field    | Bit | Description                     |
//! |----------|-----|---------------------------------|
//! | teach-in | 3   | Set on teach-in telegrams.      |
//! | contact  | 0   | Set when the contact is closed. |
//!
//! Any other payload length is invalid; no flags are asserted from it.

use crate::attribute::AttributeSpec;
use crate::identifier::{EepId, RORG_1BS};
use crate::profile::{ChannelSpec, EepProfile};
use crate::scaling::Scaling;

/// A window/door contact.
pub struct SingleInputContact {
    channels: Vec<ChannelSpec>,
}

impl SingleInputContact {
    /// Create the D5-00-01 profile.
    pub fn new() -> Self {
        SingleInputContact {
            channels: vec![ChannelSpec {
                channel: 0,
                attributes: vec![
                    AttributeSpec {
                        name: "teach_in",
                        unit: None,
                        // data-sheet bit 3, MSB-first offset 4
                        bit_offset: 4,
                        bit_width: 1,
                        scaling: Scaling::Switch,
                    },
                    AttributeSpec {
                        name: "contact",
                        unit: None,
                        // data-sheet bit 0, MSB-first offset 7
                        bit_offset: 7,
                        bit_width: 1,
                        scaling: Scaling::Switch,
                    },
                ],
            }],
        }
    }
}

impl Default for SingleInputContact {
    fn default() -> Self {
        Self::new()
    }
}

impl EepProfile for SingleInputContact {
    fn eep(&self) -> EepId {
        EepId::new(RORG_1BS, 0x00, 0x01)
    }

    fn name(&self) -> &'static str {
        "single input contact"
    }

    fn channels(&self) -> &[ChannelSpec] {
        &self.channels
    }

    fn validate_payload(&self, payload: &[u8]) -> bool {
        payload.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_telegram;
    use crate::scaling::ScaledValue;

    fn flags(payload: &[u8]) -> (bool, bool) {
        let decoded = decode_telegram(&SingleInputContact::new(), payload).unwrap();
        assert!(decoded.skipped.is_empty());
        let by_name = |name: &str| {
            decoded
                .readings
                .iter()
                .find(|r| r.name == name)
                .unwrap_or_else(|| panic!("missing attribute {}", name))
                .scaled
        };
        (
            by_name("teach_in") == ScaledValue::Switch(true),
            by_name("contact") == ScaledValue::Switch(true),
        )
    }

    #[test]
    fn test_contact_open() {
        let (teach_in, contact) = flags(&[0x00]);
        assert!(!teach_in);
        assert!(!contact);
    }

    #[test]
    fn test_teach_in_and_contact_closed() {
        let (teach_in, contact) = flags(&[0x09]);
        assert!(teach_in);
        assert!(contact);
    }

    #[test]
    fn test_contact_closed_only() {
        let (teach_in, contact) = flags(&[0x01]);
        assert!(!teach_in);
        assert!(contact);
    }

    #[test]
    fn test_two_byte_payload_invalid() {
        let profile = SingleInputContact::new();
        let err = decode_telegram(&profile, &[0x09, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            crate::EepError::InvalidTelegramLength { actual: 2, .. }
        ));
    }
}
