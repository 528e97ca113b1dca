//! The generic telegram decode engine.

use crate::bitfield::extract_bits;
use crate::error::EepError;
use crate::profile::EepProfile;
use crate::scaling::ScaledValue;

/// One successfully extracted and scaled attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeReading {
    /// Channel the attribute belongs to.
    pub channel: u8,
    /// Attribute name within the channel.
    pub name: &'static str,
    /// Raw value as extracted from the payload bits.
    pub raw: u32,
    /// Engineering value derived from the raw value.
    pub scaled: ScaledValue,
}

/// A channel that could not be extracted from this telegram.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedChannel {
    /// The channel that was skipped.
    pub channel: u8,
    /// Name of the attribute whose extraction failed.
    pub name: &'static str,
    /// Why extraction failed.
    pub error: EepError,
}

/// The outcome of decoding one telegram against one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelegramDecode {
    /// Readings in profile-declared channel order.
    pub readings: Vec<AttributeReading>,
    /// Channels skipped because of per-channel extraction failures.
    pub skipped: Vec<SkippedChannel>,
}

/// Decode a telegram payload against a profile.
///
/// A payload the profile rejects outright fails with
/// [`EepError::InvalidTelegramLength`]. Otherwise every declared channel
/// is attempted in order; a channel whose extraction fails is skipped as a
/// whole (none of its attributes are reported) and recorded in
/// [`TelegramDecode::skipped`], leaving the remaining channels unaffected.
pub fn decode_telegram(
    profile: &dyn EepProfile,
    payload: &[u8],
) -> Result<TelegramDecode, EepError> {
    if !profile.validate_payload(payload) {
        return Err(EepError::InvalidTelegramLength {
            eep: profile.eep(),
            actual: payload.len(),
        });
    }

    let mut decoded = TelegramDecode::default();
    for channel in profile.channels() {
        let mut readings = Vec::with_capacity(channel.attributes.len());
        let mut failure = None;

        for attribute in &channel.attributes {
            match extract_bits(payload, attribute.bit_offset, attribute.bit_width) {
                Ok(raw) => readings.push(AttributeReading {
                    channel: channel.channel,
                    name: attribute.name,
                    raw,
                    scaled: attribute.scale(raw),
                }),
                Err(error) => {
                    failure = Some(SkippedChannel {
                        channel: channel.channel,
                        name: attribute.name,
                        error,
                    });
                    break;
                }
            }
        }

        match failure {
            None => decoded.readings.extend(readings),
            Some(skip) => decoded.skipped.push(skip),
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSpec;
    use crate::identifier::EepId;
    use crate::profile::ChannelSpec;
    use crate::scaling::Scaling;

    /// Test profile with one in-range channel and one channel whose field
    /// lies beyond a one-byte payload.
    struct TwoChannelProfile {
        channels: Vec<ChannelSpec>,
    }

    impl TwoChannelProfile {
        fn new() -> Self {
            TwoChannelProfile {
                channels: vec![
                    ChannelSpec {
                        channel: 0,
                        attributes: vec![AttributeSpec {
                            name: "state",
                            unit: None,
                            bit_offset: 7,
                            bit_width: 1,
                            scaling: Scaling::Switch,
                        }],
                    },
                    ChannelSpec {
                        channel: 1,
                        attributes: vec![AttributeSpec {
                            name: "level",
                            unit: None,
                            bit_offset: 8,
                            bit_width: 8,
                            scaling: Scaling::Raw,
                        }],
                    },
                ],
            }
        }
    }

    impl EepProfile for TwoChannelProfile {
        fn eep(&self) -> EepId {
            EepId::new(0xD2, 0x7F, 0x7F)
        }

        fn name(&self) -> &'static str {
            "test profile"
        }

        fn channels(&self) -> &[ChannelSpec] {
            &self.channels
        }

        fn validate_payload(&self, payload: &[u8]) -> bool {
            !payload.is_empty()
        }
    }

    #[test]
    fn test_invalid_length_fails_whole_decode() {
        let profile = TwoChannelProfile::new();
        let err = decode_telegram(&profile, &[]).unwrap_err();
        assert!(matches!(
            err,
            EepError::InvalidTelegramLength { actual: 0, .. }
        ));
    }

    #[test]
    fn test_bad_channel_is_skipped_not_fatal() {
        let profile = TwoChannelProfile::new();
        // One byte: channel 0 decodes, channel 1's field is out of range.
        let decoded = decode_telegram(&profile, &[0x01]).unwrap();

        assert_eq!(decoded.readings.len(), 1);
        assert_eq!(decoded.readings[0].channel, 0);
        assert_eq!(decoded.readings[0].scaled, ScaledValue::Switch(true));

        assert_eq!(decoded.skipped.len(), 1);
        assert_eq!(decoded.skipped[0].channel, 1);
        assert!(matches!(decoded.skipped[0].error, EepError::OutOfRange { .. }));
    }

    #[test]
    fn test_all_channels_decode_in_order() {
        let profile = TwoChannelProfile::new();
        let decoded = decode_telegram(&profile, &[0x01, 0x64]).unwrap();

        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.readings.len(), 2);
        assert_eq!(decoded.readings[0].channel, 0);
        assert_eq!(decoded.readings[1].channel, 1);
        assert_eq!(decoded.readings[1].raw, 0x64);
    }
}
