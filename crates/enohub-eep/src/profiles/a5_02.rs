//! A5-02: 4BS temperature sensors.
//!
//! 4BS payload layout (4 bytes, DB3 first on the wire):
//!
//! | Field       | Location   | Description                            |
//! |-------------|------------|----------------------------------------|
//! | temperature | DB1 (8bit) | Inverse-linear over the profile range. |
//!
//! The raw value increases as the temperature decreases, so the scaling is
//! inverse-linear: raw 0 is the range maximum, raw 255 the minimum.

use crate::attribute::AttributeSpec;
use crate::identifier::{EepId, RORG_4BS};
use crate::profile::{ChannelSpec, EepProfile};
use crate::scaling::Scaling;

/// Length of a 4BS telegram payload.
const BS4_PAYLOAD_SIZE: usize = 4;

/// Bit offset of DB1 within the payload.
const DB1_OFFSET: usize = 16;

/// A temperature sensor from the A5-02 function group.
pub struct TemperatureSensor {
    eep: EepId,
    channels: Vec<ChannelSpec>,
}

impl TemperatureSensor {
    /// Create a sensor profile for one A5-02 type with its measurement
    /// range in °C.
    pub fn new(variant: u8, min: f64, max: f64) -> Self {
        TemperatureSensor {
            eep: EepId::new(RORG_4BS, 0x02, variant),
            channels: vec![ChannelSpec {
                channel: 0,
                attributes: vec![AttributeSpec {
                    name: "temperature",
                    unit: Some("°C"),
                    bit_offset: DB1_OFFSET,
                    bit_width: 8,
                    scaling: Scaling::InverseLinear { min, max },
                }],
            }],
        }
    }

    /// The A5-02 types shipped in the built-in catalogue, each spanning a
    /// 40 K window.
    pub fn variants() -> Vec<TemperatureSensor> {
        vec![
            TemperatureSensor::new(0x01, -40.0, 0.0),
            TemperatureSensor::new(0x02, -30.0, 10.0),
            TemperatureSensor::new(0x03, -20.0, 20.0),
            TemperatureSensor::new(0x04, -10.0, 30.0),
            TemperatureSensor::new(0x05, 0.0, 40.0),
        ]
    }
}

impl EepProfile for TemperatureSensor {
    fn eep(&self) -> EepId {
        self.eep
    }

    fn name(&self) -> &'static str {
        "temperature sensor"
    }

    fn channels(&self) -> &[ChannelSpec] {
        &self.channels
    }

    fn validate_payload(&self, payload: &[u8]) -> bool {
        payload.len() == BS4_PAYLOAD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_telegram;
    use crate::scaling::ScaledValue;

    #[test]
    fn test_temperature_decode() {
        let profile = TemperatureSensor::new(0x05, 0.0, 40.0);
        let decoded = decode_telegram(&profile, &[0x00, 0x00, 0x64, 0x08]).unwrap();

        assert_eq!(decoded.readings.len(), 1);
        let reading = &decoded.readings[0];
        assert_eq!(reading.name, "temperature");
        assert_eq!(reading.raw, 0x64);
        let celsius = match reading.scaled {
            ScaledValue::Number(v) => v,
            other => panic!("expected a number, got {:?}", other),
        };
        assert!((celsius - 24.3137).abs() < 0.001);
    }

    #[test]
    fn test_range_endpoints() {
        let profile = TemperatureSensor::new(0x01, -40.0, 0.0);

        let cold = decode_telegram(&profile, &[0x00, 0x00, 0xFF, 0x08]).unwrap();
        assert_eq!(cold.readings[0].scaled, ScaledValue::Number(-40.0));

        let warm = decode_telegram(&profile, &[0x00, 0x00, 0x00, 0x08]).unwrap();
        assert_eq!(warm.readings[0].scaled, ScaledValue::Number(0.0));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let profile = TemperatureSensor::new(0x05, 0.0, 40.0);
        assert!(decode_telegram(&profile, &[0x64]).is_err());
        assert!(decode_telegram(&profile, &[0x00, 0x00, 0x64, 0x08, 0x00]).is_err());
    }
}
