//! Raw-to-engineering-unit scaling.
//!
//! Each attribute declares one scaling function mapping its raw bit-field
//! value to an engineering value and back. The mapping is invertible within
//! one raw unit, which the encode path relies on.

// ============================================================================
// Scaled Value
// ============================================================================

/// The engineering value an attribute can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaledValue {
    /// A scaled analog value (temperature, percentage, ...).
    Number(f64),
    /// A binary state (contact closed, button pressed, ...).
    Switch(bool),
}

impl ScaledValue {
    /// Convert to f64 if possible. A switch maps to 0.0 / 1.0.
    pub fn as_f64(&self) -> f64 {
        match self {
            ScaledValue::Number(v) => *v,
            ScaledValue::Switch(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Convert to bool if this is a switch value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScaledValue::Switch(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaledValue::Number(v) => write!(f, "{:.2}", v),
            ScaledValue::Switch(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Scaling
// ============================================================================

/// Scaling function from a raw bit-field value to an engineering value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scaling {
    /// `scaled = min + raw * (max - min) / raw_max`.
    Linear {
        /// Engineering value at raw 0.
        min: f64,
        /// Engineering value at the raw maximum.
        max: f64,
    },

    /// `scaled = max - raw * (max - min) / raw_max`. Used by sensors whose
    /// raw value increases as the measured quantity decreases.
    InverseLinear {
        /// Engineering value at the raw maximum.
        min: f64,
        /// Engineering value at raw 0.
        max: f64,
    },

    /// Raw value zero is off, anything else is on.
    Switch,

    /// The raw value is the engineering value.
    Raw,
}

impl Scaling {
    /// Scale a raw value extracted from a `bit_width`-wide field.
    pub fn scale(&self, raw: u32, bit_width: usize) -> ScaledValue {
        let raw_max = raw_max(bit_width);
        match self {
            Scaling::Linear { min, max } => {
                ScaledValue::Number(min + f64::from(raw) * (max - min) / raw_max)
            }
            Scaling::InverseLinear { min, max } => {
                ScaledValue::Number(max - f64::from(raw) * (max - min) / raw_max)
            }
            Scaling::Switch => ScaledValue::Switch(raw != 0),
            Scaling::Raw => ScaledValue::Number(f64::from(raw)),
        }
    }

    /// Invert [`Scaling::scale`]: recover the raw value for an engineering
    /// value. The result is clamped to the field's raw range and differs
    /// from the original raw value by at most one unit.
    pub fn raw_from_scaled(&self, value: ScaledValue, bit_width: usize) -> u32 {
        let raw_max = raw_max(bit_width);
        let raw = match self {
            Scaling::Linear { min, max } => (value.as_f64() - min) * raw_max / (max - min),
            Scaling::InverseLinear { min, max } => (max - value.as_f64()) * raw_max / (max - min),
            Scaling::Switch => {
                return u32::from(value.as_bool().unwrap_or(value.as_f64() != 0.0));
            }
            Scaling::Raw => value.as_f64(),
        };
        raw.round().clamp(0.0, raw_max) as u32
    }
}

fn raw_max(bit_width: usize) -> f64 {
    ((1u64 << bit_width) - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let scaling = Scaling::Linear { min: 0.0, max: 100.0 };
        assert_eq!(scaling.scale(0, 8), ScaledValue::Number(0.0));
        assert_eq!(scaling.scale(255, 8), ScaledValue::Number(100.0));
    }

    #[test]
    fn test_inverse_linear_temperature() {
        // A5-02-05 style: 0..40 °C over 8 bits, raw increases as it cools.
        let scaling = Scaling::InverseLinear { min: 0.0, max: 40.0 };
        assert_eq!(scaling.scale(0, 8), ScaledValue::Number(40.0));
        assert_eq!(scaling.scale(255, 8), ScaledValue::Number(0.0));

        let mid = scaling.scale(100, 8).as_f64();
        assert!((mid - 24.3137).abs() < 0.001);
    }

    #[test]
    fn test_switch() {
        let scaling = Scaling::Switch;
        assert_eq!(scaling.scale(0, 1), ScaledValue::Switch(false));
        assert_eq!(scaling.scale(1, 1), ScaledValue::Switch(true));
        assert_eq!(scaling.raw_from_scaled(ScaledValue::Switch(true), 1), 1);
    }

    #[test]
    fn test_invertibility_within_one_raw_unit() {
        let scalings = [
            Scaling::Linear { min: 0.0, max: 100.0 },
            Scaling::Linear { min: -40.0, max: 60.0 },
            Scaling::InverseLinear { min: 0.0, max: 40.0 },
            Scaling::InverseLinear { min: -30.0, max: 10.0 },
            Scaling::Raw,
        ];
        for scaling in scalings {
            for raw in 0u32..=255 {
                let scaled = scaling.scale(raw, 8);
                let recovered = scaling.raw_from_scaled(scaled, 8);
                let diff = recovered.abs_diff(raw);
                assert!(
                    diff <= 1,
                    "{:?}: raw {} recovered as {}",
                    scaling,
                    raw,
                    recovered
                );
            }
        }
    }

    #[test]
    fn test_raw_clamped_to_field_range() {
        let scaling = Scaling::Linear { min: 0.0, max: 100.0 };
        assert_eq!(scaling.raw_from_scaled(ScaledValue::Number(150.0), 8), 255);
        assert_eq!(scaling.raw_from_scaled(ScaledValue::Number(-5.0), 8), 0);
    }
}
