//! Attribute descriptors and live attribute state.

use parking_lot::RwLock;

use crate::scaling::{ScaledValue, Scaling};

/// Static description of one attribute within a channel.
///
/// The bit offset is relative to the telegram payload, MSB-first from
/// payload byte 0 (see [`extract_bits`](crate::extract_bits)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSpec {
    /// Attribute name, unique within its channel.
    pub name: &'static str,
    /// Engineering unit, if any.
    pub unit: Option<&'static str>,
    /// Bit offset of the raw field within the payload.
    pub bit_offset: usize,
    /// Width of the raw field in bits.
    pub bit_width: usize,
    /// Scaling function from raw to engineering value.
    pub scaling: Scaling,
}

impl AttributeSpec {
    /// Scale a raw field value according to this descriptor.
    pub fn scale(&self, raw: u32) -> ScaledValue {
        self.scaling.scale(raw, self.bit_width)
    }
}

/// A point-in-time raw/scaled value pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSnapshot {
    /// Raw value as extracted from the payload bits.
    pub raw: u32,
    /// Engineering value derived from the raw value.
    pub scaled: ScaledValue,
}

/// Live attribute state bound to one device channel.
///
/// The decode path writes, listeners and pollers read. Updates are
/// last-writer-wins; the lock only guards against torn reads, never held
/// across scaling or notification. Change notification works on snapshots
/// taken at update time, so later overwrites cannot leak into an
/// already-submitted job.
#[derive(Debug)]
pub struct EepAttribute {
    spec: AttributeSpec,
    state: RwLock<Option<AttributeSnapshot>>,
}

impl EepAttribute {
    /// Create a live attribute with no known value yet.
    pub fn new(spec: AttributeSpec) -> Self {
        EepAttribute {
            spec,
            state: RwLock::new(None),
        }
    }

    /// The attribute's static descriptor.
    pub fn spec(&self) -> &AttributeSpec {
        &self.spec
    }

    /// The attribute name.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Store a new raw value and return the snapshot that was written.
    pub fn update(&self, raw: u32) -> AttributeSnapshot {
        let snapshot = AttributeSnapshot {
            raw,
            scaled: self.spec.scale(raw),
        };
        *self.state.write() = Some(snapshot);
        snapshot
    }

    /// The last-known value, if any telegram has been decoded yet.
    pub fn snapshot(&self) -> Option<AttributeSnapshot> {
        *self.state.read()
    }
}
