//! The profile strategy trait.
//!
//! Profiles are flat strategy objects registered per (RORG, FUNC, TYPE)
//! triple. A profile declares which channels it has and which attributes
//! each channel carries; the generic decode engine
//! ([`decode_telegram`](crate::decode_telegram)) does the rest.

use crate::attribute::AttributeSpec;
use crate::identifier::EepId;

/// One channel's ordered attribute descriptors.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    /// Channel number, unique within the profile.
    pub channel: u8,
    /// Attribute descriptors, in decode order.
    pub attributes: Vec<AttributeSpec>,
}

/// A registered equipment profile.
///
/// Implementations are immutable after construction and shared behind
/// `Arc` between the registry and every device bound to the profile.
pub trait EepProfile: Send + Sync {
    /// The identifier this profile is registered under.
    fn eep(&self) -> EepId;

    /// Human-readable profile name.
    fn name(&self) -> &'static str;

    /// The profile's channels, in decode order.
    fn channels(&self) -> &[ChannelSpec];

    /// Whole-telegram validity check. A payload rejected here fails the
    /// entire decode with
    /// [`EepError::InvalidTelegramLength`](crate::EepError::InvalidTelegramLength);
    /// nothing is extracted from it.
    fn validate_payload(&self, payload: &[u8]) -> bool;
}
