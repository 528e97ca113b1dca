//! Profile identifiers.

use serde::{Deserialize, Serialize};

// ============================================================================
// RORG values
// ============================================================================

/// Repeated switch communication (rocker switches).
pub const RORG_RPS: u8 = 0xF6;
/// 1-byte sensor telegram (contacts).
pub const RORG_1BS: u8 = 0xD5;
/// 4-byte sensor telegram (most analog sensors).
pub const RORG_4BS: u8 = 0xA5;
/// Variable-length data telegram (actuators).
pub const RORG_VLD: u8 = 0xD2;

/// An EnOcean Equipment Profile identifier: the (RORG, FUNC, TYPE) triple.
///
/// The triple uniquely names one profile variant and is used as an exact
/// lookup key; there is no wildcard or fallback matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EepId {
    /// Radio ORGanization: the telegram's top-level class.
    pub rorg: u8,
    /// Basic functionality group within the RORG.
    pub func: u8,
    /// Concrete type within the function group.
    pub variant: u8,
}

impl EepId {
    /// Create a profile identifier from its three bytes.
    pub const fn new(rorg: u8, func: u8, variant: u8) -> Self {
        EepId {
            rorg,
            func,
            variant,
        }
    }
}

impl std::fmt::Display for EepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02X}-{:02X}-{:02X}",
            self.rorg, self.func, self.variant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EepId::new(0xA5, 0x02, 0x05).to_string(), "A5-02-05");
        assert_eq!(EepId::new(0xD5, 0x00, 0x01).to_string(), "D5-00-01");
    }

    #[test]
    fn test_identity() {
        let a = EepId::new(0xA5, 0x02, 0x05);
        let b = EepId::new(0xA5, 0x02, 0x05);
        assert_eq!(a, b);
        assert_ne!(a, EepId::new(0xA5, 0x02, 0x04));
    }
}
