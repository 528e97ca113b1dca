//! F6-02-01: two-rocker switch.
//!
//! RPS payload layout (exactly 1 byte, MSB first):
//!
//! | Field               | Bits | Description                           |
//! |---------------------|------|---------------------------------------|
//! | rocker first action | 7..5 | Button code of the first action.      |
//! | energy bow          | 4    | Set while the bow is pressed.         |
//! | rocker second action| 3..1 | Button code of the second action.     |
//! | second action valid | 0    | Set when two buttons were pressed.    |

use crate::attribute::AttributeSpec;
use crate::identifier::{EepId, RORG_RPS};
use crate::profile::{ChannelSpec, EepProfile};
use crate::scaling::Scaling;

/// A two-rocker wall switch.
pub struct RockerSwitch {
    channels: Vec<ChannelSpec>,
}

impl RockerSwitch {
    /// Create the F6-02-01 profile.
    pub fn new() -> Self {
        RockerSwitch {
            channels: vec![ChannelSpec {
                channel: 0,
                attributes: vec![
                    AttributeSpec {
                        name: "rocker_first_action",
                        unit: None,
                        bit_offset: 0,
                        bit_width: 3,
                        scaling: Scaling::Raw,
                    },
                    AttributeSpec {
                        name: "energy_bow",
                        unit: None,
                        bit_offset: 3,
                        bit_width: 1,
                        scaling: Scaling::Switch,
                    },
                    AttributeSpec {
                        name: "rocker_second_action",
                        unit: None,
                        bit_offset: 4,
                        bit_width: 3,
                        scaling: Scaling::Raw,
                    },
                    AttributeSpec {
                        name: "second_action_valid",
                        unit: None,
                        bit_offset: 7,
                        bit_width: 1,
                        scaling: Scaling::Switch,
                    },
                ],
            }],
        }
    }
}

impl Default for RockerSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl EepProfile for RockerSwitch {
    fn eep(&self) -> EepId {
        EepId::new(RORG_RPS, 0x02, 0x01)
    }

    fn name(&self) -> &'static str {
        "rocker switch"
    }

    fn channels(&self) -> &[ChannelSpec] {
        &self.channels
    }

    fn validate_payload(&self, payload: &[u8]) -> bool {
        payload.len() == 1
    }
}
