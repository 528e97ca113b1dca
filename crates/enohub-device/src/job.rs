//! Attribute change jobs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use enohub_eep::AttributeSnapshot;
use esp3_protocol::RadioTelegram;

use crate::device::EnOceanDevice;

/// An immutable snapshot of one attribute change, queued for delivery.
///
/// The job captures the raw and scaled values at submission time, so
/// listeners are insulated from later overwrites of the live attribute.
/// Each job is consumed exactly once by the notification worker pool.
#[derive(Debug, Clone)]
pub struct AttributeChangeJob {
    /// The device the change belongs to.
    pub device: Arc<EnOceanDevice>,
    /// Channel the attribute belongs to.
    pub channel: u8,
    /// Name of the changed attribute.
    pub attribute: &'static str,
    /// Raw and scaled values as written by this change.
    pub snapshot: AttributeSnapshot,
    /// The telegram that caused the change.
    pub telegram: RadioTelegram,
    /// When the telegram was dispatched.
    pub received_at: DateTime<Utc>,
}

impl std::fmt::Display for AttributeChangeJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ch{} {} = {}",
            self.device.name(),
            self.channel,
            self.attribute,
            self.snapshot.scaled
        )
    }
}
