//! A listener that logs every event.

use std::sync::Arc;

use enohub_device::{AttributeChangeJob, DeviceListener, EnOceanDevice};
use tracing::info;

/// Logs device and attribute events through `tracing`.
#[derive(Debug, Default)]
pub struct LogListener;

impl DeviceListener for LogListener {
    fn added_device(&self, device: &Arc<EnOceanDevice>) {
        info!(%device, "device added");
    }

    fn modified_device(&self, device: &Arc<EnOceanDevice>) {
        info!(%device, "device modified");
    }

    fn removed_device(&self, device: &Arc<EnOceanDevice>) {
        info!(%device, "device removed");
    }

    fn attribute_changed(&self, job: &AttributeChangeJob) {
        info!(
            device = %job.device,
            channel = job.channel,
            attribute = job.attribute,
            value = %job.snapshot.scaled,
            "attribute changed"
        );
    }
}
