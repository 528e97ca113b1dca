//! In-memory device directory.

use std::collections::HashMap;
use std::sync::Arc;

use enohub_device::{DeviceDirectory, EnOceanDevice, Notification, Notifier};
use esp3_protocol::DeviceAddress;
use parking_lot::RwLock;

/// A simple in-memory [`DeviceDirectory`].
///
/// Adding and removing devices fires the corresponding listener
/// notifications through the notifier the table was built with. Nothing
/// is persisted; the table is rebuilt from configuration at startup.
pub struct DeviceTable {
    devices: RwLock<HashMap<DeviceAddress, Arc<EnOceanDevice>>>,
    notifier: Arc<Notifier>,
}

impl DeviceTable {
    /// Create an empty table.
    pub fn new(notifier: Arc<Notifier>) -> Self {
        DeviceTable {
            devices: RwLock::new(HashMap::new()),
            notifier,
        }
    }

    /// Add or replace a device, notifying listeners.
    pub fn add(&self, device: Arc<EnOceanDevice>) {
        let previous = self
            .devices
            .write()
            .insert(device.address(), device.clone());
        match previous {
            Some(_) => self.notifier.submit(Notification::DeviceModified(device)),
            None => self.notifier.submit(Notification::DeviceAdded(device)),
        }
    }

    /// Remove a device by address, notifying listeners if it existed.
    pub fn remove(&self, address: DeviceAddress) -> Option<Arc<EnOceanDevice>> {
        let removed = self.devices.write().remove(&address);
        if let Some(device) = &removed {
            self.notifier
                .submit(Notification::DeviceRemoved(device.clone()));
        }
        removed
    }

    /// Number of known devices.
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl DeviceDirectory for DeviceTable {
    fn device_by_address(&self, address: DeviceAddress) -> Option<Arc<EnOceanDevice>> {
        self.devices.read().get(&address).cloned()
    }
}
