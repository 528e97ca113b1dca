//! Known devices and their live attribute state.

use std::sync::Arc;

use enohub_eep::{EepAttribute, EepId, EepProfile};
use esp3_protocol::DeviceAddress;

/// One channel's live attribute instances on a device.
#[derive(Debug)]
pub struct DeviceChannel {
    /// Channel number from the profile.
    pub channel: u8,
    /// Live attributes, in profile-declared order.
    pub attributes: Vec<Arc<EepAttribute>>,
}

/// A known EnOcean device: radio address plus its bound profile.
///
/// The device itself is immutable after binding; only the values inside
/// its [`EepAttribute`] instances change as telegrams arrive. Devices are
/// shared behind `Arc` between the owning directory, in-flight change
/// jobs, and listeners.
#[derive(Debug)]
pub struct EnOceanDevice {
    address: DeviceAddress,
    name: String,
    eep: EepId,
    channels: Vec<DeviceChannel>,
}

impl EnOceanDevice {
    /// Bind a device to a profile, instantiating live attribute state for
    /// every channel the profile declares.
    pub fn bind(address: DeviceAddress, name: impl Into<String>, profile: &dyn EepProfile) -> Self {
        let channels = profile
            .channels()
            .iter()
            .map(|channel| DeviceChannel {
                channel: channel.channel,
                attributes: channel
                    .attributes
                    .iter()
                    .map(|spec| Arc::new(EepAttribute::new(*spec)))
                    .collect(),
            })
            .collect();

        EnOceanDevice {
            address,
            name: name.into(),
            eep: profile.eep(),
            channels,
        }
    }

    /// The device's radio address.
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Human-readable device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The profile identifier this device is bound to.
    pub fn eep(&self) -> EepId {
        self.eep
    }

    /// The device's channels with their live attributes.
    pub fn channels(&self) -> &[DeviceChannel] {
        &self.channels
    }

    /// Look up a live attribute by channel number and attribute name.
    pub fn attribute(&self, channel: u8, name: &str) -> Option<&Arc<EepAttribute>> {
        self.channels
            .iter()
            .find(|c| c.channel == channel)?
            .attributes
            .iter()
            .find(|a| a.name() == name)
    }
}

impl std::fmt::Display for EnOceanDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.address, self.eep)
    }
}

/// The device-manager boundary.
///
/// The dispatcher resolves telegram senders through this trait; who owns
/// and persists the devices is up to the surrounding application.
pub trait DeviceDirectory: Send + Sync {
    /// Find the device with the given radio address, if known.
    fn device_by_address(&self, address: DeviceAddress) -> Option<Arc<EnOceanDevice>>;
}
