//! The telegram dispatcher.
//!
//! Connects the codec to the profile layer: a radio packet is parsed into
//! a telegram, its sender resolved through the [`DeviceDirectory`], the
//! device's profile resolved in the registry, the payload decoded, and one
//! change job submitted per successful attribute reading. Decode runs on
//! the calling thread; only the job submission touches the notifier.

use std::sync::Arc;

use chrono::Utc;
use enohub_eep::{decode_telegram, EepError, ProfileRegistry};
use esp3_protocol::{DeviceAddress, Esp3Error, Packet, PacketType, RadioTelegram};
use thiserror::Error;
use tracing::{debug, warn};

use crate::device::DeviceDirectory;
use crate::job::AttributeChangeJob;
use crate::notifier::{Notification, Notifier};

/// Errors surfaced by [`TelegramDispatcher::handle_packet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The packet could not be parsed as a radio telegram.
    #[error(transparent)]
    Packet(#[from] Esp3Error),

    /// Profile resolution or telegram decoding failed.
    #[error(transparent)]
    Profile(#[from] EepError),
}

/// What [`TelegramDispatcher::handle_packet`] did with a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The telegram was decoded; one job was submitted per reading.
    Dispatched {
        /// Number of change jobs submitted.
        jobs: usize,
        /// Number of channels skipped with per-channel errors.
        skipped: usize,
    },
    /// The sender is not in the directory. Reported, never guessed.
    UnknownDevice(DeviceAddress),
    /// The packet does not carry a radio telegram and was ignored.
    Ignored(PacketType),
}

/// Drives packet → profile → attribute flow.
pub struct TelegramDispatcher {
    registry: Arc<ProfileRegistry>,
    directory: Arc<dyn DeviceDirectory>,
    notifier: Arc<Notifier>,
}

impl TelegramDispatcher {
    /// Create a dispatcher over a registry, a device directory, and the
    /// notifier that receives change jobs.
    pub fn new(
        registry: Arc<ProfileRegistry>,
        directory: Arc<dyn DeviceDirectory>,
        notifier: Arc<Notifier>,
    ) -> Self {
        TelegramDispatcher {
            registry,
            directory,
            notifier,
        }
    }

    /// Handle one decoded ESP3 packet.
    ///
    /// Non-radio packets (responses, events, unknown types) are ignored.
    /// Telegrams from unknown senders are reported in the outcome. An
    /// unresolvable profile or a telegram whose length the profile rejects
    /// is an error; per-channel extraction failures are logged, counted in
    /// the outcome, and do not affect sibling channels.
    pub fn handle_packet(&self, packet: &Packet) -> Result<DispatchOutcome, DispatchError> {
        if !packet.packet_type().is_radio() {
            return Ok(DispatchOutcome::Ignored(packet.packet_type()));
        }
        metrics::counter!("enohub.dispatcher.telegrams_received").increment(1);

        let telegram = RadioTelegram::from_packet(packet)?;

        let Some(device) = self.directory.device_by_address(telegram.sender) else {
            debug!(sender = %telegram.sender, "telegram from unknown device");
            metrics::counter!("enohub.dispatcher.unknown_device").increment(1);
            return Ok(DispatchOutcome::UnknownDevice(telegram.sender));
        };

        let profile = self.registry.resolve(device.eep())?;
        let decoded = decode_telegram(profile.as_ref(), &telegram.payload)?;

        for skip in &decoded.skipped {
            warn!(
                device = %device,
                channel = skip.channel,
                attribute = skip.name,
                error = %skip.error,
                "channel skipped during decode"
            );
        }

        let received_at = Utc::now();
        let mut jobs = 0;
        for reading in &decoded.readings {
            let Some(attribute) = device.attribute(reading.channel, reading.name) else {
                continue;
            };
            let snapshot = attribute.update(reading.raw);
            self.notifier
                .submit(Notification::AttributeChanged(AttributeChangeJob {
                    device: Arc::clone(&device),
                    channel: reading.channel,
                    attribute: reading.name,
                    snapshot,
                    telegram: telegram.clone(),
                    received_at,
                }));
            jobs += 1;
        }
        metrics::counter!("enohub.dispatcher.jobs_submitted").increment(jobs as u64);

        Ok(DispatchOutcome::Dispatched {
            jobs,
            skipped: decoded.skipped.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::EnOceanDevice;
    use crate::listener::DeviceListener;
    use crate::notifier::NotifierConfig;
    use enohub_eep::{EepId, ScaledValue};
    use esp3_protocol::radio_erp1;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    const CONTACT_ADDR: DeviceAddress = DeviceAddress([0x01, 0x82, 0x5D, 0xAB]);
    const SENSOR_ADDR: DeviceAddress = DeviceAddress([0x01, 0x94, 0xE3, 0xB9]);

    struct MapDirectory {
        devices: HashMap<DeviceAddress, Arc<EnOceanDevice>>,
    }

    impl DeviceDirectory for MapDirectory {
        fn device_by_address(&self, address: DeviceAddress) -> Option<Arc<EnOceanDevice>> {
            self.devices.get(&address).cloned()
        }
    }

    #[derive(Default)]
    struct CollectingListener {
        jobs: Mutex<Vec<AttributeChangeJob>>,
    }

    impl DeviceListener for CollectingListener {
        fn attribute_changed(&self, job: &AttributeChangeJob) {
            self.jobs.lock().push(job.clone());
        }
    }

    fn setup() -> (TelegramDispatcher, Arc<Notifier>, Arc<CollectingListener>) {
        let registry = Arc::new(ProfileRegistry::with_defaults());

        let mut devices = HashMap::new();
        let contact = registry.resolve(EepId::new(0xD5, 0x00, 0x01)).unwrap();
        devices.insert(
            CONTACT_ADDR,
            Arc::new(EnOceanDevice::bind(CONTACT_ADDR, "window", contact.as_ref())),
        );
        let sensor = registry.resolve(EepId::new(0xA5, 0x02, 0x05)).unwrap();
        devices.insert(
            SENSOR_ADDR,
            Arc::new(EnOceanDevice::bind(SENSOR_ADDR, "room", sensor.as_ref())),
        );

        let notifier = Arc::new(Notifier::new(NotifierConfig {
            workers: 2,
            queue_depth: 16,
        }));
        let listener = Arc::new(CollectingListener::default());
        notifier.add_listener(listener.clone());

        let dispatcher = TelegramDispatcher::new(
            registry,
            Arc::new(MapDirectory { devices }),
            notifier.clone(),
        );
        (dispatcher, notifier, listener)
    }

    fn radio_packet(rorg: u8, payload: &[u8], sender: DeviceAddress) -> Packet {
        let (ty, data, opt) = radio_erp1(rorg, payload, sender, 0x00, DeviceAddress::BROADCAST);
        Packet::new(ty, data, opt).unwrap()
    }

    #[test]
    fn test_contact_telegram_dispatches_jobs() {
        let (dispatcher, notifier, listener) = setup();

        let outcome = dispatcher
            .handle_packet(&radio_packet(0xD5, &[0x09], CONTACT_ADDR))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Dispatched { jobs: 2, skipped: 0 });

        notifier.shutdown();
        let jobs = listener.jobs.lock();
        assert_eq!(jobs.len(), 2);
        let contact = jobs.iter().find(|j| j.attribute == "contact").unwrap();
        assert_eq!(contact.snapshot.scaled, ScaledValue::Switch(true));
        assert_eq!(contact.device.address(), CONTACT_ADDR);
    }

    #[test]
    fn test_temperature_telegram_updates_live_attribute() {
        let (dispatcher, notifier, _listener) = setup();

        dispatcher
            .handle_packet(&radio_packet(0xA5, &[0x00, 0x00, 0x64, 0x08], SENSOR_ADDR))
            .unwrap();

        let device = dispatcher
            .directory
            .device_by_address(SENSOR_ADDR)
            .unwrap();
        let snapshot = device
            .attribute(0, "temperature")
            .unwrap()
            .snapshot()
            .expect("attribute should have a value after dispatch");
        assert_eq!(snapshot.raw, 0x64);

        notifier.shutdown();
    }

    #[test]
    fn test_unknown_sender_is_reported() {
        let (dispatcher, notifier, listener) = setup();
        let stranger = DeviceAddress([0xDE, 0xAD, 0xBE, 0xEF]);

        let outcome = dispatcher
            .handle_packet(&radio_packet(0xD5, &[0x00], stranger))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::UnknownDevice(stranger));

        notifier.shutdown();
        assert!(listener.jobs.lock().is_empty());
    }

    #[test]
    fn test_invalid_telegram_length_fails_decode() {
        let (dispatcher, notifier, listener) = setup();

        let err = dispatcher
            .handle_packet(&radio_packet(0xD5, &[0x09, 0x00], CONTACT_ADDR))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Profile(EepError::InvalidTelegramLength { actual: 2, .. })
        ));

        notifier.shutdown();
        assert!(listener.jobs.lock().is_empty());
    }

    #[test]
    fn test_non_radio_packet_ignored() {
        let (dispatcher, notifier, _listener) = setup();
        let packet = Packet::new(PacketType::Response, vec![0x00], vec![]).unwrap();

        let outcome = dispatcher.handle_packet(&packet).unwrap();
        assert_eq!(outcome, DispatchOutcome::Ignored(PacketType::Response));

        notifier.shutdown();
    }
}
