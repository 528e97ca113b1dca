//! Listener fan-out and isolation tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use enohub_device::{
    AttributeChangeJob, DeviceListener, EnOceanDevice, Notification, Notifier, NotifierConfig,
};
use enohub_eep::profiles::SingleInputContact;
use esp3_protocol::DeviceAddress;

struct PanickingListener;

impl DeviceListener for PanickingListener {
    fn attribute_changed(&self, _job: &AttributeChangeJob) {
        panic!("listener failure");
    }

    fn added_device(&self, _device: &Arc<EnOceanDevice>) {
        panic!("listener failure");
    }
}

struct CountingListener {
    events: AtomicUsize,
}

impl DeviceListener for CountingListener {
    fn added_device(&self, _device: &Arc<EnOceanDevice>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }

    fn attribute_changed(&self, _job: &AttributeChangeJob) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }
}

fn test_device() -> Arc<EnOceanDevice> {
    Arc::new(EnOceanDevice::bind(
        DeviceAddress([0x01, 0x82, 0x5D, 0xAB]),
        "window",
        &SingleInputContact::new(),
    ))
}

#[test]
fn test_panicking_listener_does_not_starve_sibling() {
    let notifier = Notifier::new(NotifierConfig {
        workers: 2,
        queue_depth: 8,
    });

    // The panicking listener is registered first, so it runs first for
    // every event; its failure must not block the counting listener.
    notifier.add_listener(Arc::new(PanickingListener));
    let counting = Arc::new(CountingListener {
        events: AtomicUsize::new(0),
    });
    notifier.add_listener(counting.clone());

    let device = test_device();
    for _ in 0..5 {
        notifier.submit(Notification::DeviceAdded(device.clone()));
    }
    notifier.shutdown();

    assert_eq!(counting.events.load(Ordering::SeqCst), 5);
}

#[test]
fn test_workers_survive_repeated_panics() {
    let notifier = Notifier::new(NotifierConfig {
        workers: 1,
        queue_depth: 8,
    });

    notifier.add_listener(Arc::new(PanickingListener));
    let counting = Arc::new(CountingListener {
        events: AtomicUsize::new(0),
    });
    notifier.add_listener(counting.clone());

    let device = test_device();
    // With a single worker, any uncontained panic would kill the pool and
    // strand the rest of the queue.
    for _ in 0..20 {
        notifier.submit(Notification::DeviceAdded(device.clone()));
    }
    notifier.shutdown();

    assert_eq!(counting.events.load(Ordering::SeqCst), 20);
}
