//! Asynchronous listener notification.
//!
//! The [`Notifier`] owns a bounded queue and a fixed pool of worker
//! threads. Submitting is cheap and only blocks when the queue is full;
//! the queue never drops events. Each worker fans one notification out to
//! every registered listener, isolating per-listener panics.
//!
//! Shutdown drains: the queue is closed to new submissions, workers finish
//! everything already queued, then the threads are joined.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use tracing::warn;

use crate::device::EnOceanDevice;
use crate::job::AttributeChangeJob;
use crate::listener::DeviceListener;

/// Configuration for the notification worker pool.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Number of worker threads.
    pub workers: usize,
    /// Queue capacity before submitters block.
    pub queue_depth: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        NotifierConfig {
            workers: 5,
            queue_depth: 64,
        }
    }
}

/// An event delivered to listeners.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A device was added to the directory.
    DeviceAdded(Arc<EnOceanDevice>),
    /// A device's configuration changed.
    DeviceModified(Arc<EnOceanDevice>),
    /// A device was removed from the directory.
    DeviceRemoved(Arc<EnOceanDevice>),
    /// An attribute value changed.
    AttributeChanged(AttributeChangeJob),
}

type ListenerList = Arc<RwLock<Vec<Arc<dyn DeviceListener>>>>;

/// Fans notifications out to listeners on a fixed worker pool.
pub struct Notifier {
    tx: Mutex<Option<Sender<Notification>>>,
    listeners: ListenerList,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl Notifier {
    /// Create a notifier and start its worker threads.
    pub fn new(config: NotifierConfig) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(config.queue_depth);
        let listeners: ListenerList = Arc::new(RwLock::new(Vec::new()));

        let workers = (0..config.workers.max(1))
            .map(|index| spawn_worker(index, rx.clone(), Arc::clone(&listeners)))
            .collect();

        Notifier {
            tx: Mutex::new(Some(tx)),
            listeners,
            workers: Mutex::new(workers),
        }
    }

    /// Create a notifier with the default pool size.
    pub fn with_defaults() -> Self {
        Self::new(NotifierConfig::default())
    }

    /// Register a listener. Events submitted from now on are delivered to
    /// it; in-flight events may or may not be.
    pub fn add_listener(&self, listener: Arc<dyn DeviceListener>) {
        self.listeners.write().push(listener);
    }

    /// Queue a notification for delivery.
    ///
    /// Blocks only while the queue is full. Submissions after shutdown are
    /// dropped with a warning.
    pub fn submit(&self, notification: Notification) {
        let tx = self.tx.lock().clone();
        match tx {
            Some(tx) => {
                if tx.send(notification).is_err() {
                    warn!("notification workers are gone; event dropped");
                }
            }
            None => warn!("notifier is shut down; event dropped"),
        }
    }

    /// Shut down the pool, draining the queue first.
    ///
    /// Everything submitted before this call is still delivered; the call
    /// returns once all workers have exited.
    pub fn shutdown(&self) {
        drop(self.tx.lock().take());
        for handle in self.workers.lock().drain(..) {
            if handle.join().is_err() {
                warn!("notification worker panicked during shutdown");
            }
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_worker(index: usize, rx: Receiver<Notification>, listeners: ListenerList) -> JoinHandle<()> {
    thread::Builder::new()
        .name(format!("notify-{}", index))
        .spawn(move || {
            // Runs until the channel is closed and drained.
            while let Ok(notification) = rx.recv() {
                deliver(&listeners, &notification);
            }
        })
        .expect("failed to spawn notification worker")
}

/// Deliver one notification to every listener, isolating panics.
fn deliver(listeners: &ListenerList, notification: &Notification) {
    let listeners = listeners.read().clone();
    for listener in listeners {
        let result = catch_unwind(AssertUnwindSafe(|| match notification {
            Notification::DeviceAdded(device) => listener.added_device(device),
            Notification::DeviceModified(device) => listener.modified_device(device),
            Notification::DeviceRemoved(device) => listener.removed_device(device),
            Notification::AttributeChanged(job) => listener.attribute_changed(job),
        }));
        if result.is_err() {
            warn!("listener panicked while handling a notification");
        }
    }
}
