//! Device model, telegram dispatch, and listener notification.
//!
//! This crate connects the ESP3 codec and the EEP decoding engine to the
//! devices a gateway knows about. Incoming radio packets are resolved to a
//! device and its profile, decoded into attribute readings, and fanned out
//! to registered listeners on a bounded worker pool.
//!
//! # Architecture
//!
//! Decode runs synchronously on the transport-reading thread; only
//! notification delivery is asynchronous. The [`Notifier`] owns its worker
//! pool explicitly (no process-wide state) and its queue applies
//! backpressure by blocking the submitter when full, never by dropping
//! events.
//!
//! ## Key Types
//!
//! - [`EnOceanDevice`]: a known device with live attribute state
//! - [`TelegramDispatcher`]: drives packet → profile → attribute flow
//! - [`Notifier`]: bounded worker pool fanning events out to listeners
//! - [`DeviceListener`]: the subscriber capability set

mod device;
mod dispatcher;
mod job;
mod listener;
mod notifier;

pub use device::*;
pub use dispatcher::*;
pub use job::*;
pub use listener::*;
pub use notifier::*;
