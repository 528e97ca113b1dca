//! Gateway runner wiring for EnoHub.
//!
//! This crate is the thin application shell around the core crates: it
//! loads a YAML configuration, owns the in-memory device table, hooks a
//! logging listener into the notifier, and pumps bytes from a TCP-bridged
//! serial port into the frame codec. Everything protocol- or
//! profile-shaped lives in `esp3-protocol`, `enohub-eep`, and
//! `enohub-device`.

pub mod config;
pub mod device_table;
pub mod log_listener;
pub mod transport;

pub use config::{ConfigError, DeviceConfig, GatewayConfig};
pub use device_table::DeviceTable;
pub use log_listener::LogListener;
