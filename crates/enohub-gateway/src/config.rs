//! Gateway configuration loading.
//!
//! The gateway is configured from a YAML file:
//!
//! ```yaml
//! transport:
//!   # TCP endpoint of the serial bridge in front of the transceiver.
//!   # The serial side runs 57600 baud, 8 data bits, 1 stop bit, no
//!   # parity, no flow control; that is the bridge's concern, not ours.
//!   endpoint: "127.0.0.1:9009"
//!
//! notifier:
//!   workers: 5
//!   queue_depth: 64
//!
//! devices:
//!   - address: "01:82:5D:AB"
//!     name: "hall window"
//!     eep: "D5-00-01"
//!   - address: "01:94:E3:B9"
//!     name: "living room"
//!     eep: "A5-02-05"
//! ```

use std::path::Path;

use enohub_eep::EepId;
use esp3_protocol::DeviceAddress;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML or misses required fields.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A device address is not 4 hex bytes.
    #[error("invalid device address '{0}'")]
    InvalidAddress(String),

    /// An EEP identifier is not of the form `RR-FF-TT`.
    #[error("invalid EEP identifier '{0}'")]
    InvalidEep(String),
}

/// Transport section.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    /// TCP endpoint of the serial bridge.
    pub endpoint: String,
}

/// Notifier section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSection {
    /// Number of notification worker threads.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Queue capacity before submitters block.
    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,
}

fn default_workers() -> usize {
    5
}

fn default_queue_depth() -> usize {
    64
}

impl Default for NotifierSection {
    fn default() -> Self {
        NotifierSection {
            workers: default_workers(),
            queue_depth: default_queue_depth(),
        }
    }
}

/// One configured device.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Radio address, hex with optional `:` separators.
    pub address: String,
    /// Human-readable name.
    pub name: String,
    /// Profile identifier, e.g. `"A5-02-05"`.
    pub eep: String,
}

impl DeviceConfig {
    /// Parse the configured radio address.
    pub fn parse_address(&self) -> Result<DeviceAddress, ConfigError> {
        let cleaned: String = self.address.chars().filter(|c| *c != ':').collect();
        let bytes =
            hex::decode(&cleaned).map_err(|_| ConfigError::InvalidAddress(self.address.clone()))?;
        DeviceAddress::from_slice(&bytes)
            .ok_or_else(|| ConfigError::InvalidAddress(self.address.clone()))
    }

    /// Parse the configured EEP identifier.
    pub fn parse_eep(&self) -> Result<EepId, ConfigError> {
        let parts: Vec<&str> = self.eep.split('-').collect();
        if parts.len() != 3 {
            return Err(ConfigError::InvalidEep(self.eep.clone()));
        }
        let byte = |part: &str| {
            u8::from_str_radix(part, 16).map_err(|_| ConfigError::InvalidEep(self.eep.clone()))
        };
        Ok(EepId::new(byte(parts[0])?, byte(parts[1])?, byte(parts[2])?))
    }
}

/// The whole gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Transport section.
    pub transport: TransportConfig,
    /// Notifier section.
    #[serde(default)]
    pub notifier: NotifierSection,
    /// Known devices to register at startup.
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

impl GatewayConfig {
    /// Load the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}
