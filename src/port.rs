// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Addressing of device ports.

use std::fmt::Display;

/// The address of a port: the name of its device and the port's index.
///
/// Displays as the canonical port id, `"{device}.{index}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    device: String,
    index: usize,
}

impl PortRef {
    pub fn new(device: impl Into<String>, index: usize) -> Self {
        Self {
            device: device.into(),
            index,
        }
    }

    /// Returns the name of the device that owns the port.
    pub fn device_name(&self) -> &str {
        &self.device
    }

    /// Returns the index of the port within its device.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the canonical id of the port.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl Display for PortRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.device, self.index)
    }
}

impl From<(&str, usize)> for PortRef {
    fn from((device, index): (&str, usize)) -> Self {
        Self::new(device, index)
    }
}

impl From<(String, usize)> for PortRef {
    fn from((device, index): (String, usize)) -> Self {
        Self::new(device, index)
    }
}

impl From<&PortRef> for PortRef {
    fn from(port: &PortRef) -> Self {
        port.clone()
    }
}
