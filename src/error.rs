// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur in the library.

use crate::PortRef;

/// The kind of error that occurred, along with the names and ports involved.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// A device with the same name is already registered.
    DuplicateDevice { name: String },
    /// No device with the given name is registered.
    NoSuchDevice { name: String },
    /// The port index is not smaller than the device's port count.
    InvalidPort { device: String, index: usize },
    /// A port can't be connected to itself.
    SelfConnection { port: PortRef },
    /// The two ports are already connected.
    DuplicateConnection {
        first: PortRef,
        second: PortRef,
        extras: String,
    },
    /// A forest was requested for a graph without power supplies.
    NoPowerSupplies,
    /// Traversal from the power supply `from` reached the power supply `to`.
    ChargePowerSupply { from: String, to: String },
    /// Traversal from the power supply `root` reached `port` a second time.
    CycleDetected { root: String, port: PortRef },
    /// The device is not a switch.
    NotASwitch { name: String },
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DuplicateDevice { .. } => "DuplicateDevice",
            Self::NoSuchDevice { .. } => "NoSuchDevice",
            Self::InvalidPort { .. } => "InvalidPort",
            Self::SelfConnection { .. } => "SelfConnection",
            Self::DuplicateConnection { .. } => "DuplicateConnection",
            Self::NoPowerSupplies => "NoPowerSupplies",
            Self::ChargePowerSupply { .. } => "ChargePowerSupply",
            Self::CycleDetected { .. } => "CycleDetected",
            Self::NotASwitch { .. } => "NotASwitch",
        };
        write!(f, "{name}")
    }
}

/// An error that can occur during the creation or traversal of a
/// [PortGraph][crate::PortGraph].
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

/// Constructors for [`Error`].
impl Error {
    pub(crate) fn duplicate_device(name: &str) -> Self {
        Self {
            desc: format!("Duplicate device: {name}"),
            kind: ErrorKind::DuplicateDevice {
                name: name.to_string(),
            },
        }
    }

    pub(crate) fn no_such_device(name: &str) -> Self {
        Self {
            desc: format!("No such device: {name}"),
            kind: ErrorKind::NoSuchDevice {
                name: name.to_string(),
            },
        }
    }

    pub(crate) fn invalid_port(device: &str, index: usize) -> Self {
        Self {
            desc: format!("Invalid port: {device}.{index}"),
            kind: ErrorKind::InvalidPort {
                device: device.to_string(),
                index,
            },
        }
    }

    pub(crate) fn self_connection(port: PortRef) -> Self {
        Self {
            desc: format!("Can't connect port {port} to itself."),
            kind: ErrorKind::SelfConnection { port },
        }
    }

    pub(crate) fn duplicate_connection(first: PortRef, second: PortRef, extras: String) -> Self {
        Self {
            desc: format!("Duplicate connection: from {first} to {second}, extras - {extras}"),
            kind: ErrorKind::DuplicateConnection {
                first,
                second,
                extras,
            },
        }
    }

    pub(crate) fn no_power_supplies() -> Self {
        Self {
            desc: "No power supplies in graph".to_string(),
            kind: ErrorKind::NoPowerSupplies,
        }
    }

    pub(crate) fn charge_power_supply(from: &str, to: &str) -> Self {
        Self {
            desc: format!("Charge power supply: from {from} to {to}"),
            kind: ErrorKind::ChargePowerSupply {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }

    pub(crate) fn cycle_detected(root: &str, port: PortRef) -> Self {
        Self {
            desc: format!("Cycle detected: port {port} is reachable from {root} more than once"),
            kind: ErrorKind::CycleDetected {
                root: root.to_string(),
                port,
            },
        }
    }

    pub(crate) fn not_a_switch(name: &str) -> Self {
        Self {
            desc: format!("Device {name} is not a switch"),
            kind: ErrorKind::NotASwitch {
                name: name.to_string(),
            },
        }
    }
}

impl Error {
    /// Returns the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}
