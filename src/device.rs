// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Device` struct and the `DeviceKind` enum, which
//! represent the devices of a power supply system.

use std::fmt::Display;

/// Represents the kind of a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    PowerSupply,
    /// A switch, with its stored state.  `on` means closed.
    Switch {
        on: bool,
    },
    DcDc,
    Bus,
    Load,
    Diode,
}

impl DeviceKind {
    /// Returns the number of ports a device of this kind has.
    pub fn port_num(&self) -> usize {
        match self {
            DeviceKind::PowerSupply | DeviceKind::Bus | DeviceKind::Load => 1,
            DeviceKind::Switch { .. } | DeviceKind::DcDc | DeviceKind::Diode => 2,
        }
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::PowerSupply => write!(f, "PowerSupply"),
            DeviceKind::Switch { .. } => write!(f, "Switch"),
            DeviceKind::DcDc => write!(f, "DcDc"),
            DeviceKind::Bus => write!(f, "Bus"),
            DeviceKind::Load => write!(f, "Load"),
            DeviceKind::Diode => write!(f, "Diode"),
        }
    }
}

/// A named device.
///
/// The name identifies the device inside a [`PortGraph`][crate::PortGraph]
/// and can't be changed once the device is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    name: String,
    kind: DeviceKind,
}

impl Device {
    /// Creates a new device with the given name and kind.
    pub fn new(name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a power supply, with a single port.
    pub fn power_supply(name: impl Into<String>) -> Self {
        Self::new(name, DeviceKind::PowerSupply)
    }

    /// Creates a switch with two ports, closed if `on` is true.
    pub fn switch(name: impl Into<String>, on: bool) -> Self {
        Self::new(name, DeviceKind::Switch { on })
    }

    /// Creates a DC-DC converter, which conducts both ways between its two ports.
    pub fn dc_dc(name: impl Into<String>) -> Self {
        Self::new(name, DeviceKind::DcDc)
    }

    /// Creates a bus, with a single port.
    pub fn bus(name: impl Into<String>) -> Self {
        Self::new(name, DeviceKind::Bus)
    }

    /// Creates a load, with a single port.
    pub fn load(name: impl Into<String>) -> Self {
        Self::new(name, DeviceKind::Load)
    }

    /// Creates a diode, which only conducts from port 0 to port 1.
    pub fn diode(name: impl Into<String>) -> Self {
        Self::new(name, DeviceKind::Diode)
    }

    /// Returns the name of the device.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of the device.
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the number of ports of the device.
    pub fn port_num(&self) -> usize {
        self.kind.port_num()
    }

    /// Returns the stored state of a switch, or `None` for other devices.
    pub fn is_on(&self) -> Option<bool> {
        match self.kind {
            DeviceKind::Switch { on } => Some(on),
            _ => None,
        }
    }

    /// Closes the switch.  Has no effect on other devices.
    pub fn turn_on(&mut self) {
        self.set_on(true);
    }

    /// Opens the switch.  Has no effect on other devices.
    pub fn turn_off(&mut self) {
        self.set_on(false);
    }

    fn set_on(&mut self, state: bool) {
        if let DeviceKind::Switch { on } = &mut self.kind {
            *on = state;
        }
    }

    pub fn is_power_supply(&self) -> bool {
        self.kind == DeviceKind::PowerSupply
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.kind, DeviceKind::Switch { .. })
    }

    pub fn is_dc_dc(&self) -> bool {
        self.kind == DeviceKind::DcDc
    }

    pub fn is_diode(&self) -> bool {
        self.kind == DeviceKind::Diode
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}
