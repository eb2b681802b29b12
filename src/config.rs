// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `PortGraph`.

/// Configuration options for the `PortGraph`.
#[derive(Clone, Default, Debug)]
pub struct PortGraphConfig {
    /// Whether to allow closed loops that don't pass through a power supply,
    /// like a ring of closed switches behind a diode.
    ///
    /// When this is `false`, reaching such a loop fails with a
    /// `CycleDetected` error.  When it is `true`, the walk doesn't go around
    /// the loop a second time, and the first passage found to each port is
    /// kept.
    ///
    /// Loops that lead back to a power supply are always rejected, with a
    /// `ChargePowerSupply` error.
    pub allow_cycles: bool,
}
