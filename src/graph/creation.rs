// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`PortGraph`] instances and adding devices and
//! connections to them.

use std::fmt::Debug;

use petgraph::graph::UnGraph;

use crate::{Device, Error, PortGraphConfig, PortRef};

use super::{DeviceEntry, DeviceIndexMap, Port, PortGraph};

/// `PortGraph` instantiation.
impl<X> PortGraph<X> {
    /// Creates an empty [`PortGraph`] with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PortGraphConfig::default())
    }

    /// Creates an empty [`PortGraph`] with the given configuration.
    pub fn with_config(config: PortGraphConfig) -> Self {
        Self {
            graph: UnGraph::default(),
            devices: Vec::new(),
            device_indices: DeviceIndexMap::new(),
            config,
        }
    }

    /// Registers a device, and allocates its ports.
    ///
    /// Returns an error if a device with the same name already exists.
    pub fn add_device(&mut self, device: Device) -> Result<&mut Self, Error> {
        if self.device_indices.contains_key(device.name()) {
            return Err(Error::duplicate_device(device.name()));
        }

        let device_index = self.devices.len();
        let ports = (0..device.port_num())
            .map(|index| {
                self.graph.add_node(Port {
                    device: device_index,
                    index,
                })
            })
            .collect();

        self.device_indices
            .insert(device.name().to_string(), device_index);
        self.devices.push(DeviceEntry { device, ports });

        Ok(self)
    }

    /// Connects two ports.  The connection is undirected.
    ///
    /// Returns an error if either device doesn't exist, if either port index
    /// is out of range, if both ports are the same port, or if the two ports
    /// are already connected.
    pub fn add_edge(
        &mut self,
        first: impl Into<PortRef>,
        second: impl Into<PortRef>,
        extras: X,
    ) -> Result<&mut Self, Error>
    where
        X: Debug,
    {
        let first = first.into();
        let second = second.into();

        let first_idx = self.port_index(&first)?;
        let second_idx = self.port_index(&second)?;

        if first_idx == second_idx {
            return Err(Error::self_connection(first));
        }
        if self.graph.find_edge(first_idx, second_idx).is_some() {
            return Err(Error::duplicate_connection(
                first,
                second,
                format!("{extras:?}"),
            ));
        }

        self.graph.add_edge(first_idx, second_idx, extras);

        Ok(self)
    }

    /// Connects two ports, with default `extras`.
    pub fn connect(
        &mut self,
        first: impl Into<PortRef>,
        second: impl Into<PortRef>,
    ) -> Result<&mut Self, Error>
    where
        X: Debug + Default,
    {
        self.add_edge(first, second, X::default())
    }
}
