// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving devices, ports and connections from a
//! [`PortGraph`].

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::iterators::{Connections, Devices, Neighbors};
use crate::{Device, Error, PortGraph, PortGraphConfig, PortRef};

/// `Device`, `Port` and `Connection` retrieval.
impl<X> PortGraph<X> {
    /// Returns the device with the given name, if it exists.
    pub fn device(&self, name: &str) -> Result<&Device, Error> {
        self.device_indices
            .get(name)
            .map(|&i| &self.devices[i].device)
            .ok_or_else(|| Error::no_such_device(name))
    }

    /// Returns a mutable reference to the device with the given name, if it
    /// exists.
    ///
    /// Useful for changing the stored state of a switch between queries.
    pub fn device_mut(&mut self, name: &str) -> Result<&mut Device, Error> {
        match self.device_indices.get(name) {
            Some(&i) => Ok(&mut self.devices[i].device),
            None => Err(Error::no_such_device(name)),
        }
    }

    /// Sets the stored state of the switch with the given name.
    ///
    /// Returns an error if the device doesn't exist or is not a switch.
    pub fn set_switch(&mut self, name: &str, on: bool) -> Result<(), Error> {
        let device = self.device_mut(name)?;
        if !device.is_switch() {
            return Err(Error::not_a_switch(name));
        }
        if on {
            device.turn_on();
        } else {
            device.turn_off();
        }
        Ok(())
    }

    /// Returns an iterator over the devices in the graph, in registration
    /// order.
    pub fn devices(&self) -> Devices<'_> {
        Devices {
            iter: self.devices.iter(),
        }
    }

    /// Returns an iterator over the power supplies in the graph, in
    /// registration order.
    pub fn power_supplies(&self) -> impl Iterator<Item = &Device> {
        self.devices().filter(|d| d.is_power_supply())
    }

    /// Returns an iterator over the connections in the graph, in the order in
    /// which they were added.
    pub fn connections(&self) -> Connections<'_, X> {
        Connections {
            cg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the ports connected to the given port, along
    /// with the `extras` of each connection, in the order in which the
    /// connections were added.
    ///
    /// Only explicit connections are returned.  The links that closed
    /// switches, DC-DC converters and diodes form between their own ports are
    /// not.
    ///
    /// Returns an error if the given port does not exist.
    pub fn neighbors(&self, port: impl Into<PortRef>) -> Result<Neighbors<'_, X>, Error> {
        let index = self.port_index(&port.into())?;
        Ok(Neighbors {
            cg: self,
            iter: self.explicit_adjacency(index).into_iter(),
        })
    }

    /// Returns true if the given port exists.
    pub fn contains_port(&self, port: &PortRef) -> bool {
        self.lookup_port(port).is_some()
    }

    /// Returns the number of devices in the graph.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns the number of ports in the graph.
    pub fn port_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of connections in the graph.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the configuration of the graph.
    pub fn config(&self) -> &PortGraphConfig {
        &self.config
    }

    /// Returns the `NodeIndex` of the given port.
    ///
    /// Returns an error if the device doesn't exist or the port index is out
    /// of range.
    pub(crate) fn port_index(&self, port: &PortRef) -> Result<NodeIndex, Error> {
        let name = port.device_name();
        let &device_index = self
            .device_indices
            .get(name)
            .ok_or_else(|| Error::no_such_device(name))?;
        self.devices[device_index]
            .ports
            .get(port.index())
            .copied()
            .ok_or_else(|| Error::invalid_port(name, port.index()))
    }

    /// Returns the `NodeIndex` of the given port, if it exists.
    pub(crate) fn lookup_port(&self, port: &PortRef) -> Option<NodeIndex> {
        self.port_index(port).ok()
    }

    /// Returns the device that owns the port at the given `NodeIndex`.
    pub(crate) fn device_of(&self, index: NodeIndex) -> &Device {
        &self.devices[self.graph[index].device].device
    }

    /// Returns the index of the port at the given `NodeIndex` within its
    /// device.
    pub(crate) fn port_index_of(&self, index: NodeIndex) -> usize {
        self.graph[index].index
    }

    /// Returns the address of the port at the given `NodeIndex`.
    pub(crate) fn port_ref(&self, index: NodeIndex) -> PortRef {
        PortRef::new(self.device_of(index).name(), self.port_index_of(index))
    }

    /// Returns the ports connected to the given port and the `extras` of each
    /// connection, in the order in which the connections were added.
    ///
    /// The returned `Vec` is a snapshot, and doesn't borrow the adjacency
    /// structure of the graph.
    pub(crate) fn explicit_adjacency(&self, index: NodeIndex) -> Vec<(NodeIndex, &X)> {
        let mut edges = self.graph.edges(index).collect::<Vec<_>>();
        // petgraph yields the most recently added edges first.
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| {
                let other = if e.source() == index {
                    e.target()
                } else {
                    e.source()
                };
                (other, e.weight())
            })
            .collect()
    }
}
