// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A port-level graph representation of the devices of a power supply system,
//! and the connections between their ports.

mod creation;
mod passages;
mod retrieval;
mod traversal;

pub mod iterators;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{Device, PortGraphConfig, PortRef};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// A per-query override of switch states, from switch name to `true` for
/// closed and `false` for open.
pub type TruthTable = HashMap<String, bool>;

/// The ports on the way from a power supply to a destination port, starting
/// with the power supply's port and ending with the destination.
pub type Passage = Vec<PortRef>;

/// The passages found for each reachable destination port, one per power
/// supply that reaches it.
pub type Passages = HashMap<PortRef, Vec<Passage>>;

/// The weight of a node in the underlying `UnGraph`.
///
/// Every node is a port, addressed by the position of its device in
/// `PortGraph::devices` and its index within the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Port {
    pub(crate) device: usize,
    pub(crate) index: usize,
}

/// A registered device, along with the `NodeIndex` of each of its ports.
#[derive(Debug)]
pub(crate) struct DeviceEntry {
    pub(crate) device: Device,
    pub(crate) ports: Vec<NodeIndex>,
}

/// `DeviceIndexMap` stores the position in `PortGraph::devices` for any
/// device name, so that names only need to be hashed at the API boundary.
pub(crate) type DeviceIndexMap = HashMap<String, usize>;

/// A graph of the ports of the devices of a power supply system, and the
/// undirected connections between them.
///
/// Each connection carries an `extras` payload of type `X`, which is not
/// interpreted by the graph.
#[derive(Debug)]
pub struct PortGraph<X = ()> {
    graph: UnGraph<Port, X>,
    devices: Vec<DeviceEntry>,
    device_indices: DeviceIndexMap,
    config: PortGraphConfig,
}

impl<X> Default for PortGraph<X> {
    fn default() -> Self {
        Self::new()
    }
}
