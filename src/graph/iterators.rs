// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over devices and connections in a `PortGraph`, and over the
//! nodes of a `Tree`.

use petgraph::graph::NodeIndex;

use super::DeviceEntry;
use crate::tree::DirectedPort;
use crate::{Device, PortGraph, PortRef};

/// An iterator over the devices in a `PortGraph`.
pub struct Devices<'a> {
    pub(crate) iter: std::slice::Iter<'a, DeviceEntry>,
}

impl<'a> Iterator for Devices<'a> {
    type Item = &'a Device;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.device)
    }
}

/// A connection between two ports, as returned by [`Connections`].
#[derive(Debug, PartialEq)]
pub struct Connection<'a, X> {
    pub first: PortRef,
    pub second: PortRef,
    pub extras: &'a X,
}

/// An iterator over the connections in a `PortGraph`.
pub struct Connections<'a, X> {
    pub(crate) cg: &'a PortGraph<X>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<X>>,
}

impl<'a, X> Iterator for Connections<'a, X> {
    type Item = Connection<'a, X>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| Connection {
            first: self.cg.port_ref(e.source()),
            second: self.cg.port_ref(e.target()),
            extras: &e.weight,
        })
    }
}

/// An iterator over the ports connected to a port in a `PortGraph`.
pub struct Neighbors<'a, X> {
    pub(crate) cg: &'a PortGraph<X>,
    pub(crate) iter: std::vec::IntoIter<(NodeIndex, &'a X)>,
}

impl<'a, X> Iterator for Neighbors<'a, X> {
    type Item = (PortRef, &'a X);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(index, extras)| (self.cg.port_ref(index), extras))
    }
}

/// An iterator over the children of a node in a `Tree`.
pub struct Children<'t, 'a, X> {
    pub(crate) nodes: &'t [DirectedPort<'a, X>],
    pub(crate) iter: std::slice::Iter<'t, usize>,
}

impl<'t, 'a, X> Iterator for Children<'t, 'a, X> {
    type Item = &'t DirectedPort<'a, X>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.iter.next().map(|&slot| &nodes[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<X> ExactSizeIterator for Children<'_, '_, X> {}

/// An iterator over a node of a `Tree` and its ancestors, up to and
/// including the root.
pub struct Ancestors<'t, 'a, X> {
    pub(crate) nodes: &'t [DirectedPort<'a, X>],
    pub(crate) next: Option<usize>,
}

impl<'t, 'a, X> Iterator for Ancestors<'t, 'a, X> {
    type Item = &'t DirectedPort<'a, X>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.parent;
        Some(node)
    }
}
