// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The directed power flow trees produced by
//! [`PortGraph::gen_forest`][crate::PortGraph::gen_forest].

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use crate::iterators::{Ancestors, Children};
use crate::{Device, Passage, PortGraph, PortRef};

/// A port, as reached by the traversal from a tree's root.
///
/// Trees built from different power supplies may each have a `DirectedPort`
/// for the same underlying port.  They are independent of each other.
#[derive(Debug)]
pub struct DirectedPort<'a, X> {
    pub(crate) port: NodeIndex,
    pub(crate) device: &'a Device,
    pub(crate) port_index: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) extras: Option<&'a X>,
}

impl<'a, X> DirectedPort<'a, X> {
    /// Returns the device that owns the port.
    pub fn device(&self) -> &'a Device {
        self.device
    }

    /// Returns the index of the port within its device.
    pub fn port_index(&self) -> usize {
        self.port_index
    }

    /// Returns the address of the port.
    pub fn port(&self) -> PortRef {
        PortRef::new(self.device.name(), self.port_index)
    }

    /// Returns the canonical id of the port.
    pub fn id(&self) -> String {
        self.port().id()
    }

    /// Returns true if the port is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the number of children of the port.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the `extras` of the connection through which the port was
    /// reached.
    ///
    /// This is `None` for the root, and for ports reached by crossing a
    /// closed switch, a DC-DC converter or a diode.
    pub fn extras(&self) -> Option<&'a X> {
        self.extras
    }
}

/// A connection in a `Tree`, from a port to one of its children.
///
/// The direction is the direction in which the traversal discovered the
/// connection.
#[derive(Debug)]
pub struct DirectedEdge<'t, 'a, X> {
    pub from: &'t DirectedPort<'a, X>,
    pub to: &'t DirectedPort<'a, X>,
    pub extras: Option<&'a X>,
}

impl<X> DirectedEdge<'_, '_, X> {
    /// Returns an id of the form `"{from} -> {to}"`, with the canonical ids
    /// of the two ports.
    pub fn id(&self) -> String {
        format!("{} -> {}", self.from.id(), self.to.id())
    }
}

/// The ports reachable from a single power supply, for one switch
/// configuration.
///
/// Methods that take a `&DirectedPort` expect a node of the same tree.
#[derive(Debug)]
pub struct Tree<'a, X> {
    graph: &'a PortGraph<X>,
    nodes: Vec<DirectedPort<'a, X>>,
    slots: HashMap<NodeIndex, usize>,
}

/// Construction, used by the forest builder.
impl<'a, X> Tree<'a, X> {
    /// The slot of the root in `nodes`.
    pub(crate) const ROOT: usize = 0;

    pub(crate) fn new(graph: &'a PortGraph<X>, root: NodeIndex) -> Self {
        let mut tree = Self {
            graph,
            nodes: Vec::new(),
            slots: HashMap::new(),
        };
        tree.insert(root, None, None);
        tree
    }

    /// Adds `port` as the last child of the node at `parent`, and returns its
    /// slot.
    pub(crate) fn add_child(
        &mut self,
        parent: usize,
        port: NodeIndex,
        extras: Option<&'a X>,
    ) -> usize {
        let slot = self.insert(port, Some(parent), extras);
        self.nodes[parent].children.push(slot);
        slot
    }

    /// Returns the slot of the given port, if it is in the tree.
    pub(crate) fn slot_of(&self, port: NodeIndex) -> Option<usize> {
        self.slots.get(&port).copied()
    }

    fn insert(&mut self, port: NodeIndex, parent: Option<usize>, extras: Option<&'a X>) -> usize {
        let graph = self.graph;
        let slot = self.nodes.len();
        self.nodes.push(DirectedPort {
            port,
            device: graph.device_of(port),
            port_index: graph.port_index_of(port),
            parent,
            children: Vec::new(),
            extras,
        });
        self.slots.insert(port, slot);
        slot
    }
}

impl<'a, X> Tree<'a, X> {
    /// Returns the root of the tree, the port of a power supply.
    pub fn root(&self) -> &DirectedPort<'a, X> {
        &self.nodes[Self::ROOT]
    }

    /// Returns the power supply at the root of the tree.
    pub fn root_device(&self) -> &'a Device {
        self.root().device
    }

    /// Returns the number of ports in the tree, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, because a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the ports of the tree, in the order in which
    /// they were discovered.
    pub fn nodes(&self) -> std::slice::Iter<'_, DirectedPort<'a, X>> {
        self.nodes.iter()
    }

    /// Returns the node for the given port, if it is reachable from the root.
    pub fn node(&self, port: &PortRef) -> Option<&DirectedPort<'a, X>> {
        let index = self.graph.lookup_port(port)?;
        self.slots.get(&index).map(|&slot| &self.nodes[slot])
    }

    /// Returns true if the given port is reachable from the root.
    pub fn contains(&self, port: &PortRef) -> bool {
        self.node(port).is_some()
    }

    /// Returns the parent of the given node, or `None` for the root.
    pub fn parent(&self, node: &DirectedPort<'a, X>) -> Option<&DirectedPort<'a, X>> {
        node.parent.map(|slot| &self.nodes[slot])
    }

    /// Returns an iterator over the children of the given node.
    pub fn children<'t>(&'t self, node: &'t DirectedPort<'a, X>) -> Children<'t, 'a, X> {
        Children {
            nodes: &self.nodes,
            iter: node.children.iter(),
        }
    }

    /// Returns an iterator over the connections from the given node to each
    /// of its children.
    pub fn edges<'t>(
        &'t self,
        node: &'t DirectedPort<'a, X>,
    ) -> impl Iterator<Item = DirectedEdge<'t, 'a, X>> {
        self.children(node).map(move |child| DirectedEdge {
            from: node,
            to: child,
            extras: child.extras,
        })
    }

    /// Returns an iterator over the given node and its ancestors, ending with
    /// the root.
    pub fn ancestors<'t>(&'t self, node: &'t DirectedPort<'a, X>) -> Ancestors<'t, 'a, X> {
        Ancestors {
            nodes: &self.nodes,
            next: self.slots.get(&node.port).copied(),
        }
    }

    /// Returns the number of connections between the root and the given
    /// node.
    pub fn depth(&self, node: &DirectedPort<'a, X>) -> usize {
        self.ancestors(node).count() - 1
    }

    /// Finds the passage from the root of the tree to the given port.
    ///
    /// Returns `None` if the port is not reachable from the root.
    pub fn find_passage(&self, to: &PortRef) -> Option<Passage> {
        let Some(node) = self.node(to) else {
            tracing::debug!("No port {} in tree with root {}.", to, self.root().port());
            return None;
        };
        let mut passage = self
            .ancestors(node)
            .map(|n| n.port())
            .collect::<Vec<_>>();
        passage.reverse();
        Some(passage)
    }
}
