// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the forest builder, which turns the undirected port
//! graph into one directed power flow tree per power supply.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::tree::Tree;
use crate::{DeviceKind, Error, PortGraph, TruthTable};

/// Forest generation.
impl<X> PortGraph<X> {
    /// Generates one [`Tree`] per power supply, in registration order, for
    /// the switch states in the given truth table.
    ///
    /// Switches that are not in the truth table keep their stored state.  The
    /// truth table only applies to this call.
    ///
    /// Fails without producing any trees if:
    ///  - a key of the truth table is not the name of a device,
    ///  - there are no power supplies,
    ///  - any power supply can reach a power supply port, its own included,
    ///  - a power supply can reach a loop that it could go around forever,
    ///    unless [`allow_cycles`][crate::PortGraphConfig::allow_cycles] is
    ///    set.
    pub fn gen_forest(&self, truth_table: &TruthTable) -> Result<Vec<Tree<'_, X>>, Error> {
        self.validate_truth_table(truth_table)?;

        let roots = self
            .devices
            .iter()
            .filter(|e| e.device.is_power_supply())
            .map(|e| e.ports[0])
            .collect::<Vec<_>>();
        if roots.is_empty() {
            return Err(Error::no_power_supplies());
        }

        let forest = roots
            .into_iter()
            .map(|root| self.grow_tree(root, truth_table))
            .collect::<Result<Vec<_>, _>>()?;

        for tree in &forest {
            tracing::debug!(
                "Tree of {} reaches {} ports.",
                tree.root_device().name(),
                tree.len()
            );
        }

        Ok(forest)
    }

    fn validate_truth_table(&self, truth_table: &TruthTable) -> Result<(), Error> {
        for name in truth_table.keys() {
            let device = self.device(name)?;
            if !device.is_switch() {
                tracing::warn!(
                    "Truth table entry for {} will be ignored, because it is not a switch.",
                    device
                );
            }
        }
        Ok(())
    }

    /// Returns the ports that the given port leads to, for the given truth
    /// table, along with the `extras` of the connections.
    ///
    /// These are the explicit connections of the port, followed by the other
    /// port of the same device when the device conducts between them:
    ///  - a switch that is closed, in the truth table or otherwise,
    ///  - a DC-DC converter, in both directions,
    ///  - a diode, only from port 0 to port 1.
    ///
    /// Links inside a device have no `extras`.
    pub(crate) fn effective_adjacency(
        &self,
        port: NodeIndex,
        truth_table: &TruthTable,
    ) -> Vec<(NodeIndex, Option<&X>)> {
        let mut adjacency = self
            .explicit_adjacency(port)
            .into_iter()
            .map(|(other, extras)| (other, Some(extras)))
            .collect::<Vec<_>>();

        let super::Port { device, index } = self.graph[port];
        let entry = &self.devices[device];
        let conducts = match entry.device.kind() {
            DeviceKind::Switch { on } => truth_table
                .get(entry.device.name())
                .copied()
                .unwrap_or(on),
            DeviceKind::DcDc => true,
            DeviceKind::Diode => index == 0,
            DeviceKind::PowerSupply | DeviceKind::Bus | DeviceKind::Load => false,
        };
        if conducts {
            adjacency.push((entry.ports[1 - index], None));
        }

        adjacency
    }

    /// Walks the graph depth first from the given power supply port, with an
    /// explicit stack.
    ///
    /// The walk is over steps, a port together with the port it was entered
    /// from, because that is all that decides where the walk can go next.
    /// Each step is expanded once.  A step that is entered again while it is
    /// still being expanded closes a loop that the walk would otherwise go
    /// around forever.
    ///
    /// A port entered through several steps is added to the tree only the
    /// first time.
    fn grow_tree(&self, root: NodeIndex, truth_table: &TruthTable) -> Result<Tree<'_, X>, Error> {
        let root_device = self.device_of(root);
        let mut tree = Tree::new(self, root);
        let mut on_path: HashSet<Step> = HashSet::new();
        let mut done: HashSet<Step> = HashSet::new();
        let mut stack = vec![Visit::Enter(
            Step {
                port: root,
                from: None,
            },
            Tree::<X>::ROOT,
        )];

        while let Some(visit) = stack.pop() {
            let (step, slot) = match visit {
                Visit::Enter(step, slot) => (step, slot),
                Visit::Exit(step) => {
                    on_path.remove(&step);
                    done.insert(step);
                    continue;
                }
            };

            if done.contains(&step) {
                continue;
            }
            if on_path.contains(&step) {
                if !self.config.allow_cycles {
                    return Err(Error::cycle_detected(
                        root_device.name(),
                        self.port_ref(step.port),
                    ));
                }
                tracing::debug!(
                    "Port {} is reached again in a loop from {}, not following it.",
                    self.port_ref(step.port),
                    root_device.name()
                );
                continue;
            }
            on_path.insert(step);
            stack.push(Visit::Exit(step));

            let Step { port, from } = step;
            let device = self.device_of(port);

            for (neighbor, extras) in self.effective_adjacency(port, truth_table) {
                if Some(neighbor) == from {
                    continue;
                }

                let neighbor_device = self.device_of(neighbor);
                if neighbor_device.is_power_supply() {
                    return Err(Error::charge_power_supply(
                        root_device.name(),
                        neighbor_device.name(),
                    ));
                }

                // Port 1 of a diode can't be entered from a non-diode port.
                if !device.is_diode()
                    && neighbor_device.is_diode()
                    && self.port_index_of(neighbor) == 1
                {
                    continue;
                }

                let child = match tree.slot_of(neighbor) {
                    Some(child) => child,
                    None => tree.add_child(slot, neighbor, extras),
                };
                stack.push(Visit::Enter(
                    Step {
                        port: neighbor,
                        from: Some(port),
                    },
                    child,
                ));
            }
        }

        Ok(tree)
    }
}

/// A port, and the port the walk entered it from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Step {
    port: NodeIndex,
    from: Option<NodeIndex>,
}

/// An entry of the walk's stack.
enum Visit {
    /// Expand the step, whose port is at the given slot of the tree.
    Enter(Step, usize),
    /// All steps reachable from the step have been expanded.
    Exit(Step),
}
