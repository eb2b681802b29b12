// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the crate:
//!
//! - builders for the port graphs used across tests,
//! - helpers for writing truth tables and comparing trees.

use crate::tree::Tree;
use crate::{Device, Error, PortGraph, TruthTable};

/// Builds a truth table from `(switch name, closed)` pairs.
pub(crate) fn truth_table(entries: &[(&str, bool)]) -> TruthTable {
    entries
        .iter()
        .map(|(name, on)| (name.to_string(), *on))
        .collect()
}

/// Returns every node of the tree with the ids of its children, in discovery
/// order.
pub(crate) fn shape<X>(tree: &Tree<'_, X>) -> Vec<(String, Vec<String>)> {
    tree.nodes()
        .map(|node| {
            (
                node.id(),
                tree.children(node).map(|c| c.id()).collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// A power supply, a DC-DC converter, a closed switch and a load, in a line:
///
/// ```text
/// power_supply -- dc_dc -- switch -- load
/// ```
pub(crate) fn linear_graph() -> Result<PortGraph, Error> {
    let mut graph = PortGraph::new();
    graph
        .add_device(Device::power_supply("power_supply"))?
        .add_device(Device::dc_dc("dc_dc"))?
        .connect(("power_supply", 0), ("dc_dc", 0))?
        .add_device(Device::switch("switch", true))?
        .connect(("dc_dc", 1), ("switch", 0))?
        .add_device(Device::load("load"))?
        .connect(("switch", 1), ("load", 0))?;
    Ok(graph)
}

/// Two power supplies, each feeding a shared bus through a diode:
///
/// ```text
/// power_supply_1 -- diode_1 --+
///                             bus -- load
/// power_supply_2 -- diode_2 --+
/// ```
pub(crate) fn diode_graph() -> Result<PortGraph, Error> {
    let mut graph = PortGraph::new();
    graph
        .add_device(Device::power_supply("power_supply_1"))?
        .add_device(Device::diode("diode_1"))?
        .connect(("power_supply_1", 0), ("diode_1", 0))?
        .add_device(Device::bus("bus"))?
        .connect(("diode_1", 1), ("bus", 0))?
        .add_device(Device::load("load"))?
        .connect(("bus", 0), ("load", 0))?
        .add_device(Device::power_supply("power_supply_2"))?
        .add_device(Device::diode("diode_2"))?
        .connect(("power_supply_2", 0), ("diode_2", 0))?
        .connect(("diode_2", 1), ("bus", 0))?;
    Ok(graph)
}

/// Two power supplies, each feeding its own bus through a switch, with a
/// tie switch between the buses.  All switches are closed.
///
/// ```text
/// power_supply_1 -- switch_1 -- bus_1 -- load_1
///                                 |
///                              switch_3
///                                 |
/// power_supply_2 -- switch_2 -- bus_2 -- load_2
/// ```
pub(crate) fn two_source_graph() -> Result<PortGraph, Error> {
    let mut graph = PortGraph::new();
    graph
        .add_device(Device::power_supply("power_supply_1"))?
        .add_device(Device::power_supply("power_supply_2"))?
        .add_device(Device::switch("switch_1", true))?
        .connect(("power_supply_1", 0), ("switch_1", 0))?
        .add_device(Device::switch("switch_2", true))?
        .connect(("power_supply_2", 0), ("switch_2", 0))?
        .add_device(Device::bus("bus_1"))?
        .connect(("switch_1", 1), ("bus_1", 0))?
        .add_device(Device::bus("bus_2"))?
        .connect(("switch_2", 1), ("bus_2", 0))?
        .add_device(Device::switch("switch_3", true))?
        .connect(("bus_1", 0), ("switch_3", 0))?
        .connect(("bus_2", 0), ("switch_3", 1))?
        .add_device(Device::load("load_1"))?
        .connect(("bus_1", 0), ("load_1", 0))?
        .add_device(Device::load("load_2"))?
        .connect(("bus_2", 0), ("load_2", 0))?;
    Ok(graph)
}

/// Two independent feeders, each made of a power supply, a DC-DC converter
/// and a main switch, fanning out to `buses` buses with `loads` switched
/// loads each.
pub(crate) fn feeder_graph(buses: usize, loads: usize) -> Result<PortGraph, Error> {
    let mut graph = PortGraph::new();
    for feeder in 0..2 {
        let main = format!("switch_{feeder}");
        graph
            .add_device(Device::power_supply(format!("power_supply_{feeder}")))?
            .add_device(Device::dc_dc(format!("dc_dc_{feeder}")))?
            .add_device(Device::switch(main.as_str(), true))?
            .connect(
                (format!("power_supply_{feeder}"), 0),
                (format!("dc_dc_{feeder}"), 0),
            )?
            .connect((format!("dc_dc_{feeder}"), 1), (main.clone(), 0))?;

        for i in 0..buses {
            let bus = format!("bus_{feeder}_{i}");
            graph
                .add_device(Device::bus(bus.as_str()))?
                .connect((main.clone(), 1), (bus.clone(), 0))?;

            for j in 0..loads {
                let switch = format!("switch_{feeder}_{i}_{j}");
                let load = format!("load_{feeder}_{i}_{j}");
                graph
                    .add_device(Device::switch(switch.as_str(), true))?
                    .add_device(Device::load(load.as_str()))?
                    .connect((bus.clone(), 0), (switch.clone(), 0))?
                    .connect((switch, 1), (load, 0))?;
            }
        }
    }
    Ok(graph)
}
