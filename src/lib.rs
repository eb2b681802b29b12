// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Power Supply Port Graph

This is a library for representing the devices of a power distribution
system, and the connections between their ports, as an undirected graph, and
for deriving the directed power flow from every power supply for a given set
of switch states.

## Devices and ports

A [`Device`] is a power supply, a bus, a load, a switch, a DC-DC converter or
a diode.  Power supplies, buses and loads have a single port, the others have
two.  A port is addressed with a [`PortRef`], the name of its device and its
index, and displays as `"{device}.{index}"`.

Devices are registered with [`add_device`][PortGraph::add_device], and their
ports are connected with [`add_edge`][PortGraph::add_edge].  Every connection
carries an `extras` payload of the graph's type parameter, which is kept but
not interpreted.

```
use power_supply_port_graph::{Device, PortGraph, PortRef, TruthTable};

let mut graph = PortGraph::<()>::new();
graph
    .add_device(Device::power_supply("power_supply"))?
    .add_device(Device::dc_dc("dc_dc"))?
    .add_device(Device::switch("switch", true))?
    .add_device(Device::load("load"))?
    .connect(("power_supply", 0), ("dc_dc", 0))?
    .connect(("dc_dc", 1), ("switch", 0))?
    .connect(("switch", 1), ("load", 0))?;

let passages = graph.find_passages([("load", 0)], &TruthTable::new())?;
assert_eq!(
    passages[&PortRef::new("load", 0)][0]
        .iter()
        .map(|p| p.id())
        .collect::<Vec<_>>(),
    ["power_supply.0", "dc_dc.0", "dc_dc.1", "switch.0", "switch.1", "load.0"]
);
# Ok::<(), power_supply_port_graph::Error>(())
```

## Power flow

[`gen_forest`][PortGraph::gen_forest] walks the graph from every power supply
and returns one [`Tree`] per power supply.  Besides the explicit connections,
power flows:

- between the two ports of a closed switch,
- between the two ports of a DC-DC converter,
- from port 0 to port 1 of a diode, but never back.

The stored state of a switch can be overridden for a single call with a
[`TruthTable`].

The call fails if a power supply can reach another power supply, or loop back
to itself.  Loops that don't involve a power supply are rejected too, unless
[`PortGraphConfig::allow_cycles`] is set.

## Passages

[`find_passages`][PortGraph::find_passages] generates the forest once and
returns, for each of the given destination ports, the ports on the way from
every power supply that can reach it.
*/

mod device;
pub use device::{Device, DeviceKind};

mod port;
pub use port::PortRef;

mod graph;
pub use graph::{iterators, Passage, Passages, PortGraph, TruthTable};

mod tree;
pub use tree::{DirectedEdge, DirectedPort, Tree};

mod config;
pub use config::PortGraphConfig;

mod error;
pub use error::{Error, ErrorKind};
