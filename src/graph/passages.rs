// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for finding the passages from the power supplies to a set of
//! destination ports.

use std::collections::HashSet;

use crate::{Error, Passages, PortGraph, PortRef, TruthTable};

impl<X> PortGraph<X> {
    /// Finds the passages from every power supply to each of the given
    /// destination ports, for the given truth table.
    ///
    /// The forest is generated only once per call, so all destinations of
    /// interest should be passed together rather than one call per
    /// destination.
    ///
    /// Destinations that no power supply can reach are not in the returned
    /// map.  A destination reached by several power supplies has one passage
    /// per power supply, in power supply registration order.
    pub fn find_passages<I>(
        &self,
        destinations: I,
        truth_table: &TruthTable,
    ) -> Result<Passages, Error>
    where
        I: IntoIterator,
        I::Item: Into<PortRef>,
    {
        let forest = self.gen_forest(truth_table)?;

        let mut passages = Passages::new();
        let mut seen = HashSet::new();
        for destination in destinations {
            let destination = destination.into();
            if !seen.insert(destination.clone()) {
                continue;
            }
            for tree in &forest {
                if let Some(passage) = tree.find_passage(&destination) {
                    passages
                        .entry(destination.clone())
                        .or_default()
                        .push(passage);
                }
            }
        }

        Ok(passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{diode_graph, feeder_graph, linear_graph, truth_table};

    #[test]
    fn test_linear_passage() -> Result<(), Error> {
        let graph = linear_graph()?;

        let passages = graph.find_passages([("load", 0)], &truth_table(&[]))?;
        assert_eq!(passages.len(), 1);
        assert_eq!(
            passages[&PortRef::new("load", 0)],
            vec![vec![
                PortRef::new("power_supply", 0),
                PortRef::new("dc_dc", 0),
                PortRef::new("dc_dc", 1),
                PortRef::new("switch", 0),
                PortRef::new("switch", 1),
                PortRef::new("load", 0),
            ]]
        );

        let passages = graph.find_passages([("load", 0)], &truth_table(&[("switch", false)]))?;
        assert!(passages.is_empty());

        Ok(())
    }

    #[test]
    fn test_multiple_sources() -> Result<(), Error> {
        let graph = diode_graph()?;

        let passages = graph.find_passages(
            [PortRef::new("load", 0), PortRef::new("diode_1", 1)],
            &truth_table(&[]),
        )?;

        assert_eq!(
            passages[&PortRef::new("load", 0)],
            vec![
                vec![
                    PortRef::new("power_supply_1", 0),
                    PortRef::new("diode_1", 0),
                    PortRef::new("diode_1", 1),
                    PortRef::new("bus", 0),
                    PortRef::new("load", 0),
                ],
                vec![
                    PortRef::new("power_supply_2", 0),
                    PortRef::new("diode_2", 0),
                    PortRef::new("diode_2", 1),
                    PortRef::new("bus", 0),
                    PortRef::new("load", 0),
                ],
            ]
        );

        // Only the first power supply reaches the cathode of its own diode.
        assert_eq!(passages[&PortRef::new("diode_1", 1)].len(), 1);
        assert_eq!(
            passages[&PortRef::new("diode_1", 1)][0][0],
            PortRef::new("power_supply_1", 0)
        );

        Ok(())
    }

    #[test]
    fn test_unknown_destinations() -> Result<(), Error> {
        let graph = linear_graph()?;

        let passages = graph.find_passages(
            [("nowhere", 0), ("load", 3), ("load", 0), ("load", 0)],
            &truth_table(&[]),
        )?;

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[&PortRef::new("load", 0)].len(), 1);

        Ok(())
    }

    #[test]
    fn test_errors_propagate() -> Result<(), Error> {
        let graph = linear_graph()?;

        assert!(graph
            .find_passages([("load", 0)], &truth_table(&[("switch_9", true)]))
            .is_err_and(|e| e == Error::no_such_device("switch_9")));
        assert!(PortGraph::<()>::new()
            .find_passages([("load", 0)], &truth_table(&[]))
            .is_err_and(|e| e == Error::no_power_supplies()));

        Ok(())
    }

    #[test]
    fn test_batching_equivalence() -> Result<(), Error> {
        let graph = feeder_graph(3, 3)?;

        let destinations = [
            PortRef::new("load_0_0_0", 0),
            PortRef::new("load_0_2_1", 0),
            PortRef::new("load_1_1_2", 0),
            PortRef::new("bus_1_0", 0),
            PortRef::new("switch_0_1_1", 1),
        ];

        for table in [
            truth_table(&[]),
            truth_table(&[("switch_0", false)]),
            truth_table(&[("switch_0_2_1", false), ("switch_1_1_2", false)]),
        ] {
            let batched = graph.find_passages(&destinations, &table)?;
            for destination in &destinations {
                let single = graph.find_passages([destination], &table)?;
                assert_eq!(batched.get(destination), single.get(destination));
            }
        }

        Ok(())
    }

    #[test]
    fn test_feeders() -> Result<(), Error> {
        let graph = feeder_graph(2, 2)?;

        let passages = graph.find_passages(
            [("load_0_1_0", 0), ("load_1_0_1", 0)],
            &truth_table(&[("switch_1_0_1", false)]),
        )?;

        assert_eq!(passages.len(), 1);
        let passage = &passages[&PortRef::new("load_0_1_0", 0)][0];
        assert_eq!(
            passage.iter().map(|p| p.id()).collect::<Vec<_>>(),
            [
                "power_supply_0.0",
                "dc_dc_0.0",
                "dc_dc_0.1",
                "switch_0.0",
                "switch_0.1",
                "bus_0_1.0",
                "switch_0_1_0.0",
                "switch_0_1_0.1",
                "load_0_1_0.0",
            ]
        );

        Ok(())
    }
}
