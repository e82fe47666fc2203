//! Greedy earliest-available machine assignment.
//!
//! Every order goes to the machine with the smallest cumulative processing
//! time at the moment it arrives. Ties resolve to the lowest machine index.

use serde::Serialize;
use tracing::debug;

use crate::error::SchedulerError;
use crate::state_machine::OrderSink;

/// One committed order on a machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assignment {
    pub size: u64,
    pub start_time: f64,
}

/// Running load of a single machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MachineLoad {
    pub cumulative_time: f64,
    pub assignments: Vec<Assignment>,
}

/// Owns per-machine load across runs until [`reset`](GreedyScheduler::reset).
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    production_rate: f64,
    loads: Vec<MachineLoad>,
}

impl GreedyScheduler {
    /// `production_rate` is order units processed per unit of time.
    pub fn new(num_machines: usize, production_rate: f64) -> Result<Self, SchedulerError> {
        if num_machines == 0 {
            return Err(SchedulerError::InvalidConfiguration(
                "num_machines must be at least 1".into(),
            ));
        }
        if !production_rate.is_finite() || production_rate <= 0.0 {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "production_rate must be a positive number, got {production_rate}"
            )));
        }

        Ok(Self {
            production_rate,
            loads: vec![MachineLoad::default(); num_machines],
        })
    }

    pub fn num_machines(&self) -> usize {
        self.loads.len()
    }

    pub fn production_rate(&self) -> f64 {
        self.production_rate
    }

    pub fn loads(&self) -> &[MachineLoad] {
        &self.loads
    }

    /// Assigns an order to the least-loaded machine and returns its index.
    pub fn assign(&mut self, order_size: u64) -> usize {
        let mut best = 0;
        for (i, load) in self.loads.iter().enumerate().skip(1) {
            if load.cumulative_time < self.loads[best].cumulative_time {
                best = i;
            }
        }

        let machine = &mut self.loads[best];
        let start_time = machine.cumulative_time;
        machine.assignments.push(Assignment {
            size: order_size,
            start_time,
        });
        machine.cumulative_time += order_size as f64 / self.production_rate;

        debug!(order = order_size, machine = best, start_time, "assigned order");
        best
    }

    /// Clears every machine's load and history.
    pub fn reset(&mut self) {
        self.loads.iter_mut().for_each(|l| *l = MachineLoad::default());
    }
}

impl OrderSink for GreedyScheduler {
    fn submit(&mut self, order_size: u64) {
        self.assign(order_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            GreedyScheduler::new(0, 10.0),
            Err(SchedulerError::InvalidConfiguration(_))
        ));
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(GreedyScheduler::new(5, rate).is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut scheduler = GreedyScheduler::new(3, 10.0).unwrap();
        assert_eq!(scheduler.assign(10), 0);
        assert_eq!(scheduler.assign(10), 1);
        assert_eq!(scheduler.assign(10), 2);
        assert_eq!(scheduler.assign(10), 0);
    }

    #[test]
    fn start_time_is_load_before_assignment() {
        let mut scheduler = GreedyScheduler::new(1, 10.0).unwrap();
        scheduler.assign(50);
        scheduler.assign(20);
        let load = &scheduler.loads()[0];
        assert_eq!(
            load.assignments,
            vec![
                Assignment { size: 50, start_time: 0.0 },
                Assignment { size: 20, start_time: 5.0 },
            ]
        );
        assert_eq!(load.cumulative_time, 7.0);
    }

    #[test]
    fn reference_trace() {
        let orders = [50, 100, 200, 20, 10, 30, 1000, 500, 800, 80, 70];
        let expected_machine = [0, 1, 2, 3, 4, 4, 3, 4, 0, 1, 1];
        let expected_loads: [[f64; 5]; 11] = [
            [5.0, 0.0, 0.0, 0.0, 0.0],
            [5.0, 10.0, 0.0, 0.0, 0.0],
            [5.0, 10.0, 20.0, 0.0, 0.0],
            [5.0, 10.0, 20.0, 2.0, 0.0],
            [5.0, 10.0, 20.0, 2.0, 1.0],
            [5.0, 10.0, 20.0, 2.0, 4.0],
            [5.0, 10.0, 20.0, 102.0, 4.0],
            [5.0, 10.0, 20.0, 102.0, 54.0],
            [85.0, 10.0, 20.0, 102.0, 54.0],
            [85.0, 18.0, 20.0, 102.0, 54.0],
            [85.0, 25.0, 20.0, 102.0, 54.0],
        ];

        let mut scheduler = GreedyScheduler::new(5, 10.0).unwrap();
        for (i, &order) in orders.iter().enumerate() {
            let before: Vec<f64> = scheduler.loads().iter().map(|l| l.cumulative_time).collect();
            let chosen = scheduler.assign(order);
            assert_eq!(chosen, expected_machine[i], "order {order}");
            assert!(before.iter().all(|&t| before[chosen] <= t));

            let after: Vec<f64> = scheduler.loads().iter().map(|l| l.cumulative_time).collect();
            assert_eq!(after, expected_loads[i].to_vec(), "after order {order}");
        }
    }

    #[test]
    fn cumulative_time_matches_assignments() {
        let mut scheduler = GreedyScheduler::new(4, 3.0).unwrap();
        for order in [7, 13, 2, 99, 41, 5, 5, 18] {
            scheduler.assign(order);
        }
        for load in scheduler.loads() {
            let expected: f64 = load.assignments.iter().map(|a| a.size as f64 / 3.0).sum();
            assert!((load.cumulative_time - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn reset_clears_loads() {
        let mut scheduler = GreedyScheduler::new(2, 10.0).unwrap();
        scheduler.assign(100);
        scheduler.reset();
        assert!(scheduler.loads().iter().all(|l| l.cumulative_time == 0.0 && l.assignments.is_empty()));
        assert_eq!(scheduler.num_machines(), 2);
    }

    #[test]
    fn submit_assigns() {
        let mut scheduler = GreedyScheduler::new(2, 10.0).unwrap();
        OrderSink::submit(&mut scheduler, 30);
        assert_eq!(scheduler.loads()[0].assignments.len(), 1);
    }
}
