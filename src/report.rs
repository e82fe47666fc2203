use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::scheduler::MachineLoad;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderEntry {
    pub size: u64,
    pub start_time: f64,
}

/// Assignments and total time of one machine, labelled `Machine_<n>` (1-based).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineReport {
    // Serialized as the map key of the enclosing schedule.
    #[serde(skip)]
    pub machine: String,
    pub orders: Vec<OrderEntry>,
    pub total_time: f64,
}

/// Read-only view of scheduler state after a run.
///
/// Serializes as a map from machine label to `{ orders, total_time }`, in
/// machine order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub machines: Vec<MachineReport>,
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.machines.len()))?;
        for report in &self.machines {
            map.serialize_entry(&report.machine, report)?;
        }
        map.end()
    }
}

impl Schedule {
    pub fn from_loads(loads: &[MachineLoad]) -> Self {
        let machines = loads
            .iter()
            .enumerate()
            .map(|(i, load)| MachineReport {
                machine: format!("Machine_{}", i + 1),
                orders: load
                    .assignments
                    .iter()
                    .map(|a| OrderEntry {
                        size: a.size,
                        start_time: a.start_time,
                    })
                    .collect(),
                total_time: load.cumulative_time,
            })
            .collect();
        Self { machines }
    }

    pub fn get(&self, label: &str) -> Option<&MachineReport> {
        self.machines.iter().find(|m| m.machine == label)
    }

    /// Largest total time across machines.
    pub fn makespan(&self) -> f64 {
        self.machines.iter().map(|m| m.total_time).fold(0.0, f64::max)
    }

    pub fn total_time(&self) -> f64 {
        self.machines.iter().map(|m| m.total_time).sum()
    }

    pub fn order_count(&self) -> usize {
        self.machines.iter().map(|m| m.orders.len()).sum()
    }
}
