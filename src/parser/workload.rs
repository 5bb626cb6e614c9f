//! Workload data model: process specifications and the per-size lookup table.

use std::collections::HashMap;

/// One process specification from an input trace file
///
/// **Public** - shared between the loader and the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Process name (unique key within a workload)
    pub name: String,

    /// Maximum allowed completion time
    pub deadline: u64,

    /// Arrival time in the simulation
    pub arrival_time: u64,

    /// Required CPU time
    pub burst_time: u64,
}

/// Name-keyed table of process specs for one workload size
///
/// **Public** - built once by the loader, read-only during aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadTable {
    /// Number of processes in this workload (the normalization divisor,
    /// not necessarily equal to `specs.len()`)
    pub size: usize,

    specs: HashMap<String, ProcessSpec>,
}

impl WorkloadTable {
    /// Create an empty table for the given workload size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            specs: HashMap::new(),
        }
    }

    /// Insert a spec keyed by its name
    ///
    /// **Public** - last-write-wins: a repeated name silently replaces the
    /// earlier entry. Not an error; later lines in a trace file take
    /// precedence over earlier ones.
    pub fn upsert(&mut self, spec: ProcessSpec) {
        self.specs.insert(spec.name.clone(), spec);
    }

    /// Look up a spec by process name
    pub fn get(&self, name: &str) -> Option<&ProcessSpec> {
        self.specs.get(name)
    }

    /// Number of distinct processes currently in the table
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True if no specs have been loaded
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
