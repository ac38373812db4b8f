//! Water-bucket measuring puzzle.
//!
//! Buckets can be filled to capacity, drained, or poured into one another
//! until the source empties or the destination fills. The goal is reached
//! when any bucket holds exactly the requested amount.

use std::fmt;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::{ParseError, Result};
use crate::report::format_list;

/// Problem data shared by every state of one search.
#[derive(Debug, PartialEq, Eq, Hash)]
struct Buckets {
    capacities: Vec<u32>,
    goal: u32,
}

/// Current fill level of each bucket.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct WaterConfig {
    levels: Vec<u32>,
    buckets: Arc<Buckets>,
}

impl WaterConfig {
    /// Creates the start state with every bucket empty.
    pub fn new(capacities: Vec<u32>, goal: u32) -> Result<Self> {
        if capacities.is_empty() {
            return Err(ParseError::NoBuckets);
        }
        Ok(Self {
            levels: vec![0; capacities.len()],
            buckets: Arc::new(Buckets { capacities, goal }),
        })
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn capacities(&self) -> &[u32] {
        &self.buckets.capacities
    }

    pub fn goal(&self) -> u32 {
        self.buckets.goal
    }

    /// Copies this state with new levels, sharing the problem data.
    fn with_levels(&self, levels: Vec<u32>) -> Self {
        Self {
            levels,
            buckets: Arc::clone(&self.buckets),
        }
    }

    fn fill(&self, bucket: usize) -> Self {
        let mut levels = self.levels.clone();
        levels[bucket] = self.buckets.capacities[bucket];
        self.with_levels(levels)
    }

    fn drain(&self, bucket: usize) -> Self {
        let mut levels = self.levels.clone();
        levels[bucket] = 0;
        self.with_levels(levels)
    }

    /// Pours `from` into `to` until `from` is empty or `to` is full.
    fn pour(&self, from: usize, to: usize) -> Self {
        let mut levels = self.levels.clone();
        let space = self.buckets.capacities[to] - levels[to];
        let amount = levels[from].min(space);
        levels[from] -= amount;
        levels[to] += amount;
        self.with_levels(levels)
    }
}

impl Configuration for WaterConfig {
    fn is_goal(&self) -> bool {
        self.levels.contains(&self.buckets.goal)
    }

    /// For each bucket in turn: fill, drain, then pour into every other bucket.
    fn neighbors(&self) -> Vec<Option<Self>> {
        let count = self.levels.len();
        let mut neighbors = Vec::with_capacity(count * (count + 1));

        for (bucket, &level) in self.levels.iter().enumerate() {
            if level != self.buckets.capacities[bucket] {
                neighbors.push(Some(self.fill(bucket)));
            }
            if level == 0 {
                continue;
            }
            neighbors.push(Some(self.drain(bucket)));
            for other in (0..count).filter(|&other| other != bucket) {
                neighbors.push(Some(self.pour(bucket, other)));
            }
        }

        neighbors
    }
}

impl fmt::Display for WaterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_list(&self.levels))
    }
}
