//! Mutable state for one check session
//!
//! Exactly one `Run` value exists per session and it is owned by the step
//! loop; nothing else mutates it. Items move from the queue to the results
//! log one at a time, never duplicated, never dropped, so
//! `remaining() + processed() == total()` holds after every step.

use pinsweep_core::{Location, LocationResult};
use std::collections::VecDeque;
use uuid::Uuid;

/// Orchestration state for one sweep over a batch of locations
#[derive(Debug)]
pub struct Run {
    /// Identifier for log correlation
    pub id: Uuid,
    queue: VecDeque<Location>,
    results: Vec<LocationResult>,
    total: usize,
}

impl Run {
    /// Create a run over an already-deduplicated location list
    pub fn new(locations: Vec<Location>) -> Self {
        let total = locations.len();
        Self {
            id: Uuid::new_v4(),
            queue: locations.into(),
            results: Vec::with_capacity(total),
            total,
        }
    }

    /// Queue length at run start; never changes afterwards
    pub fn total(&self) -> usize {
        self.total
    }

    /// Locations still waiting
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Locations completed so far
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    /// Take the next location off the front of the queue
    pub fn dequeue(&mut self) -> Option<Location> {
        self.queue.pop_front()
    }

    /// Append a completed item; insertion order is completion order
    pub fn record(&mut self, result: LocationResult) {
        self.results.push(result);
    }

    /// Every location is accounted for between queue and results.
    ///
    /// Only true between steps; while one location is in flight it lives in
    /// neither collection.
    pub fn is_balanced(&self) -> bool {
        self.queue.len() + self.results.len() == self.total
    }

    pub fn results(&self) -> &[LocationResult] {
        &self.results
    }
}
