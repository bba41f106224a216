//! Random occupancy generation
//!
//! Produces an occupied-room set for demonstrations and load checks. Each room is
//! taken independently with the configured probability.

use crate::hotel::inventory::Inventory;
use crate::types::RoomId;
use rand::{rngs::StdRng, thread_rng, Rng, RngCore, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Generator for random occupancy snapshots
pub struct OccupancyGenerator {
    rng: Box<dyn RngCore>,
    ratio: f64,
}

impl fmt::Debug for OccupancyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupancyGenerator").field("ratio", &self.ratio).finish()
    }
}

/// Clamp a ratio into `0.0..=1.0`; NaN occupies nothing
fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

impl OccupancyGenerator {
    /// Create a generator seeded from the thread RNG
    pub fn new(ratio: f64) -> Self {
        Self { rng: Box::new(thread_rng()), ratio: sanitize_ratio(ratio) }
    }

    /// Create a generator with a specific seed
    pub fn with_seed(ratio: f64, seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), ratio: sanitize_ratio(ratio) }
    }

    /// Create a generator from an optional seed
    pub fn from_seed(ratio: f64, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(ratio, seed),
            None => Self::new(ratio),
        }
    }

    /// Probability that any single room is occupied
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Draw a fresh occupied set for the inventory
    pub fn generate(&mut self, inventory: &Inventory) -> HashSet<RoomId> {
        let occupied: HashSet<RoomId> = inventory
            .rooms()
            .iter()
            .filter(|_| self.rng.gen_bool(self.ratio))
            .map(|room| room.id)
            .collect();

        debug!(
            "Generated occupancy: {} of {} rooms taken (ratio {:.2})",
            occupied.len(),
            inventory.room_count(),
            self.ratio
        );
        occupied
    }
}
