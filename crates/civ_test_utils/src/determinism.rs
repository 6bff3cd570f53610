//! Determinism testing utilities.
//!
//! Provides a harness for verifying that world seeding produces identical
//! sessions given an identical ruleset, configuration and seed.
//!
//! # Testing Strategy
//!
//! Reproducible worlds are what make a seed worth sharing. Sources of
//! non-determinism include:
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Tiles live in a `BTreeMap` and registries keep insertion order.
//!
//! - **System randomness**: No rng is created inside the core; every
//!   random choice draws from the caller's seeded `ChaCha8Rng`.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: Map generation with a fixed seed
//! 2. **Property tests**: Random configurations still seed reproducibly
//! 3. **Parallel tests**: Seeding N worlds on N threads all match

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use civ_core::persistence::encode_session;
use civ_core::ruleset::Ruleset;
use civ_core::session::GameSessionState;
use civ_core::world_seeder::{seeded_rng, WorldConfig, WorldSeeder};

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical sessions.
    pub is_deterministic: bool,
    /// Session hashes from each run.
    pub hashes: Vec<u64>,
    /// Seed used for every run.
    pub seed: u64,
}

impl DeterminismResult {
    fn from_hashes(hashes: Vec<u64>, seed: u64) -> Self {
        Self {
            is_deterministic: hashes.windows(2).all(|w| w[0] == w[1]),
            hashes,
            seed,
        }
    }

    /// Get all unique hashes (should be 1 for deterministic seeding).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that seeding was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different sessions.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "World seeding is non-deterministic!\n\
                 Runs: {}\n\
                 Seed: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                self.seed,
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Compute a hash of any hashable value.
#[must_use]
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash of a session's save encoding.
///
/// # Panics
///
/// Panics if the session cannot be encoded.
#[must_use]
pub fn session_hash(session: &GameSessionState) -> u64 {
    let bytes = encode_session(session).expect("session encodes");
    compute_hash(&bytes)
}

/// Seed a world with the given seed.
///
/// # Panics
///
/// Panics if seeding fails.
#[must_use]
pub fn seed_world(ruleset: &Ruleset, config: &WorldConfig, seed: u64) -> GameSessionState {
    let mut rng = seeded_rng(Some(seed));
    WorldSeeder::new(ruleset, config)
        .seed_new_session(None, &mut rng)
        .expect("world seeds")
}

/// Seed the same world `runs` times and compare the results.
///
/// # Example
///
/// ```ignore
/// use civ_test_utils::determinism::verify_seeding_determinism;
/// use civ_test_utils::fixtures::{sample_ruleset, small_world_config};
///
/// let result = verify_seeding_determinism(&sample_ruleset(), &small_world_config(), 42, 5);
/// result.assert_deterministic();
/// ```
#[must_use]
pub fn verify_seeding_determinism(
    ruleset: &Ruleset,
    config: &WorldConfig,
    seed: u64,
    runs: usize,
) -> DeterminismResult {
    let hashes = (0..runs)
        .map(|_| session_hash(&seed_world(ruleset, config, seed)))
        .collect();
    DeterminismResult::from_hashes(hashes, seed)
}

/// Seed N worlds on scoped threads and collect their hashes.
///
/// # Panics
///
/// Panics if a seeding thread panics.
#[must_use]
pub fn run_parallel_seedings(
    ruleset: &Ruleset,
    config: &WorldConfig,
    seed: u64,
    num_worlds: usize,
) -> DeterminismResult {
    let hashes = thread::scope(|s| {
        let handles: Vec<_> = (0..num_worlds)
            .map(|_| s.spawn(|| session_hash(&seed_world(ruleset, config, seed))))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("seeding thread panicked"))
            .collect()
    });
    DeterminismResult::from_hashes(hashes, seed)
}

/// Describe the first difference between two sessions, if any.
///
/// Useful for debugging non-determinism: names the first tile or
/// civilization that differs instead of a pair of hashes.
#[must_use]
pub fn find_first_divergence(a: &GameSessionState, b: &GameSessionState) -> Option<String> {
    if a.tile_map.radius() != b.tile_map.radius() {
        return Some(format!(
            "map radius {} vs {}",
            a.tile_map.radius(),
            b.tile_map.radius()
        ));
    }

    for (left, right) in a.tile_map.tiles().zip(b.tile_map.tiles()) {
        if left != right {
            return Some(format!("tile {}: {left:?} vs {right:?}", left.position));
        }
    }

    for (left, right) in a.civilizations.iter().zip(&b.civilizations) {
        if left != right {
            return Some(format!("civilization {}: {left:?} vs {right:?}", left.civ_name));
        }
    }

    if a.civilizations.len() != b.civilizations.len() {
        return Some(format!(
            "{} vs {} civilizations",
            a.civilizations.len(),
            b.civilizations.len()
        ));
    }

    (a.tutorial != b.tutorial || a.turns != b.turns)
        .then(|| "tutorial progress or turn counter".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_ruleset, small_world_config, TEST_SEED};

    #[test]
    fn test_verify_seeding_determinism() {
        let ruleset = sample_ruleset();
        let result = verify_seeding_determinism(&ruleset, &small_world_config(), TEST_SEED, 3);
        result.assert_deterministic();
        assert_eq!(result.unique_hashes().len(), 1);
    }

    #[test]
    fn test_parallel_seedings_match() {
        let ruleset = sample_ruleset();
        run_parallel_seedings(&ruleset, &small_world_config(), TEST_SEED, 4).assert_deterministic();
    }

    #[test]
    fn test_find_divergence() {
        let ruleset = sample_ruleset();
        let config = small_world_config();
        let a = seed_world(&ruleset, &config, 1);
        let b = seed_world(&ruleset, &config, 1);
        let c = seed_world(&ruleset, &config, 2);

        assert!(find_first_divergence(&a, &b).is_none());
        assert!(find_first_divergence(&a, &c).is_some());
    }
}
