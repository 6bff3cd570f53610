//! Property-based testing strategies.

use proptest::prelude::*;
use proptest::sample::subsequence;

use civ_core::world_seeder::WorldConfig;

/// Rival civilizations available in the sample ruleset.
pub const SAMPLE_RIVALS: [&str; 3] = ["Greece", "China", "Egypt"];

/// World configurations over the sample ruleset: radius 0..=20, exclusion
/// 0..=8, any ordered subset of rivals, up to 8 barbarian units and a
/// fixed seed.
pub fn arb_world_config() -> impl Strategy<Value = WorldConfig> {
    (
        0u32..=20,
        0u32..=8,
        subsequence(SAMPLE_RIVALS.to_vec(), 0..=SAMPLE_RIVALS.len()),
        0u32..=8,
        any::<u64>(),
    )
        .prop_map(|(radius, exclusion, rivals, barbarians, seed)| {
            WorldConfig::default()
                .with_map_radius(radius)
                .with_exclusion_radius(exclusion)
                .with_rivals(rivals)
                .with_barbarian_units(barbarians)
                .with_seed(seed)
        })
}
