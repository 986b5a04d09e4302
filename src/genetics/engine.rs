//! Weighted random DNA generation.

use super::pools::{self, TraitPool};
use super::{Gene, MonkeyDna, Rarity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

// Tier draw weights out of 100
const WEIGHT_COMMON: u32 = 60;
const WEIGHT_UNCOMMON: u32 = 25;
const WEIGHT_RARE: u32 = 12;

/// Generates monkey DNA from the trait pools
pub struct GeneticsEngine;

impl GeneticsEngine {
    /// Generate a generation-0 monkey with the default RNG
    pub fn generate_random() -> MonkeyDna {
        Self::generate_with_rng(&mut rand::thread_rng(), 0)
    }

    /// Deterministic generation from a fixed seed
    pub fn generate_seeded(seed: u64, generation: u32) -> MonkeyDna {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with_rng(&mut rng, generation)
    }

    /// Draw one gene per category using the tier weights
    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, generation: u32) -> MonkeyDna {
        let mut traits = BTreeMap::new();
        for pool in pools::all_pools() {
            let gene = Self::draw_gene(rng, &pool);
            traits.insert(pool.category, gene);
        }
        MonkeyDna::new(generation, traits)
    }

    fn draw_gene<R: Rng + ?Sized>(rng: &mut R, pool: &TraitPool) -> Gene {
        let tier = Self::draw_tier(rng);

        let candidates: Vec<&(&str, Rarity)> =
            pool.values.iter().filter(|(_, r)| *r == tier).collect();

        // Every pool carries every tier, but fall back to the whole pool
        // rather than panicking if that ever changes.
        let (value, rarity) = if candidates.is_empty() {
            pool.values[rng.gen_range(0..pool.values.len())]
        } else {
            *candidates[rng.gen_range(0..candidates.len())]
        };

        Gene::new(value, rarity)
    }

    fn draw_tier<R: Rng + ?Sized>(rng: &mut R) -> Rarity {
        let roll = rng.gen_range(0..100u32);
        if roll < WEIGHT_COMMON {
            Rarity::Common
        } else if roll < WEIGHT_COMMON + WEIGHT_UNCOMMON {
            Rarity::Uncommon
        } else if roll < WEIGHT_COMMON + WEIGHT_UNCOMMON + WEIGHT_RARE {
            Rarity::Rare
        } else {
            Rarity::Legendary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::TraitCategory;

    #[test]
    fn test_generates_all_categories() {
        let dna = GeneticsEngine::generate_random();
        assert_eq!(dna.traits.len(), TraitCategory::ALL.len());
        for category in TraitCategory::ALL {
            assert!(!dna.trait_value(category).is_empty());
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = GeneticsEngine::generate_seeded(42, 0);
        let b = GeneticsEngine::generate_seeded(42, 0);
        assert_eq!(a.dna_hash, b.dna_hash);
        assert_eq!(a.traits, b.traits);
    }

    #[test]
    fn test_genes_come_from_pools() {
        let dna = GeneticsEngine::generate_seeded(7, 0);
        for (category, gene) in &dna.traits {
            assert_eq!(
                pools::rarity_of(*category, &gene.value),
                Some(gene.rarity),
                "gene {}={} not in pool",
                category,
                gene.value
            );
        }
    }

    #[test]
    fn test_tier_distribution_favors_common() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut common = 0;
        let mut legendary = 0;
        for _ in 0..2000 {
            match GeneticsEngine::draw_tier(&mut rng) {
                Rarity::Common => common += 1,
                Rarity::Legendary => legendary += 1,
                _ => {}
            }
        }
        assert!(common > 1000, "common drawn {} times", common);
        assert!(legendary < 150, "legendary drawn {} times", legendary);
    }
}
