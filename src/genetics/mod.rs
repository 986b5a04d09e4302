//! Monkey genetics: trait pools, DNA, and generation.
//!
//! Every monkey is described by one [`MonkeyDna`]: a gene per trait category,
//! a generation counter, and a sha256 hash over the gene values that gives
//! the monkey a stable identity (and seeds the visualizer's pseudo-random
//! placement).

pub mod dna;
pub mod engine;
pub mod pools;

pub use dna::{Gene, GeneticsError, GeneticsResult, MonkeyDna, Rarity, TraitCategory};
pub use engine::GeneticsEngine;
