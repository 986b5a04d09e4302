//! Trait pools: every value the visualizer can draw, by rarity tier.

use super::{Rarity, TraitCategory};

/// One category's pool of (value, rarity) pairs
pub struct TraitPool {
    pub category: TraitCategory,
    pub values: &'static [(&'static str, Rarity)],
}

pub const BODY_COLORS: &[(&str, Rarity)] = &[
    ("brown", Rarity::Common),
    ("tan", Rarity::Common),
    ("beige", Rarity::Common),
    ("gray", Rarity::Common),
    ("golden", Rarity::Uncommon),
    ("silver", Rarity::Uncommon),
    ("copper", Rarity::Uncommon),
    ("bronze", Rarity::Uncommon),
    ("blue", Rarity::Rare),
    ("purple", Rarity::Rare),
    ("green", Rarity::Rare),
    ("pink", Rarity::Rare),
    ("rainbow", Rarity::Legendary),
    ("galaxy", Rarity::Legendary),
    ("holographic", Rarity::Legendary),
    ("crystal", Rarity::Legendary),
];

pub const FACE_EXPRESSIONS: &[(&str, Rarity)] = &[
    ("happy", Rarity::Common),
    ("sleepy", Rarity::Common),
    ("winking", Rarity::Common),
    ("surprised", Rarity::Common),
    ("excited", Rarity::Uncommon),
    ("laughing", Rarity::Uncommon),
    ("mischievous", Rarity::Uncommon),
    ("cool", Rarity::Uncommon),
    ("wise", Rarity::Rare),
    ("zen", Rarity::Rare),
    ("enlightened", Rarity::Legendary),
    ("cosmic", Rarity::Legendary),
    ("divine", Rarity::Legendary),
    ("legendary", Rarity::Legendary),
];

pub const ACCESSORIES: &[(&str, Rarity)] = &[
    ("none", Rarity::Common),
    ("simple_hat", Rarity::Common),
    ("bandana", Rarity::Common),
    ("bow", Rarity::Common),
    ("sunglasses", Rarity::Uncommon),
    ("crown", Rarity::Uncommon),
    ("headphones", Rarity::Uncommon),
    ("monocle", Rarity::Uncommon),
    ("halo", Rarity::Rare),
    ("horns", Rarity::Rare),
    ("wizard_hat", Rarity::Rare),
    ("golden_crown", Rarity::Legendary),
    ("diamond_chain", Rarity::Legendary),
    ("jetpack", Rarity::Legendary),
    ("wings", Rarity::Legendary),
    ("laser_eyes", Rarity::Legendary),
];

pub const PATTERNS: &[(&str, Rarity)] = &[
    ("solid", Rarity::Common),
    ("spots", Rarity::Common),
    ("stripes", Rarity::Common),
    ("stars", Rarity::Uncommon),
    ("hearts", Rarity::Uncommon),
    ("diamonds", Rarity::Uncommon),
    ("swirls", Rarity::Uncommon),
    ("gradient", Rarity::Rare),
    ("nebula", Rarity::Rare),
    ("lightning", Rarity::Rare),
    ("flames", Rarity::Rare),
    ("fractals", Rarity::Legendary),
    ("aurora", Rarity::Legendary),
    ("quantum", Rarity::Legendary),
    ("cosmic_dust", Rarity::Legendary),
    ("void", Rarity::Legendary),
];

pub const BACKGROUNDS: &[(&str, Rarity)] = &[
    ("white", Rarity::Common),
    ("blue_sky", Rarity::Common),
    ("green_grass", Rarity::Common),
    ("sunset", Rarity::Common),
    ("forest", Rarity::Uncommon),
    ("beach", Rarity::Uncommon),
    ("mountains", Rarity::Uncommon),
    ("city", Rarity::Uncommon),
    ("space", Rarity::Rare),
    ("underwater", Rarity::Rare),
    ("volcano", Rarity::Rare),
    ("aurora", Rarity::Rare),
    ("multiverse", Rarity::Legendary),
    ("black_hole", Rarity::Legendary),
    ("dimension_rift", Rarity::Legendary),
    ("heaven", Rarity::Legendary),
];

pub const SPECIALS: &[(&str, Rarity)] = &[
    ("none", Rarity::Common),
    ("sparkles", Rarity::Uncommon),
    ("glow", Rarity::Uncommon),
    ("shadow", Rarity::Uncommon),
    ("particles", Rarity::Rare),
    ("aura", Rarity::Rare),
    ("energy", Rarity::Rare),
    ("transcendent", Rarity::Legendary),
    ("godlike", Rarity::Legendary),
    ("mythical", Rarity::Legendary),
];

/// Pool for each category, in canonical order
pub fn all_pools() -> [TraitPool; 6] {
    [
        TraitPool {
            category: TraitCategory::BodyColor,
            values: BODY_COLORS,
        },
        TraitPool {
            category: TraitCategory::FaceExpression,
            values: FACE_EXPRESSIONS,
        },
        TraitPool {
            category: TraitCategory::Accessory,
            values: ACCESSORIES,
        },
        TraitPool {
            category: TraitCategory::Pattern,
            values: PATTERNS,
        },
        TraitPool {
            category: TraitCategory::Background,
            values: BACKGROUNDS,
        },
        TraitPool {
            category: TraitCategory::Special,
            values: SPECIALS,
        },
    ]
}

/// Look up the rarity of a value within a category's pool
pub fn rarity_of(category: TraitCategory, value: &str) -> Option<Rarity> {
    all_pools()
        .iter()
        .find(|p| p.category == category)
        .and_then(|p| p.values.iter().find(|(v, _)| *v == value))
        .map(|(_, r)| *r)
}
