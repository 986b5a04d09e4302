//! SVG monkey art generated from DNA.
//!
//! The render stacks layers back to front: defs, background, special effects
//! behind the body, the body itself (ears, head, pattern, muzzle), the face,
//! the accessory, special effects in front, and the rarity/generation badges.
//! Pseudo-random placement (stars, spots, windows) is driven by the DNA seed
//! so the same monkey always renders identically.

mod accessory;
mod body;
mod face;
mod scene;
mod special;

use crate::genetics::{MonkeyDna, TraitCategory};

/// Default square render size in pixels
pub const DEFAULT_SIZE: u32 = 400;

/// Generate the complete SVG document for a monkey
pub fn generate_svg(dna: &MonkeyDna, width: u32, height: u32) -> String {
    let seed = dna.seed();

    let parts = [
        format!(
            r##"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"##,
            w = width,
            h = height
        ),
        defs().to_string(),
        scene::background(dna.trait_value(TraitCategory::Background), width, height, seed),
        special::back(dna.trait_value(TraitCategory::Special), width, height),
        body::body(
            dna.trait_value(TraitCategory::BodyColor),
            dna.trait_value(TraitCategory::Pattern),
            width,
            height,
            seed,
        ),
        face::face(dna.trait_value(TraitCategory::FaceExpression), width, height),
        accessory::accessory(dna.trait_value(TraitCategory::Accessory), width, height),
        special::front(dna.trait_value(TraitCategory::Special), width, height, seed),
        badge(dna, width, height),
        "</svg>".to_string(),
    ];

    parts.join("\n")
}

/// Square thumbnail render
pub fn generate_thumbnail(dna: &MonkeyDna, size: u32) -> String {
    generate_svg(dna, size, size)
}

/// Shared gradients, filters, and the head clip path
fn defs() -> &'static str {
    r##"<defs>
    <filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">
        <feDropShadow dx="2" dy="4" stdDeviation="3" flood-opacity="0.3"/>
    </filter>
    <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">
        <feGaussianBlur stdDeviation="8" result="blur"/>
        <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
    <linearGradient id="rainbow-body" x1="0%" y1="0%" x2="100%" y2="100%">
        <stop offset="0%" stop-color="#FF6B6B"/><stop offset="25%" stop-color="#FFE66D"/>
        <stop offset="50%" stop-color="#4ECDC4"/><stop offset="75%" stop-color="#45B7D1"/>
        <stop offset="100%" stop-color="#DDA0DD"/>
    </linearGradient>
    <radialGradient id="galaxy-body" cx="30%" cy="30%">
        <stop offset="0%" stop-color="#E6E6FA"/><stop offset="50%" stop-color="#9370DB"/>
        <stop offset="100%" stop-color="#1A0033"/>
    </radialGradient>
    <linearGradient id="holo-body" x1="0%" y1="0%" x2="100%" y2="100%">
        <stop offset="0%" stop-color="#FF00FF"/><stop offset="50%" stop-color="#00FFFF"/>
        <stop offset="100%" stop-color="#FFFF00"/>
    </linearGradient>
    <linearGradient id="sky-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="#87CEEB"/><stop offset="100%" stop-color="#E0F4FF"/>
    </linearGradient>
    <linearGradient id="grass-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="#90EE90"/><stop offset="100%" stop-color="#228B22"/>
    </linearGradient>
    <linearGradient id="sunset-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="#FF6B6B"/><stop offset="50%" stop-color="#FFE66D"/>
        <stop offset="100%" stop-color="#4ECDC4"/>
    </linearGradient>
    <linearGradient id="aurora-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
        <stop offset="0%" stop-color="#0D1B2A"/><stop offset="30%" stop-color="#00FF7F"/>
        <stop offset="70%" stop-color="#FF00FF"/><stop offset="100%" stop-color="#0D1B2A"/>
    </linearGradient>
    <radialGradient id="multiverse-gradient" cx="50%" cy="50%">
        <stop offset="0%" stop-color="#FFD700"/><stop offset="40%" stop-color="#FF00FF"/>
        <stop offset="70%" stop-color="#00FFFF"/><stop offset="100%" stop-color="#000"/>
    </radialGradient>
    <linearGradient id="rift-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
        <stop offset="0%" stop-color="#000"/><stop offset="30%" stop-color="#9400D3"/>
        <stop offset="50%" stop-color="#00FFFF"/><stop offset="70%" stop-color="#9400D3"/>
        <stop offset="100%" stop-color="#000"/>
    </linearGradient>
    <linearGradient id="heaven-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="#FFF"/><stop offset="50%" stop-color="#FFD700" stop-opacity="0.3"/>
        <stop offset="100%" stop-color="#F0F8FF"/>
    </linearGradient>
    <clipPath id="head-clip"><ellipse cx="200" cy="200" rx="110" ry="115"/></clipPath>
</defs>"##
}

/// Rarity and generation badges in the top corners
fn badge(dna: &MonkeyDna, width: u32, _height: u32) -> String {
    let (color, label) = dna.badge();
    format!(
        r##"<g transform="translate({x}, 15)">
            <rect width="65" height="22" rx="4" fill="{color}" opacity="0.9"/>
            <text x="32" y="15" font-size="8" fill="#FFF" text-anchor="middle" font-family="sans-serif" font-weight="bold">{label}</text>
        </g>
        <g transform="translate(10, 15)">
            <rect width="45" height="22" rx="4" fill="#333" opacity="0.8"/>
            <text x="22" y="15" font-size="9" fill="#FFF" text-anchor="middle" font-family="sans-serif">Gen {gen}</text>
        </g>"##,
        x = width as i64 - 75,
        color = color,
        label = label,
        gen = dna.generation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::{Gene, Rarity, TraitCategory};
    use std::collections::BTreeMap;

    fn dna_with(values: &[(TraitCategory, &str, Rarity)]) -> MonkeyDna {
        let mut traits = BTreeMap::new();
        for (category, value, rarity) in values {
            traits.insert(*category, Gene::new(*value, *rarity));
        }
        MonkeyDna::new(0, traits)
    }

    fn plain_dna() -> MonkeyDna {
        dna_with(&[
            (TraitCategory::BodyColor, "brown", Rarity::Common),
            (TraitCategory::FaceExpression, "happy", Rarity::Common),
            (TraitCategory::Accessory, "none", Rarity::Common),
            (TraitCategory::Pattern, "solid", Rarity::Common),
            (TraitCategory::Background, "white", Rarity::Common),
            (TraitCategory::Special, "none", Rarity::Common),
        ])
    }

    #[test]
    fn test_svg_structure() {
        let svg = generate_svg(&plain_dna(), 400, 400);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r##"viewBox="0 0 400 400""##));
        assert!(svg.contains("<defs>"));
        assert!(svg.contains("Gen 0"));
        assert!(svg.contains("COMMON"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let dna = plain_dna();
        assert_eq!(generate_svg(&dna, 400, 400), generate_svg(&dna, 400, 400));
    }

    #[test]
    fn test_legendary_badge_label() {
        let dna = dna_with(&[
            (TraitCategory::BodyColor, "rainbow", Rarity::Legendary),
            (TraitCategory::FaceExpression, "divine", Rarity::Legendary),
            (TraitCategory::Accessory, "wings", Rarity::Legendary),
            (TraitCategory::Pattern, "void", Rarity::Legendary),
            (TraitCategory::Background, "heaven", Rarity::Legendary),
            (TraitCategory::Special, "godlike", Rarity::Legendary),
        ]);
        let svg = generate_svg(&dna, 400, 400);
        assert!(svg.contains("LEGENDARY"));
        // rainbow body renders via gradient reference
        assert!(svg.contains("url(#rainbow-body)"));
    }

    #[test]
    fn test_accessory_and_scene_elements_present() {
        let dna = dna_with(&[
            (TraitCategory::BodyColor, "blue", Rarity::Rare),
            (TraitCategory::FaceExpression, "winking", Rarity::Common),
            (TraitCategory::Accessory, "crown", Rarity::Uncommon),
            (TraitCategory::Pattern, "spots", Rarity::Common),
            (TraitCategory::Background, "space", Rarity::Rare),
            (TraitCategory::Special, "sparkles", Rarity::Uncommon),
        ]);
        let svg = generate_svg(&dna, 400, 400);
        // crown polygon, starfield circles, sparkle glyphs
        assert!(svg.contains("#FFD700"));
        assert!(svg.contains("✦"));
        assert!(svg.contains(r##"fill="#0D1B2A""##));
    }

    #[test]
    fn test_thumbnail_is_square() {
        let svg = generate_thumbnail(&plain_dna(), 100);
        assert!(svg.contains(r##"viewBox="0 0 100 100""##));
    }
}
