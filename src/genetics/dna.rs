//! DNA types and persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use uuid::Uuid;

/// Fallback visual seed when a DNA hash is missing or malformed.
pub const DEFAULT_SEED: u32 = 12345;

/// Result type for DNA load/validation operations
pub type GeneticsResult<T> = Result<T, GeneticsError>;

/// Errors that can occur when loading or validating monkey DNA
#[derive(Debug, thiserror::Error)]
pub enum GeneticsError {
    #[error("Failed to read monkey file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse monkey JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("DNA hash mismatch: stored {stored}, computed {computed}")]
    HashMismatch { stored: String, computed: String },

    #[error("Monkey file not found: {0}")]
    NotFound(String),
}

/// The six trait categories every monkey carries
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    BodyColor,
    FaceExpression,
    Accessory,
    Pattern,
    Background,
    Special,
}

impl TraitCategory {
    /// All categories in canonical (hashing) order
    pub const ALL: [TraitCategory; 6] = [
        TraitCategory::BodyColor,
        TraitCategory::FaceExpression,
        TraitCategory::Accessory,
        TraitCategory::Pattern,
        TraitCategory::Background,
        TraitCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitCategory::BodyColor => "body_color",
            TraitCategory::FaceExpression => "face_expression",
            TraitCategory::Accessory => "accessory",
            TraitCategory::Pattern => "pattern",
            TraitCategory::Background => "background",
            TraitCategory::Special => "special",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rarity tier of a single gene
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Score weight used for the 0-100 rarity score
    pub fn weight(&self) -> f64 {
        match self {
            Rarity::Common => 10.0,
            Rarity::Uncommon => 40.0,
            Rarity::Rare => 65.0,
            Rarity::Legendary => 90.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One expressed trait: its value and the rarity tier it was drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub value: String,
    pub rarity: Rarity,
}

impl Gene {
    pub fn new(value: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            value: value.into(),
            rarity,
        }
    }
}

/// Complete DNA for one monkey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonkeyDna {
    /// Unique monkey id
    pub id: Uuid,

    /// Generation counter (0 for a founding monkey)
    pub generation: u32,

    /// Expressed gene per category, ordered for stable hashing
    pub traits: BTreeMap<TraitCategory, Gene>,

    /// sha256 over generation and ordered gene values, hex encoded
    pub dna_hash: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MonkeyDna {
    /// Assemble DNA from genes, computing the hash
    pub fn new(generation: u32, traits: BTreeMap<TraitCategory, Gene>) -> Self {
        let dna_hash = Self::compute_hash(generation, &traits);
        Self {
            id: Uuid::new_v4(),
            generation,
            traits,
            dna_hash,
            created_at: Utc::now(),
        }
    }

    /// Hash of generation plus gene values in canonical category order
    pub fn compute_hash(generation: u32, traits: &BTreeMap<TraitCategory, Gene>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("gen:{}", generation));
        for category in TraitCategory::ALL {
            if let Some(gene) = traits.get(&category) {
                hasher.update(format!(";{}={}", category.as_str(), gene.value));
            }
        }
        let digest = hasher.finalize();
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Gene value for a category, empty when absent
    pub fn trait_value(&self, category: TraitCategory) -> &str {
        self.traits
            .get(&category)
            .map(|g| g.value.as_str())
            .unwrap_or("")
    }

    /// Mean of the gene rarity weights, in [0, 100]
    pub fn rarity_score(&self) -> f64 {
        if self.traits.is_empty() {
            return 0.0;
        }
        let total: f64 = self.traits.values().map(|g| g.rarity.weight()).sum();
        total / self.traits.len() as f64
    }

    /// Badge tier for the rarity score: (fill color, label)
    pub fn badge(&self) -> (&'static str, &'static str) {
        let score = self.rarity_score();
        if score >= 80.0 {
            ("#FFD700", "LEGENDARY")
        } else if score >= 60.0 {
            ("#9370DB", "RARE")
        } else if score >= 40.0 {
            ("#4ECDC4", "UNCOMMON")
        } else {
            ("#A0A0A0", "COMMON")
        }
    }

    /// Visual seed: first 8 hex digits of the hash
    pub fn seed(&self) -> u32 {
        self.dna_hash
            .get(..8)
            .and_then(|s| u32::from_str_radix(s, 16).ok())
            .unwrap_or(DEFAULT_SEED)
    }

    /// Load DNA from a JSON file, verifying the stored hash
    pub fn load(path: &Path) -> GeneticsResult<Self> {
        if !path.exists() {
            return Err(GeneticsError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let dna: MonkeyDna = serde_json::from_str(&content)?;

        let computed = Self::compute_hash(dna.generation, &dna.traits);
        if computed != dna.dna_hash {
            return Err(GeneticsError::HashMismatch {
                stored: dna.dna_hash,
                computed,
            });
        }

        Ok(dna)
    }

    /// Save DNA as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> GeneticsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
