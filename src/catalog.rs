//! Creature catalog: record types and the RON loader

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.ron");

/// Base directory for relative artwork references of the built-in catalog
pub fn builtin_asset_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// One creature as shown in the dex list and the detail modal
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CreatureRecord {
    pub name: String,
    pub types: Vec<String>,
    pub image_url: String,
    pub experience: u32,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub moves: Vec<MoveEntry>,
    pub abilities: Vec<String>,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
    pub description: String,
    pub evolutions: Vec<ChainLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoveEntry {
    pub name: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
}

/// Node of an evolution chain. Forwarded untouched to the evolution view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChainLink {
    pub species: String,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub min_level: Option<u8>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    pub entries: Vec<CreatureRecord>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("duplicate creature name: {0}")]
    DuplicateName(String),
    #[error("catalog has no entries")]
    Empty,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG)
    }

    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = ron::de::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            // Lookups by name ignore case, so names must differ beyond it
            if !seen.insert(entry.name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(())
    }
}

/// Load a catalog file, or the built-in catalog when no path is given
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let Some(path) = path else {
        return Catalog::builtin();
    };
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Catalog::parse(&source)
}
