use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{PokekaError, Result};
use crate::pokemon::POKEMON;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entity {
    pub name_ja: String,
    pub name_en: String,
}

impl Entity {
    pub fn new(name_ja: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            name_ja: name_ja.into(),
            name_en: name_en.into(),
        }
    }
}

/// Immutable, ordered set of entities available for lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// The table shipped with the program.
    pub fn builtin() -> Self {
        Self {
            entities: POKEMON
                .iter()
                .map(|&(ja, en)| Entity::new(ja, en))
                .collect(),
        }
    }

    /// Build a catalog from caller-supplied entries.
    ///
    /// Empty names are rejected. Duplicate names are kept and only logged:
    /// lookups resolve to the first entry in catalog order.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self> {
        let mut seen_ja = HashSet::new();
        let mut seen_en = HashSet::new();

        for (idx, entity) in entities.iter().enumerate() {
            if entity.name_ja.is_empty() || entity.name_en.is_empty() {
                return Err(PokekaError::InvalidInput(format!(
                    "catalog entry {idx} has an empty name"
                )));
            }
            if !seen_ja.insert(entity.name_ja.as_str()) {
                warn!(index = idx, name = %entity.name_ja, "Duplicate Japanese name in catalog");
            }
            if !seen_en.insert(entity.name_en.as_str()) {
                warn!(index = idx, name = %entity.name_en, "Duplicate English name in catalog");
            }
        }

        Ok(Self { entities })
    }

    /// Parse a JSON array of `{"name_ja": .., "name_en": ..}` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let entities: Vec<Entity> = serde_json::from_reader(reader)?;
        Self::from_entities(entities)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let catalog = Self::from_json_reader(BufReader::new(file))?;
        info!(path = %path.display(), entries = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_names_are_present_and_unique() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());

        let mut ja = HashSet::new();
        let mut en = HashSet::new();
        for entity in &catalog {
            assert!(!entity.name_ja.is_empty());
            assert!(!entity.name_en.is_empty());
            assert!(ja.insert(&entity.name_ja), "duplicate {}", entity.name_ja);
            assert!(en.insert(&entity.name_en), "duplicate {}", entity.name_en);
        }
    }

    #[test]
    fn builtin_keeps_table_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), POKEMON.len());
        assert_eq!(catalog.entities()[0], Entity::new("フシギダネ", "Bulbasaur"));
        assert_eq!(catalog.entities()[150], Entity::new("ミュウ", "Mew"));
    }

    #[test]
    fn parses_json_catalog() {
        let json = r#"[
            {"name_ja": "ピカチュウ", "name_en": "Pikachu"},
            {"name_ja": "イーブイ", "name_en": "Eevee"}
        ]"#;
        let catalog = Catalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entities()[1].name_en, "Eevee");
    }

    #[test]
    fn rejects_empty_name() {
        let json = r#"[{"name_ja": "", "name_en": "Missingno"}]"#;
        let err = Catalog::from_json_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, PokekaError::InvalidInput(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_reader("[{\"name_ja\": 1}]".as_bytes()).unwrap_err();
        assert!(matches!(err, PokekaError::Serialization(_)));
    }

    #[test]
    fn keeps_duplicates() {
        let catalog = Catalog::from_entities(vec![
            Entity::new("ピカチュウ", "Pikachu"),
            Entity::new("ピカチュウ", "Pikachu (alt)"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_entities(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name_ja": "ミュウ", "name_en": "Mew"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.entities(), &[Entity::new("ミュウ", "Mew")]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PokekaError::Io(_)));
    }
}
