//! Item catalog loader.

use std::path::Path;

use rogue_core::{ItemCatalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }

    /// Load a ready-to-use catalog from a RON file.
    ///
    /// Duplicate entries for one type collapse to the last definition, the
    /// same keying the catalog applies.
    pub fn load_catalog(path: &Path) -> LoadResult<ItemCatalog> {
        Ok(ItemCatalog::from_definitions(Self::load(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::{ItemOracle, ItemType};
    use std::io::Write;

    const CATALOG_RON: &str = r#"(
    items: [
        (item_type: Coin, sprite: (1), stackable: true, persistent: false, value: 10),
        (item_type: HealthPotion, sprite: (2), stackable: true, persistent: true, value: 25),
        (item_type: PoisonPotion, sprite: (3), stackable: false, persistent: false, value: 15),
    ],
)"#;

    #[test]
    fn loads_catalog_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_RON.as_bytes()).unwrap();

        let catalog = ItemLoader::load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.value(ItemType::Coin), 10);
        assert!(catalog.persistent(ItemType::HealthPotion));
        assert!(!catalog.stackable(ItemType::PoisonPotion));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = ItemLoader::load(Path::new("/nonexistent/items.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/items.ron"));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"(items: [").unwrap();

        let error = ItemLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("parse"));
    }

    #[test]
    fn shipped_default_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/items.ron");
        let catalog = ItemLoader::load_catalog(&path).unwrap();

        assert!(catalog.definition(ItemType::Coin).is_some());
        assert!(catalog.definition(ItemType::HealthPotion).is_some());
        assert!(catalog.definition(ItemType::PoisonPotion).is_some());
        assert!(catalog.definition(ItemType::Chest).is_some());
        assert!(catalog.definition(ItemType::BreakableObject).is_some());
    }
}
