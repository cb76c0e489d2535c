//! JSON file snapshot of the inventory.

use std::fs;
use std::path::{Path, PathBuf};

use bakestock_inventory::Inventory;

use crate::snapshot::{SnapshotError, SnapshotStore};

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "bakery_inventory.json";

/// Pretty-printed UTF-8 JSON snapshot at a fixed path.
///
/// The file is a single object mapping normalized ingredient names to their
/// records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Inventory {
        if !self.path.exists() {
            return Inventory::new();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "could not read inventory file, starting empty"
                );
                return Inventory::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(inventory) => inventory,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "inventory file corrupted, starting empty"
                );
                Inventory::new()
            }
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), SnapshotError> {
        let text = serde_json::to_string_pretty(inventory)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add("flour", "5 kg", "dry", today()).unwrap();
        inventory.add("milk", "3 liters", "dairy", today()).unwrap();
        inventory.set_expiration("milk", "2025-01-15").unwrap();
        inventory
    }

    #[test]
    fn save_then_load_round_trips_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let inventory = stocked();
        store.save(&inventory).unwrap();

        assert_eq!(store.load(), inventory);
    }

    #[test]
    fn load_returns_empty_store_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_recovers_from_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_recovers_from_structurally_wrong_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_previous_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let mut inventory = stocked();
        store.save(&inventory).unwrap();

        inventory.remove("flour").unwrap();
        store.save(&inventory).unwrap();

        let restored = store.load();
        assert_eq!(restored.len(), 1);
        assert!(restored.get("flour").is_none());
    }

    #[test]
    fn snapshot_is_pretty_printed_and_keyed_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = JsonFileStore::new(&path);
        store.save(&stocked()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"flour\": {"));
        assert!(text.contains("\"last_updated\": \"2025-01-10\""));
        assert!(text.contains("\"expiration_date\": \"2025-01-15\""));
    }

    #[test]
    fn save_reports_io_failures() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("inventory.json"));
        assert!(matches!(
            store.save(&stocked()).unwrap_err(),
            SnapshotError::Io(_)
        ));
    }
}
