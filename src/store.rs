//! Persistence for waste records: the `WasteStore` contract the state
//! machine calls, and its SQLite implementation.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::types::WasteItem;

/// Contract between the editor and whatever persists its records.
///
/// `insert` is atomic: either the record is durably stored and an id comes
/// back, or nothing is persisted. `delete_by_id` on an id that does not
/// exist is a successful no-op.
pub trait WasteStore {
    /// Every stored record, ordered by assigned id. Called once at startup.
    fn load_all(&self) -> Result<Vec<WasteItem>>;

    /// Persist `item` (its `id` field is ignored) and return the assigned id.
    fn insert(&mut self, item: &WasteItem) -> Result<i64>;

    /// Remove the record with `id`, if present.
    fn delete_by_id(&mut self, id: i64) -> Result<()>;
}

/// SQLite-backed store. One table, created on open; no migrations.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS waste_items (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT,
                    quantity REAL,
                    wasteType TEXT,
                    location TEXT,
                    method TEXT
                );
                "#,
            )
            .context("creating waste_items table")?;
        Ok(())
    }
}

impl WasteStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<WasteItem>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, quantity, wasteType, location, method
            FROM waste_items
            ORDER BY id
            "#,
        )?;

        let items = stmt
            .query_map([], |row| {
                Ok(WasteItem {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                    waste_type: row.get(3)?,
                    location: row.get(4)?,
                    method: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    fn insert(&mut self, item: &WasteItem) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO waste_items (name, quantity, wasteType, location, method)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                &item.name,
                &item.quantity,
                &item.waste_type,
                &item.location,
                &item.method
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_by_id(&mut self, id: i64) -> Result<()> {
        // Unconditional DELETE: a missing id simply affects zero rows.
        self.conn
            .execute("DELETE FROM waste_items WHERE id = ?1", params![id])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: f64) -> WasteItem {
        WasteItem {
            id: 0,
            name: name.to_string(),
            quantity,
            waste_type: "Solid".to_string(),
            location: "Bay1".to_string(),
            method: "Landfill".to_string(),
        }
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let first = store.insert(&item("Oil", 3.2)).unwrap();
        let second = store.insert(&item("Scrap", 12.0)).unwrap();
        assert!(second > first);

        let items = store.load_all().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first);
        assert_eq!(items[0].name, "Oil");
        assert_eq!(items[0].quantity, 3.2);
        assert_eq!(items[1].id, second);
        assert_eq!(items[1].name, "Scrap");
    }

    #[test]
    fn load_all_returns_id_order() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for n in 1..=4 {
            store.insert(&item(&format!("item-{n}"), n as f64)).unwrap();
        }

        let items = store.load_all().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["item-1", "item-2", "item-3", "item-4"]);
    }

    #[test]
    fn delete_removes_only_the_given_id() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let first = store.insert(&item("Oil", 3.2)).unwrap();
        let second = store.insert(&item("Scrap", 12.0)).unwrap();

        store.delete_by_id(first).unwrap();

        let items = store.load_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);
    }

    #[test]
    fn delete_of_missing_id_is_a_noop() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.delete_by_id(42).unwrap();

        let kept = store.insert(&item("Oil", 3.2)).unwrap();
        store.delete_by_id(kept + 100).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waste.db");

        let id = {
            let mut store = SqliteStore::open(&path).unwrap();
            store.insert(&item("Oil", 3.2)).unwrap()
        };

        let store = SqliteStore::open(&path).unwrap();
        let items = store.load_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].method, "Landfill");
    }
}
