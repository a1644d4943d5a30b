use crate::Result;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// Named-key string storage over a SQLite file.
///
/// A single `kv` table holds string values addressed by name; the note list
/// lives under one key as a JSON blob. SQLite is only the container here,
/// there is no per-note row schema.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Creates a new backing file at `path` and initialises the schema.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Opens an existing backing file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StudynotesError::InvalidStore`] if the file is not a
    /// Studynotes store, or [`crate::StudynotesError::Database`] if it is not
    /// a SQLite database at all.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Validate database structure
        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table' AND name='kv'",
            [],
            |row| row.get(0),
        )?;

        if table_count != 1 {
            return Err(crate::StudynotesError::InvalidStore(
                "Not a valid Studynotes database".to_string(),
            ));
        }

        Ok(Self { conn })
    }

    /// Returns the value stored under `key`, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_create_storage() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::create(temp.path()).unwrap();

        // Fresh store holds nothing under any key
        assert_eq!(storage.get("studynotes").unwrap(), None);
    }

    #[test]
    fn test_open_existing_storage() {
        let temp = NamedTempFile::new().unwrap();

        {
            let storage = Storage::create(temp.path()).unwrap();
            storage.put("studynotes", "[]").unwrap();
        }

        let storage = Storage::open(temp.path()).unwrap();
        assert_eq!(storage.get("studynotes").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_open_invalid_database() {
        let temp = NamedTempFile::new().unwrap();

        // Create a file that is not a SQLite database
        std::fs::write(temp.path(), "not a database").unwrap();

        let result = Storage::open(temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_open_database_without_kv_table() {
        let temp = NamedTempFile::new().unwrap();

        {
            let conn = Connection::open(temp.path()).unwrap();
            conn.execute("CREATE TABLE other (id INTEGER PRIMARY KEY)", [])
                .unwrap();
        }

        let result = Storage::open(temp.path());
        assert!(
            matches!(result, Err(crate::StudynotesError::InvalidStore(_))),
            "A SQLite file without the kv table is not a store"
        );
    }

    #[test]
    fn test_put_overwrites_previous_value() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::create(temp.path()).unwrap();

        storage.put("studynotes", "first").unwrap();
        storage.put("studynotes", "second").unwrap();

        assert_eq!(
            storage.get("studynotes").unwrap(),
            Some("second".to_string())
        );
    }
}
