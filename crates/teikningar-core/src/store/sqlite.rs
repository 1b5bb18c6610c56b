use std::path::Path;
#[cfg(unix)]
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Result, TeikningarError};

use super::backend::PersistenceBackend;

const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    CREATE TABLE IF NOT EXISTS preference_kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
";

/// Preference slots in a local SQLite file.
#[derive(Clone)]
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend").finish_non_exhaustive()
    }
}

impl SqliteBackend {
    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| TeikningarError::mutex_poisoned("sqlite"))?;
        f(&conn)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let backend = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        backend.migrate()?;
        #[cfg(unix)]
        harden_sqlite_permissions(path)?;
        Ok(backend)
    }

    pub fn migrate(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
            Ok(())
        })
    }

    /// RFC 3339 timestamp of the last write to `key`.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT updated_at FROM preference_kv WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()?;
            Ok(value)
        })
    }
}

impl PersistenceBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM preference_kv WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO preference_kv(key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
                ",
                params![key, value, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
    }
}

#[cfg(unix)]
fn harden_sqlite_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    for suffix in ["", "-wal", "-shm"] {
        let mut os = path.as_os_str().to_os_string();
        os.push(suffix);
        let candidate = PathBuf::from(os);
        if candidate.exists() {
            std::fs::set_permissions(candidate, std::fs::Permissions::from_mode(0o600))?;
        }
    }
    Ok(())
}
