use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::data::{UserProfile, PROFILE_ID};
use crate::error::StoreError;

/// The ProfileStore manages the SQLite profile database.
/// It holds a single `user_profile` row, keyed by `PROFILE_ID`.
pub struct ProfileStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl ProfileStore {
    /// Open (or create) the profile database at `db_path` and initialize the schema.
    ///
    /// Missing parent directories are created.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&db_path)?;
        info!("Profile database opened at {}", db_path.display());

        let store = ProfileStore {
            conn,
            db_path: Some(db_path),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// A store that lives only as long as this value. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = ProfileStore {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the profile table if it doesn't exist.
    /// The CHECK keeps the table to the one fixed row.
    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS user_profile (
                id          INTEGER PRIMARY KEY CHECK (id = 0),
                name        TEXT NOT NULL,
                image_path  TEXT
            )",
            [],
        )?;

        debug!("Profile schema initialized");
        Ok(())
    }

    /// Get the path to the database file (None for in-memory stores)
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// The stored profile, or None if nothing has been saved yet
    pub fn get(&self) -> Result<Option<UserProfile>, StoreError> {
        let profile = self
            .conn
            .query_row(
                "SELECT id, name, image_path FROM user_profile WHERE id = ?1",
                params![PROFILE_ID],
                |row| {
                    Ok(UserProfile {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        image_path: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(profile)
    }

    /// The stored profile, or `default` if nothing has been saved yet
    pub fn get_or(&self, default: UserProfile) -> Result<UserProfile, StoreError> {
        Ok(self.get()?.unwrap_or(default))
    }

    /// Insert the profile, or replace every field of the existing one.
    ///
    /// The row id is always `PROFILE_ID`, whatever `profile.id` says.
    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO user_profile (id, name, image_path) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                image_path = excluded.image_path",
            params![PROFILE_ID, profile.name, profile.image_path],
        )?;

        info!(
            "Saved profile {:?} (picture: {})",
            profile.name,
            profile.image_path.as_deref().unwrap_or("none")
        );
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}
