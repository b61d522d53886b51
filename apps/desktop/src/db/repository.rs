//! Repository pattern for database access.

use crate::db::error::DbError;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};
use vocab_core::types::{
    Library, LibrarySummary, QueryOrder, Status, Word, WordStats, TUTORIAL_SEEN,
};

type Result<T> = std::result::Result<T, DbError>;

/// Repository for library operations.
pub trait LibraryRepository {
    fn add_library(&self, name: &str) -> Result<i64>;
    fn get_library(&self, id: i64) -> Result<Option<Library>>;
    fn list_libraries(&self) -> Result<Vec<LibrarySummary>>;
    fn set_library_active(&self, id: i64, active: bool) -> Result<()>;
    fn delete_library(&self, id: i64) -> Result<usize>;
}

/// Repository for word operations.
///
/// Read paths other than [`WordRepository::get_word`] only see words whose
/// library is active.
pub trait WordRepository {
    fn add_word(&self, english: &str, chinese: &str, library_id: i64) -> Result<bool>;
    fn get_word(&self, id: i64) -> Result<Option<Word>>;
    fn query_words(
        &self,
        statuses: &[Status],
        order: QueryOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Word>>;
    fn words_by_status(&self, status: Status) -> Result<Vec<Word>>;
    fn update_status(&self, id: i64, status: Status) -> Result<()>;
    fn reset_all(&self) -> Result<usize>;
    fn word_stats(&self) -> Result<WordStats>;
    fn total_count(&self) -> Result<usize>;
}

/// Repository for key/value settings.
pub trait SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>>;
    fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating and migrating it if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!(path = %path.as_ref().display(), "opening vocabulary store");
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Run schema creation and migrations. Any failure is a schema error.
    fn initialize(&self) -> Result<()> {
        self.migrate().map_err(|e| match e {
            DbError::Schema(_) => e,
            other => DbError::Schema(other.to_string()),
        })
    }

    fn migrate(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let fresh = !table_exists(&tx, "libraries")?;

        tx.execute_batch(super::schema::SCHEMA)?;

        let library_columns = table_columns(&tx, "libraries")?;
        if !library_columns.iter().any(|c| c == "active") {
            info!("adding visibility flag to existing libraries");
            tx.execute_batch(super::schema::ADD_LIBRARY_ACTIVE_COLUMN)?;
            if library_columns.iter().any(|c| c == "is_active") {
                tx.execute("UPDATE libraries SET active = is_active", [])?;
            }
        }

        let word_columns = table_columns(&tx, "words")?;
        if !word_columns.iter().any(|c| c == "library_id") {
            info!("adding library ownership to existing words");
            tx.execute_batch(super::schema::ADD_WORD_LIBRARY_COLUMN)?;
            tx.execute_batch(super::schema::INIT_DEFAULT_LIBRARY)?;
        }

        if fresh {
            debug!("seeding default library");
            tx.execute_batch(super::schema::INIT_DEFAULT_LIBRARY)?;
        }

        tx.execute_batch(super::schema::INIT_SETTINGS)?;
        tx.execute_batch(super::schema::INDEXES)?;
        tx.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![super::schema::SCHEMA_VERSION],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Highest schema version recorded in the database.
    pub fn schema_version(&self) -> Result<Option<i32>> {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Run `f` inside one transaction.
    ///
    /// Writes made through the batch are committed when `f` returns `Ok` and
    /// rolled back entirely when it returns `Err`.
    pub fn atomic<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&WriteBatch<'_>) -> std::result::Result<T, E>,
        E: From<DbError>,
    {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| E::from(DbError::from(e)))?;
        let value = f(&WriteBatch { conn: &tx })?;
        tx.commit().map_err(|e| E::from(DbError::from(e)))?;
        Ok(value)
    }

    fn row_to_word(row: &rusqlite::Row) -> rusqlite::Result<Word> {
        let code: i64 = row.get(3)?;
        let status = Status::from_code(code)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?;
        Ok(Word {
            id: row.get(0)?,
            english: row.get(1)?,
            chinese: row.get(2)?,
            status,
            library_id: row.get(4)?,
        })
    }
}

/// Writes available inside [`SqliteRepository::atomic`].
pub struct WriteBatch<'a> {
    conn: &'a Connection,
}

impl WriteBatch<'_> {
    pub fn add_library(&self, name: &str) -> Result<i64> {
        insert_library(self.conn, name)
    }

    pub fn add_word(&self, english: &str, chinese: &str, library_id: i64) -> Result<bool> {
        insert_word(self.conn, english, chinese, library_id)
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}

fn library_exists(conn: &Connection, id: i64) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM libraries WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn insert_library(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO libraries (name, active) VALUES (?1, 1)",
        params![name],
    )?;
    let id = conn.last_insert_rowid();
    info!(id, name, "library created");
    Ok(id)
}

fn insert_word(conn: &Connection, english: &str, chinese: &str, library_id: i64) -> Result<bool> {
    if !library_exists(conn, library_id)? {
        return Err(DbError::LibraryNotFound(library_id));
    }

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM words WHERE english = ?1 AND library_id = ?2",
            params![english, library_id],
            |row| row.get(0),
        )
        .optional()?;

    if existing.is_some() {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO words (english, chinese, status, library_id) VALUES (?1, ?2, ?3, ?4)",
        params![english, chinese, Status::New.code(), library_id],
    )?;
    Ok(true)
}

impl LibraryRepository for SqliteRepository {
    fn add_library(&self, name: &str) -> Result<i64> {
        insert_library(&self.conn, name)
    }

    fn get_library(&self, id: i64) -> Result<Option<Library>> {
        self.conn
            .query_row(
                "SELECT id, name, active FROM libraries WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Library {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        active: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    fn list_libraries(&self) -> Result<Vec<LibrarySummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.name, l.active, COUNT(w.id)
            FROM libraries l
            LEFT JOIN words w ON l.id = w.library_id
            GROUP BY l.id
            ORDER BY l.id",
        )?;

        let libraries = stmt
            .query_map([], |row| {
                Ok(LibrarySummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    active: row.get(2)?,
                    word_count: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(libraries)
    }

    fn set_library_active(&self, id: i64, active: bool) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE libraries SET active = ?1 WHERE id = ?2",
            params![active, id],
        )?;
        if changed == 0 {
            return Err(DbError::LibraryNotFound(id));
        }
        debug!(id, active, "library visibility changed");
        Ok(())
    }

    fn delete_library(&self, id: i64) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let words = tx.execute("DELETE FROM words WHERE library_id = ?1", params![id])?;
        let libraries = tx.execute("DELETE FROM libraries WHERE id = ?1", params![id])?;
        if libraries == 0 {
            return Err(DbError::LibraryNotFound(id));
        }
        tx.commit()?;

        info!(id, words, "library deleted");
        Ok(words)
    }
}

impl WordRepository for SqliteRepository {
    fn add_word(&self, english: &str, chinese: &str, library_id: i64) -> Result<bool> {
        insert_word(&self.conn, english, chinese, library_id)
    }

    fn get_word(&self, id: i64) -> Result<Option<Word>> {
        self.conn
            .query_row(
                "SELECT id, english, chinese, status, library_id FROM words WHERE id = ?1",
                params![id],
                Self::row_to_word,
            )
            .optional()
            .map_err(Into::into)
    }

    fn query_words(
        &self,
        statuses: &[Status],
        order: QueryOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Word>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: String = statuses.iter().map(|_| "?").collect::<Vec<_>>().join(",");
        let order_by = match order {
            QueryOrder::Random => "RANDOM()",
            QueryOrder::Sequential => "w.id",
        };
        let mut sql = format!(
            "SELECT w.id, w.english, w.chinese, w.status, w.library_id
            FROM words w
            JOIN libraries l ON w.library_id = l.id
            WHERE w.status IN ({}) AND l.active = 1
            ORDER BY {}",
            placeholders, order_by
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let codes: Vec<i64> = statuses.iter().map(|s| s.code()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let words = stmt
            .query_map(params_from_iter(codes.iter()), Self::row_to_word)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(words)
    }

    fn words_by_status(&self, status: Status) -> Result<Vec<Word>> {
        let mut stmt = self.conn.prepare(
            "SELECT w.id, w.english, w.chinese, w.status, w.library_id
            FROM words w
            JOIN libraries l ON w.library_id = l.id
            WHERE w.status = ?1 AND l.active = 1
            ORDER BY w.id DESC",
        )?;

        let words = stmt
            .query_map(params![status.code()], Self::row_to_word)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(words)
    }

    fn update_status(&self, id: i64, status: Status) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE words SET status = ?1 WHERE id = ?2",
            params![status.code(), id],
        )?;
        if changed == 0 {
            return Err(DbError::WordNotFound(id));
        }
        Ok(())
    }

    fn reset_all(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let words = tx.execute("UPDATE words SET status = ?1", params![Status::New.code()])?;
        tx.execute(
            "REPLACE INTO settings (key, value) VALUES (?1, '0')",
            params![TUTORIAL_SEEN],
        )?;
        tx.commit()?;

        info!(words, "learning progress reset");
        Ok(words)
    }

    fn word_stats(&self) -> Result<WordStats> {
        let mut stmt = self.conn.prepare(
            "SELECT w.status, COUNT(*)
            FROM words w
            JOIN libraries l ON w.library_id = l.id
            WHERE l.active = 1
            GROUP BY w.status",
        )?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, usize>(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut stats = WordStats::default();
        for (code, count) in rows {
            let status =
                Status::from_code(code).map_err(|e| DbError::InvalidData(e.to_string()))?;
            stats.record(status, count);
        }
        Ok(stats)
    }

    fn total_count(&self) -> Result<usize> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM words w JOIN libraries l ON w.library_id = l.id WHERE l.active = 1",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }
}

impl SettingsRepository for SqliteRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()
            .map(Option::flatten)
            .map_err(Into::into)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
