//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 2;

/// Complete schema for the local SQLite database.
pub const SCHEMA: &str = r#"
-- Key/value flags
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT
);

-- Word libraries
CREATE TABLE IF NOT EXISTS libraries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    active INTEGER NOT NULL DEFAULT 1
);

-- Words, owned by a library
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    english TEXT NOT NULL,
    chinese TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 0,
    library_id INTEGER NOT NULL DEFAULT 1
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);
"#;

/// Indexes, created after migrations so `library_id` is guaranteed to exist.
pub const INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_words_library_english ON words(library_id, english);
CREATE INDEX IF NOT EXISTS idx_words_status ON words(status);
"#;

/// Initialize settings if not exists.
pub const INIT_SETTINGS: &str = r#"
INSERT OR IGNORE INTO settings (key, value) VALUES ('tutorial_seen', '0');
"#;

/// Ensure the default library row exists.
pub const INIT_DEFAULT_LIBRARY: &str = r#"
INSERT OR IGNORE INTO libraries (id, name, active) VALUES (1, 'default', 1);
"#;

/// Adds library ownership to a words table created before libraries existed.
pub const ADD_WORD_LIBRARY_COLUMN: &str = r#"
ALTER TABLE words ADD COLUMN library_id INTEGER NOT NULL DEFAULT 1;
"#;

/// Adds the visibility flag to a libraries table created without it.
pub const ADD_LIBRARY_ACTIVE_COLUMN: &str = r#"
ALTER TABLE libraries ADD COLUMN active INTEGER NOT NULL DEFAULT 1;
"#;
