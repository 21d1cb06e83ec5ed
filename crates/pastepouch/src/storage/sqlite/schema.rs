//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables. Safe to run on every startup.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT UNIQUE NOT NULL
);

-- Pastes table (userid is not a foreign key)
CREATE TABLE IF NOT EXISTS pastes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    userid INTEGER NOT NULL,
    content TEXT NOT NULL
);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email)
VALUES (?1, ?2)
"#;

pub const SELECT_USERS: &str = r#"
SELECT * FROM users
"#;

pub const COUNT_USERS: &str = r#"
SELECT COUNT(*) AS count FROM users
"#;

// Paste queries
pub const INSERT_PASTE: &str = r#"
INSERT INTO pastes (userid, content)
VALUES (?1, ?2)
"#;

pub const SELECT_PASTES: &str = r#"
SELECT * FROM pastes
"#;

pub const SELECT_PASTE_BY_ID: &str = r#"
SELECT * FROM pastes
WHERE id = ?1
"#;

pub const DELETE_PASTE: &str = r#"
DELETE FROM pastes
WHERE id = ?1
"#;

pub const UPDATE_PASTE: &str = r#"
UPDATE pastes
SET content = ?2
WHERE id = ?1
"#;

pub const COUNT_PASTES: &str = r#"
SELECT COUNT(*) AS count FROM pastes
"#;
