use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `jobs` table exists.
fn jobs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='jobs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `jobs` table has the given column.
fn jobs_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('jobs')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `jobs` table with the current schema.
fn create_jobs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT,
            company     TEXT,
            location    TEXT,
            url         TEXT UNIQUE,
            date_posted TEXT,
            description TEXT,
            status      TEXT NOT NULL DEFAULT 'not-applied',
            source      TEXT,
            address     TEXT
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_jobs_status ON jobs(status);
        CREATE INDEX IF NOT EXISTS idx_jobs_source ON jobs(source);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Databases created by the first releases have no `address` cache column.
fn migrate_add_address_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250610_0002_add_address_cache";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !jobs_has_column(conn, "address")? {
        conn.execute("ALTER TABLE jobs ADD COLUMN address TEXT;", [])
            .map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!("Failed to add 'address' column: {}", e)),
                )
            })?;

        success(format!(
            "Migration applied: {} → added 'address' to jobs table",
            version
        ));
    }

    mark_applied(conn, version, "Added address cache to jobs")?;
    Ok(())
}

/// Rewrite the French status labels of the first releases to the enum values.
fn migrate_legacy_status_labels(conn: &Connection) -> Result<(), Error> {
    let version = "20250610_0003_normalize_status_labels";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mapping = [
        ("non candidaté", "not-applied"),
        ("candidature envoyée", "applied"),
        ("refusé", "rejected"),
        ("accepté", "accepted"),
    ];

    let mut changed = 0;
    for (old, new) in mapping {
        changed += conn.execute("UPDATE jobs SET status = ?1 WHERE status = ?2", [new, old])?;
    }

    // rows inserted without a status at all
    changed += conn.execute(
        "UPDATE jobs SET status = 'not-applied' WHERE status IS NULL OR status = ''",
        [],
    )?;

    if changed > 0 {
        warning(format!("Normalized status label of {} job(s).", changed));
    }

    mark_applied(conn, version, "Normalized legacy status labels")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create jobs table if missing, otherwise upgrade it
    if !jobs_table_exists(conn)? {
        create_jobs_table(conn)?;
        mark_applied(conn, "20250601_0001_create_jobs", "Created jobs table")?;
        success("Created jobs table.");
    }

    migrate_add_address_column(conn)?;
    migrate_legacy_status_labels(conn)?;

    // 3) Indexes are idempotent
    ensure_indexes(conn)?;

    Ok(())
}
