use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{JobPosting, JobStatus, NewJob};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const JOB_COLUMNS: &str =
    "id, title, company, location, url, date_posted, description, status, source, address";

/// Insert the given jobs, skipping those whose URL is already stored.
///
/// Runs in a single transaction and returns how many rows were actually added.
pub fn insert_jobs(conn: &mut Connection, jobs: &[NewJob]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let mut new_count = 0;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO jobs (title, company, location, url, date_posted, description, status, source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(url) DO NOTHING",
        )?;

        for job in jobs {
            new_count += stmt.execute(params![
                job.title,
                job.company,
                job.location,
                job.url,
                job.date_posted,
                job.description,
                JobStatus::NotApplied.to_db_str(),
                job.source,
            ])?;
        }
    }

    tx.commit()?;
    Ok(new_count)
}

/// Load every stored job, oldest first.
pub fn load_jobs(pool: &mut DbPool) -> AppResult<Vec<JobPosting>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_job(pool: &mut DbPool, id: i64) -> AppResult<Option<JobPosting>> {
    let job = pool
        .conn
        .query_row(
            &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(job)
}

/// Same as [`load_job`] but a missing row is an error.
pub fn require_job(pool: &mut DbPool, id: i64) -> AppResult<JobPosting> {
    load_job(pool, id)?.ok_or(AppError::JobNotFound(id))
}

pub fn update_status(pool: &mut DbPool, id: i64, status: JobStatus) -> AppResult<()> {
    let changed = pool.conn.execute(
        "UPDATE jobs SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;

    if changed == 0 {
        return Err(AppError::JobNotFound(id));
    }
    Ok(())
}

pub fn update_address(pool: &mut DbPool, id: i64, address: &str) -> AppResult<()> {
    let changed = pool.conn.execute(
        "UPDATE jobs SET address = ?1 WHERE id = ?2",
        params![address, id],
    )?;

    if changed == 0 {
        return Err(AppError::JobNotFound(id));
    }
    Ok(())
}

/// Count rows grouped by a text column (status or source).
pub fn count_by(pool: &mut DbPool, column: &str) -> AppResult<Vec<(String, i64)>> {
    let sql = match column {
        "status" | "source" => format!(
            "SELECT IFNULL({column}, ''), COUNT(*) FROM jobs GROUP BY 1 ORDER BY 2 DESC, 1 ASC"
        ),
        other => return Err(AppError::Other(format!("cannot group jobs by '{other}'"))),
    };

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn text(row: &Row, col: &str) -> Result<String> {
    Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
}

pub fn map_row(row: &Row) -> Result<JobPosting> {
    let status_str = text(row, "status")?;
    let status = if status_str.is_empty() {
        JobStatus::NotApplied
    } else {
        JobStatus::from_db_str(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidStatus(status_str.clone())),
            )
        })?
    };

    Ok(JobPosting {
        id: row.get("id")?,
        title: text(row, "title")?,
        company: text(row, "company")?,
        location: text(row, "location")?,
        url: text(row, "url")?,
        date_posted: text(row, "date_posted")?,
        description: text(row, "description")?,
        status,
        source: text(row, "source")?,
        address: row
            .get::<_, Option<String>>("address")?
            .filter(|a| !a.is_empty()),
    })
}
