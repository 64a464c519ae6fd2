use crate::db::pool::DbPool;
use crate::db::queries::count_by;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL JOBS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
    println!("{}• Total jobs:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) POSTING DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT MIN(date_posted) FROM jobs WHERE IFNULL(date_posted, '') <> ''",
            [],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();
    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(date_posted) FROM jobs WHERE IFNULL(date_posted, '') <> ''",
            [],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();

    match (first_date, last_date) {
        (Some(first), Some(last)) => {
            println!("{}• Posted between:{} {} → {}", CYAN, RESET, first, last)
        }
        _ => println!("{}• Posted between:{} {}n/a{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) BREAKDOWNS
    //
    println!("{}• By status:{}", CYAN, RESET);
    for (status, n) in count_by(pool, "status")? {
        println!("    {:<14} {}", status, n);
    }

    println!("{}• By source:{}", CYAN, RESET);
    for (source, n) in count_by(pool, "source")? {
        let label = if source.is_empty() { "(unknown)" } else { &source };
        println!("    {:<14} {}", label, n);
    }

    println!();
    Ok(())
}
