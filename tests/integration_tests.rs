use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_jobs, rjf, setup_test_db, write_fixture};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    rjf()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Database   :").count(1))
        .stdout(contains("✅ Database:").not());

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('jobs','log')",
            [],
            |row| row.get(0),
        )
        .expect("count tables");
    assert_eq!(tables, 2);
}

#[test]
fn test_import_skips_duplicates_and_missing_urls() {
    let db_path = setup_test_db("import_dedup");

    rjf()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture("import_dedup", common::FIXTURE_JOBS);

    rjf()
        .args(["--db", &db_path, "import", "--file", &fixture])
        .assert()
        .success()
        .stdout(contains("2 new jobs added!"))
        .stdout(contains("1 posting(s) without URL skipped."));

    // same file again: everything is already stored
    rjf()
        .args(["--db", &db_path, "import", "--file", &fixture])
        .assert()
        .success()
        .stdout(contains("No new jobs found."));

    rjf()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2 jobs in database"));
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("list_empty");

    rjf()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rjf()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("0 jobs in database"))
        .stdout(contains("No jobs in database. Run a scrape!"));
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");
    init_db_with_jobs(&db_path, "list_filters");

    let other = write_fixture(
        "list_filters_google",
        r#"[{"title": "Stage SRE", "company": "Tux Ltd", "location": "Lyon 3e",
             "job_url": "https://example.com/jobs/3", "description": "Stage de 6 mois"}]"#,
    );
    rjf()
        .args(["--db", &db_path, "import", "--file", &other, "--source", "Google"])
        .assert()
        .success()
        .stdout(contains("1 new jobs added!"));

    rjf()
        .args(["--db", &db_path, "list", "--source", "Google"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"))
        .stdout(contains("Stage SRE"));

    // "Lyon" matches both "Lyon, Auvergne…" and "Lyon 3e"
    rjf()
        .args(["--db", &db_path, "list", "--city", "Lyon"])
        .assert()
        .success()
        .stdout(contains("2 jobs in database"));

    rjf()
        .args(["--db", &db_path, "list", "--company", "Crab Corp"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"))
        .stdout(contains("Data Engineer"));

    rjf()
        .args(["--db", &db_path, "list", "--type", "ALTERNANCE"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"))
        .stdout(contains("Ferris SA"));

    rjf()
        .args(["--db", &db_path, "list", "-k", "sql", "--city", "Lyon"])
        .assert()
        .success()
        .stdout(contains("0 jobs in database"));
}

#[test]
fn test_list_facets() {
    let db_path = setup_test_db("list_facets");
    init_db_with_jobs(&db_path, "list_facets");

    rjf()
        .args(["--db", &db_path, "list", "--facets"])
        .assert()
        .success()
        .stdout(contains("Companies").and(contains("Cities")).and(contains("Sources")))
        .stdout(contains("\x1b[0m (2):"))
        .stdout(contains("\x1b[0m (1):"))
        .stdout(contains("  - Crab Corp"))
        .stdout(contains("  - Indeed"));
}

#[test]
fn test_status_update_and_not_applied_filter() {
    let db_path = setup_test_db("status_update");
    init_db_with_jobs(&db_path, "status_update");

    rjf()
        .args(["--db", &db_path, "status", "1", "applied"])
        .assert()
        .success()
        .stdout(contains("Job #1: not-applied → applied"));

    rjf()
        .args(["--db", &db_path, "list", "--not-applied"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"))
        .stdout(contains("Data Engineer"));

    rjf()
        .args(["--db", &db_path, "list", "--status", "Applied"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"))
        .stdout(contains("Ferris SA"));

    // re-importing the same URL must not reset the status
    let fixture = write_fixture("status_update_again", common::FIXTURE_JOBS);
    rjf()
        .args(["--db", &db_path, "import", "--file", &fixture])
        .assert()
        .success();

    rjf()
        .args(["--db", &db_path, "list", "--status", "applied"])
        .assert()
        .success()
        .stdout(contains("1 jobs in database"));
}

#[test]
fn test_status_errors() {
    let db_path = setup_test_db("status_errors");
    init_db_with_jobs(&db_path, "status_errors");

    rjf()
        .args(["--db", &db_path, "status", "99", "applied"])
        .assert()
        .failure()
        .stderr(contains("No job found with id 99"));

    rjf()
        .args(["--db", &db_path, "status", "1", "hired"])
        .assert()
        .failure()
        .stderr(contains("Invalid status: hired"));

    rjf()
        .args(["--db", &db_path, "list", "--status", "maybe"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_show_details() {
    let db_path = setup_test_db("show_details");
    init_db_with_jobs(&db_path, "show_details");

    rjf()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Data Engineer"))
        .stdout(contains("https://example.com/jobs/2"))
        .stdout(contains("2025-06-03"))
        .stdout(contains("Pipelines and SQL"))
        .stdout(contains("Not applied ("));

    rjf()
        .args(["--db", &db_path, "show", "42"])
        .assert()
        .failure()
        .stderr(contains("No job found with id 42"));
}

#[test]
fn test_open_uses_browser_env() {
    let db_path = setup_test_db("open_browser");
    init_db_with_jobs(&db_path, "open_browser");

    rjf()
        .env("BROWSER", "true")
        .args(["--db", &db_path, "open", "1"])
        .assert()
        .success()
        .stdout(contains("Opening https://example.com/jobs/1"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_jobs(&db_path, "internal_log");

    rjf()
        .args(["--db", &db_path, "status", "2", "rejected"])
        .assert()
        .success();

    rjf()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("import"))
        .stdout(contains("not-applied → rejected"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_jobs(&db_path, "db_info");

    rjf()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total jobs"))
        .stdout(contains("not-applied"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_scrape_rejects_invalid_profile() {
    let db_path = setup_test_db("scrape_invalid");
    let home = common::fresh_home("scrape_invalid");

    common::rjf_in(&home)
        .args(["--db", &db_path, "scrape"])
        .assert()
        .failure()
        .stderr(contains("no keywords configured"));

    common::rjf_in(&home)
        .args(["--db", &db_path, "scrape", "-k", "rust", "--distance", "500"])
        .assert()
        .failure()
        .stderr(contains("distance must be between 1 and 100").and(contains("500")));
}

#[test]
fn test_import_rejects_unrecognized_file() {
    let db_path = setup_test_db("import_bad_file");

    rjf()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture("import_bad_file", r#"{"foo": 1}"#);

    rjf()
        .args(["--db", &db_path, "import", "--file", &fixture])
        .assert()
        .failure()
        .stderr(contains("Invalid import file"))
        .stdout(contains("No new jobs found").not());
}
