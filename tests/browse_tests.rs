use rjobfinder::config::GeoConfig;
use rjobfinder::core::browse::BrowseLogic;
use rjobfinder::db::initialize::init_db;
use rjobfinder::db::pool::DbPool;
use rjobfinder::db::queries::{insert_jobs, load_job, require_job, update_address};
use rjobfinder::errors::AppError;
use rjobfinder::geo::NominatimClient;
use rjobfinder::models::NewJob;

mod common;
use common::serve_once;

fn pool_with_job() -> (DbPool, i64) {
    let mut pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");

    let job = NewJob {
        title: "Développeur Rust".into(),
        company: "Ferris SA".into(),
        location: "Lyon, Auvergne-Rhône-Alpes, FR".into(),
        url: "https://example.com/jobs/1".into(),
        date_posted: "2025-06-02".into(),
        description: String::new(),
        source: "Indeed".into(),
    };
    insert_jobs(&mut pool.conn, &[job]).expect("insert");
    (pool, 1)
}

/// Geocoder pointed at `url`; nothing listens on port 1.
fn geocoder(url: &str) -> NominatimClient {
    let cfg = GeoConfig {
        nominatim_url: url.into(),
        ..Default::default()
    };
    NominatimClient::new(&cfg).expect("geocoder")
}

#[test]
fn test_update_address_persists() {
    let (mut pool, id) = pool_with_job();
    assert_eq!(load_job(&mut pool, id).expect("load").expect("job").address, None);

    update_address(&mut pool, id, "1 Rue du Crabe, Lyon").expect("update");

    let job = load_job(&mut pool, id).expect("load").expect("job");
    assert_eq!(job.address.as_deref(), Some("1 Rue du Crabe, Lyon"));

    let err = update_address(&mut pool, 99, "nowhere").expect_err("missing job");
    assert!(matches!(err, AppError::JobNotFound(99)));
}

#[test]
fn test_resolve_address_prefers_cache() {
    let (mut pool, id) = pool_with_job();
    update_address(&mut pool, id, "1 Rue du Crabe, Lyon").expect("update");
    let job = require_job(&mut pool, id).expect("job");

    // an unreachable geocoder would yield None if it were asked
    let found = BrowseLogic::resolve_address(&mut pool, &job, &geocoder("http://127.0.0.1:1"))
        .expect("resolve");
    assert_eq!(found.as_deref(), Some("1 Rue du Crabe, Lyon"));
}

#[test]
fn test_resolve_address_lookup_failure_leaves_cache_empty() {
    let (mut pool, id) = pool_with_job();
    let job = require_job(&mut pool, id).expect("job");

    let found = BrowseLogic::resolve_address(&mut pool, &job, &geocoder("http://127.0.0.1:1"))
        .expect("resolve");
    assert_eq!(found, None);
    assert_eq!(require_job(&mut pool, id).expect("job").address, None);
}

#[test]
fn test_resolve_address_looks_up_and_caches() {
    let (mut pool, id) = pool_with_job();
    let job = require_job(&mut pool, id).expect("job");

    let (url, server) = serve_once(
        "200 OK",
        r#"[{"display_name":"Ferris SA, 1 Rue du Crabe, Lyon, France"}]"#,
    );
    let found = BrowseLogic::resolve_address(&mut pool, &job, &geocoder(&url)).expect("resolve");
    let head = server.join().expect("server thread");

    assert_eq!(found.as_deref(), Some("Ferris SA, 1 Rue du Crabe, Lyon, France"));
    assert!(head.starts_with("GET /search?"));
    assert!(head.contains("Ferris+SA%2C+Lyon%2C+France") || head.contains("Ferris%20SA%2C%20Lyon%2C%20France"));

    let stored = require_job(&mut pool, id).expect("job");
    assert_eq!(
        stored.address.as_deref(),
        Some("Ferris SA, 1 Rue du Crabe, Lyon, France")
    );
}
