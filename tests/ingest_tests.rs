use rjobfinder::config::SearchProfile;
use rjobfinder::core::ingest::IngestLogic;
use rjobfinder::db::initialize::init_db;
use rjobfinder::db::pool::DbPool;
use rjobfinder::db::queries::{insert_jobs, load_jobs, update_status};
use rjobfinder::models::{JobStatus, NewJob, Site};
use rjobfinder::scrape::error::Result as ScrapeResult;
use rjobfinder::scrape::{JobSource, ScrapeError, ScrapedJob, SearchQuery, dedupe_by_url, scrape_all};
use std::cell::RefCell;
use std::rc::Rc;

/// Canned source recording the queries it receives.
struct StaticSource {
    site: Site,
    jobs: Vec<ScrapedJob>,
    fail: bool,
    calls: Rc<RefCell<Vec<SearchQuery>>>,
}

impl JobSource for StaticSource {
    fn site(&self) -> Site {
        self.site
    }

    fn fetch(&self, query: &SearchQuery) -> ScrapeResult<Vec<ScrapedJob>> {
        self.calls.borrow_mut().push(query.clone());
        if self.fail {
            return Err(ScrapeError::Api {
                status: 429,
                message: "too many requests".into(),
            });
        }
        // one posting per keyword, plus a shared one
        let mut out: Vec<ScrapedJob> = self
            .jobs
            .iter()
            .cloned()
            .map(|mut j| {
                j.job_url = j.job_url.map(|u| format!("{}?q={}", u, query.keyword));
                j
            })
            .collect();
        out.push(scraped("Shared posting", "https://example.com/shared"));
        Ok(out)
    }
}

fn scraped(title: &str, url: &str) -> ScrapedJob {
    ScrapedJob {
        title: Some(title.into()),
        company: Some("ACME".into()),
        location: Some("Lille, Hauts-de-France".into()),
        job_url: Some(url.into()),
        date_posted: Some("2025-06-01".into()),
        description: None,
        site: None,
    }
}

fn source(site: Site, url: &str, fail: bool) -> (Box<dyn JobSource>, Rc<RefCell<Vec<SearchQuery>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let src = StaticSource {
        site,
        jobs: vec![scraped(&format!("{} job", site.tag()), url)],
        fail,
        calls: Rc::clone(&calls),
    };
    (Box::new(src), calls)
}

fn profile(keywords: &[&str]) -> SearchProfile {
    SearchProfile {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        location: "Lille".into(),
        days_old: 3,
        results_per_keyword: 10,
        ..Default::default()
    }
}

fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

#[test]
fn test_scrape_all_tolerates_failing_source() {
    let (indeed, indeed_calls) = source(Site::Indeed, "https://example.com/indeed", false);
    let (linkedin, linkedin_calls) = source(Site::LinkedIn, "https://example.com/linkedin", true);
    let (google, _) = source(Site::Google, "https://example.com/google", false);
    let sources = vec![indeed, linkedin, google];

    let report = scrape_all(&sources, &profile(&["rust", "go"]));

    // every source is tried for every keyword
    assert_eq!(indeed_calls.borrow().len(), 2);
    assert_eq!(linkedin_calls.borrow().len(), 2);

    assert_eq!(report.failures.len(), 2);
    assert!(report.failures.iter().all(|f| f.site == Site::LinkedIn));
    assert_eq!(report.failures[0].keyword, "rust");
    assert!(report.failures[0].error.contains("429"));

    // 2 keywords × 2 working sources × 2 postings
    assert_eq!(report.jobs.len(), 8);
    assert_eq!(report.jobs[0].source, "Indeed");
    assert_eq!(report.jobs[0].url, "https://example.com/indeed?q=rust");
    assert_eq!(report.jobs[2].source, "Google");
    assert_eq!(report.jobs[0].description, "");
}

#[test]
fn test_search_query_built_from_profile() {
    let (indeed, indeed_calls) = source(Site::Indeed, "https://example.com/i", false);
    let (linkedin, linkedin_calls) = source(Site::LinkedIn, "https://example.com/l", false);

    scrape_all(&[indeed, linkedin], &profile(&["data"]));

    let q = indeed_calls.borrow()[0].clone();
    assert_eq!(q.keyword, "data");
    assert_eq!(q.location, "Lille");
    assert_eq!(q.country, "FRANCE");
    assert_eq!(q.hours_old, 72);
    assert_eq!(q.results_wanted, 10);
    assert_eq!(q.description_format, "markdown");
    assert!(q.fetch_full_description);

    assert!(!linkedin_calls.borrow()[0].fetch_full_description);
}

#[test]
fn test_normalize_drops_records_without_url() {
    let blank = ScrapedJob {
        title: Some("Ghost".into()),
        job_url: Some("   ".into()),
        ..Default::default()
    };
    assert!(blank.normalize("Indeed").is_none());

    let job = ScrapedJob {
        title: Some(" Ops ".into()),
        job_url: Some("https://example.com/ops".into()),
        date_posted: Some("2025-05-30T08:15:00Z".into()),
        ..Default::default()
    }
    .normalize("Google")
    .expect("normalized");

    assert_eq!(job.title, "Ops");
    assert_eq!(job.company, "");
    assert_eq!(job.location, "");
    assert_eq!(job.date_posted, "2025-05-30");
    assert_eq!(job.source, "Google");
}

#[test]
fn test_dedupe_keeps_first_occurrence() {
    let mk = |url: &str, source: &str| NewJob {
        title: "t".into(),
        company: String::new(),
        location: String::new(),
        url: url.into(),
        date_posted: String::new(),
        description: String::new(),
        source: source.into(),
    };

    let out = dedupe_by_url(vec![mk("a", "Indeed"), mk("b", "Indeed"), mk("a", "Google")]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].source, "Indeed");
    assert_eq!(out[1].url, "b");
}

#[test]
fn test_scrape_pipeline_inserts_only_new_urls() {
    let mut pool = memory_pool();

    let (indeed, _) = source(Site::Indeed, "https://example.com/indeed", false);
    let (google, _) = source(Site::Google, "https://example.com/google", false);
    let sources = vec![indeed, google];

    let first = IngestLogic::scrape(&mut pool, &sources, &profile(&["rust"])).expect("scrape");
    assert_eq!(first.fetched, 4);
    // the shared posting is returned by both sources
    assert_eq!(first.unique, 3);
    assert_eq!(first.inserted, 3);
    assert!(first.failures.is_empty());

    let second = IngestLogic::scrape(&mut pool, &sources, &profile(&["rust"])).expect("scrape");
    assert_eq!(second.inserted, 0);

    let jobs = load_jobs(&mut pool).expect("load");
    assert_eq!(jobs.len(), 3);
    assert!(jobs.iter().all(|j| j.status == JobStatus::NotApplied));
    assert_eq!(jobs[0].source, "Indeed");
}

#[test]
fn test_scrape_requires_keywords() {
    let mut pool = memory_pool();
    let (indeed, calls) = source(Site::Indeed, "https://example.com/indeed", false);

    let err = IngestLogic::scrape(&mut pool, &[indeed], &profile(&[])).expect_err("no keywords");
    assert!(err.to_string().contains("no keywords"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_insert_keeps_existing_status() {
    let mut pool = memory_pool();
    let job = scraped("Rust dev", "https://example.com/keep")
        .normalize("Indeed")
        .expect("normalized");

    assert_eq!(insert_jobs(&mut pool.conn, std::slice::from_ref(&job)).expect("insert"), 1);
    let id = load_jobs(&mut pool).expect("load")[0].id;
    update_status(&mut pool, id, JobStatus::Rejected).expect("update");

    let mut again = job.clone();
    again.title = "Rust dev (updated)".into();
    assert_eq!(insert_jobs(&mut pool.conn, &[again]).expect("insert"), 0);

    let stored = &load_jobs(&mut pool).expect("load")[0];
    assert_eq!(stored.status, JobStatus::Rejected);
    assert_eq!(stored.title, "Rust dev");
}
