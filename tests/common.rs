#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Isolated HOME so tests never read or write the user's configuration.
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rjobfinder_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn rjf() -> Command {
    rjf_in(&test_home())
}

/// Same as [`rjf`] with a dedicated HOME, for tests that write the config file.
pub fn rjf_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rjobfinder");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty HOME directory named after the test.
pub fn fresh_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rjobfinder_home_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rjobfinder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Three postings in the scraping service format: two distinct URLs, one
/// duplicate of the first, plus one record without URL.
pub const FIXTURE_JOBS: &str = r#"{
  "count": 4,
  "jobs": [
    {
      "title": "Développeur Rust",
      "company": "Ferris SA",
      "location": "Lyon, Auvergne-Rhône-Alpes, FR",
      "job_url": "https://example.com/jobs/1",
      "date_posted": "2025-06-02",
      "description": "Backend en Rust, contrat en alternance.",
      "site": "indeed"
    },
    {
      "title": "Data Engineer",
      "company": "Crab Corp",
      "location": "Paris, Île-de-France, FR",
      "job_url": "https://example.com/jobs/2",
      "date_posted": "2025-06-03T10:00:00",
      "description": "Pipelines and SQL, CDI.",
      "site": "linkedin"
    },
    {
      "title": "Développeur Rust (repost)",
      "company": "Ferris SA",
      "location": "Lyon",
      "job_url": "https://example.com/jobs/1"
    },
    {
      "title": "No link",
      "company": "Nowhere"
    }
  ]
}"#;

/// Write `content` to a fixture file in the temp dir and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let path = temp_out(name, "json");
    fs::write(&path, content).expect("write fixture");
    path
}

/// Initialize DB and import the fixture postings
pub fn init_db_with_jobs(db_path: &str, name: &str) {
    rjf()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture(name, FIXTURE_JOBS);

    rjf()
        .args(["--db", db_path, "import", "--file", &fixture, "--source", "Indeed"])
        .assert()
        .success();
}

/// Serve one HTTP response on an ephemeral port; the handle yields the raw request head.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read request");
            if line == "\r\n" || line.is_empty() {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        head
    });

    (format!("http://127.0.0.1:{port}/"), handle)
}
