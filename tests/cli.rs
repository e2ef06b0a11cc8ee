use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const JOBS_BODY: &str = r#"{
    "statusCode": 200,
    "body": [
        { "job_id": "101", "title": "Senior Rust Engineer", "company_name": "Ferrous", "location": "Austin, TX", "min_salary": 150000, "max_salary": 190000, "currency": "USD", "pay_period": "YEARLY" },
        { "job_id": "102", "title": "Product Designer", "company_name": "Pixel Co", "location": "Sacramento, CA" },
        { "job_id": 103, "title": "Data Engineer", "company_name": "Acme", "location": "Albany, NY" }
    ]
}"#;

const SITES_BODY: &str = r#"{
    "statusCode": 200,
    "body": [
        { "Id": 1, "Title": "Coastal Ecology REU", "Institution": "Bayview University", "Institution City": "Monterey", "Institution State/Territory": "CA", "Research Areas": "Biology", "Site Website": "https://bayview.example/reu" },
        { "Id": 2, "Title": "Robotics Summer Research", "Institution": "Northern Tech", "Institution City": "Troy", "Institution State/Territory": "NY", "Research Areas": "Engineering" },
        { "Id": "3", "Title": "Marine Genomics", "Institution": "Pacific State", "Institution State/Territory": "OR", "Research Areas": "Biology" }
    ]
}"#;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn jobboard() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jobboard"));
    cmd.env_remove("JOBBOARD_CONFIG")
        .env_remove("JOBBOARD_API_URL")
        .env_remove("JOBBOARD_RESEARCH_URL")
        .env_remove("JOBBOARD_FORMAT")
        .env_remove("JOBBOARD_DEBUG");
    cmd
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "api:\n  base_url: http://gateway.test/jobs\ncache:\n  freshness_minutes: 5\n",
    );

    let assert = jobboard()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("http://gateway.test/jobs"));
    assert!(stdout.contains("Cache freshness: 5 min"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_json_applies_api_url_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "preferences:\n  page_size: 25\n");

    let assert = jobboard()
        .args(["--format", "json", "status", "--api-url", "http://localhost:7777/"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["api"]["base_url"], "http://localhost:7777");
    assert_eq!(value["data"]["preferences"]["page_size"], 25);
    assert_eq!(value["data"]["config_file_found"], true);

    Ok(())
}

#[test]
fn invalid_config_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "cache:\n  freshness_minutes: 0\n");

    jobboard()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("freshness_minutes"));

    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    jobboard()
        .arg("list")
        .arg("--config")
        .arg(temp.path().join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn list_json_filters_and_pages() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(JOBS_BODY)
        .expect(1)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    let assert = jobboard()
        .args(["--format", "json", "list", "--search", "engineer", "--per-page", "1"])
        .args(["--page", "2"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .success();

    reading.assert();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["total_items"], 2);
    assert_eq!(value["data"]["total_pages"], 2);
    assert_eq!(value["data"]["page"], 2);
    assert_eq!(value["data"]["items"][0]["job_id"], "103");
    assert!(value["data"]["items"][0]["cached_on"].is_string());

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn list_table_shows_rows_and_footer() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(JOBS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .args(["list", "--location", "CA,NY"])
        .arg("--config")
        .arg(&config_path)
        .env("JOBBOARD_API_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Designer"))
        .stdout(predicate::str::contains("Data Engineer"))
        .stdout(predicate::str::contains("Senior Rust Engineer").not())
        .stdout(predicate::str::contains("Page 1 of 1 (2 jobs)"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn list_reports_gateway_failure() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server
        .mock("GET", "/reading")
        .with_status(500)
        .with_body("internal failure")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server error: internal failure"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn show_unknown_job_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _detail = server
        .mock("GET", "/reading")
        .match_query(mockito::Matcher::UrlEncoded("id".into(), "999".into()))
        .with_status(200)
        .with_body(r#"{"statusCode":200,"body":[]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .args(["show", "999"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Job not found: 999"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn show_json_returns_detail_record() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _detail = server
        .mock("GET", "/reading")
        .match_query(mockito::Matcher::UrlEncoded("id".into(), "101".into()))
        .with_status(200)
        .with_body(r#"{"body":[{"job_id":"101","title":"Senior Rust Engineer","views":12}]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    let assert = jobboard()
        .args(["--format", "json", "show", "101"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["job_id"], "101");
    assert_eq!(value["data"]["views"], 12);

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn featured_samples_requested_count() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(JOBS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    let assert = jobboard()
        .args(["--format", "json", "featured", "--count", "2"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let ids: Vec<&str> = value["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|job| job["job_id"].as_str())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn featured_soft_fails_to_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server
        .mock("GET", "/reading")
        .with_status(503)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .args(["--format", "json", "featured"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data\": []"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn watch_prints_a_line_per_refresh() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(JOBS_BODY)
        .expect(2)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "cache:\n  preload_delay_ms: 0\n");

    let assert = jobboard()
        .args(["--format", "json", "watch", "--interval", "1", "--times", "1"])
        .arg("--config")
        .arg(&config_path)
        .arg("--api-url")
        .arg(server.url())
        .assert()
        .success();

    reading.assert();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line["jobs"] == 3));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn research_json_filters_by_state_and_discipline() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(SITES_BODY)
        .expect(1)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    let assert = jobboard()
        .args(["--format", "json", "research", "--state", "CA,OR", "-d", "biology"])
        .arg("--config")
        .arg(&config_path)
        .arg("--research-url")
        .arg(server.url())
        .assert()
        .success();

    reading.assert();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["total_items"], 2);
    assert_eq!(value["data"]["items"][0]["id"], "1");
    assert_eq!(value["data"]["items"][0]["city"], "Monterey");
    assert_eq!(value["data"]["items"][1]["id"], "3");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn reu_alias_prints_table_and_footer() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server
        .mock("GET", "/reading")
        .with_status(200)
        .with_body(SITES_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .args(["reu", "--institution", "tech"])
        .arg("--config")
        .arg(&config_path)
        .env("JOBBOARD_RESEARCH_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Robotics Summer Research"))
        .stdout(predicate::str::contains("Coastal Ecology REU").not())
        .stdout(predicate::str::contains("Page 1 of 1 (1 sites)"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn research_gateway_failure_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _reading = server.mock("GET", "/reading").with_status(503).create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "{}\n");

    jobboard()
        .arg("research")
        .arg("--config")
        .arg(&config_path)
        .arg("--research-url")
        .arg(server.url())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    Ok(())
}
