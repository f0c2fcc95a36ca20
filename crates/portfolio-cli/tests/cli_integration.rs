//! CLI Integration Tests
//!
//! These tests run the `portfolio` binary end-to-end against the built-in
//! site record and temporary site files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("portfolio").expect("Failed to find portfolio binary")
}

/// Write a site file into `dir` and return its path
fn write_site(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("site.json");
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Contact Card Tests
// ============================================================================

#[test]
fn test_vcard_prints_card() {
    cli_cmd()
        .arg("vcard")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCARD\nVERSION:3.0\n"))
        .stdout(predicate::str::contains("TEL;TYPE=CELL:3477795385"))
        .stdout(predicate::str::contains("URL;TYPE=GitHub:https://github.com/enrique-mclaughlin"))
        .stdout(predicate::str::contains("END:VCARD"));
}

#[test]
fn test_vcard_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("card.vcf");

    cli_cmd()
        .arg("vcard")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("BEGIN:VCARD"));
    assert!(written.ends_with("END:VCARD"));
}

#[test]
fn test_save_downloads_into_directory() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("save")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved contact card to"))
        .stdout(predicate::str::contains("enrique-mclaughlin-contact.vcf"));

    let written = std::fs::read_to_string(dir.path().join("enrique-mclaughlin-contact.vcf")).unwrap();
    assert!(written.contains("FN:Enrique McLaughlin"));
}

#[test]
fn test_mecard_payload() {
    cli_cmd()
        .arg("mecard")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MECARD:N:McLaughlin,Enrique;TEL:3477795385;"))
        .stdout(predicate::str::contains("URL:https://www.linkedin.com/in/enrique-mclaughlin;;"));
}

// ============================================================================
// Site File Tests
// ============================================================================

#[test]
fn test_site_file_overrides_contact() {
    let dir = TempDir::new().unwrap();
    let site = write_site(&dir, r#"{ "contact": { "phone": "+1 (555) 010-0100" } }"#);

    cli_cmd()
        .arg("--site")
        .arg(&site)
        .arg("vcard")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEL;TYPE=CELL:+15550100100"))
        .stdout(predicate::str::contains("FN:Enrique McLaughlin"));
}

#[test]
fn test_invalid_site_file_fails() {
    let dir = TempDir::new().unwrap();
    let site = write_site(&dir, "{ not json");

    cli_cmd()
        .arg("--site")
        .arg(&site)
        .arg("mecard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load site file"));
}

// ============================================================================
// QR Tests
// ============================================================================

#[test]
fn test_links_lists_gallery() {
    cli_cmd()
        .args(["links", "--page-url", "https://example.com/?page=contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Card"))
        .stdout(predicate::str::contains("Email\n  href:  mailto:enrique.mclaughlin.careers@gmail.com"))
        .stdout(predicate::str::contains("LinkedIn"))
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("This Page\n  href:  https://example.com/?page=contact"))
        .stdout(predicate::str::contains(
            "image: https://api.qrserver.com/v1/create-qr-code/?size=256x256&margin=0&data=",
        ));
}

#[test]
fn test_links_without_page_url_use_placeholder() {
    cli_cmd()
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("This Page\n  href:  #"));
}

#[test]
fn test_qr_renders_in_terminal() {
    cli_cmd()
        .args(["qr", "email"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Email\n"))
        .stdout(predicate::str::contains("\u{2580}").or(predicate::str::contains("\u{2584}")));
}

#[test]
fn test_page_qr_requires_url() {
    cli_cmd()
        .args(["qr", "page"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--page-url is required"));
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test]
fn test_url_sets_page_param() {
    cli_cmd()
        .args(["url", "resume", "--href", "https://example.com/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/?page=resume\nview: resume"));
}

#[test]
fn test_url_home_removes_page_param() {
    cli_cmd()
        .args(["url", "home", "--href", "https://example.com/?ref=a&page=contact#top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/?ref=a#top\nview: home"));
}
