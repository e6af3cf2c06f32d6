//! End-to-end CLI tests: run the compiled binary against the fixture content.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CONTACT_ENV: [&str; 3] = [
    "CYBERFOLIO_EMAILJS_SERVICE_ID",
    "CYBERFOLIO_EMAILJS_TEMPLATE_ID",
    "CYBERFOLIO_EMAILJS_USER_ID",
];

fn fixture_source() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/browser-content")
}

fn run(args: &[&str], source: &Path, output: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cyberfolio"));
    cmd.args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output);
    for key in CONTACT_ENV {
        cmd.env_remove(key);
    }
    cmd.output().expect("failed to run cyberfolio")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_writes_every_route() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = run(&["build"], &fixture_source(), &dist);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    for file in [
        "index.html",
        "404.html",
        "about/index.html",
        "projects/index.html",
        "certifications/index.html",
        "tools/index.html",
        "blog/index.html",
        "contact/index.html",
        "sounds/click.mp3",
        "sounds/hover.mp3",
    ] {
        assert!(dist.join(file).is_file(), "{file} missing");
    }

    let index = std::fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("<title>Fixture Portfolio</title>"));

    let text = stdout(&out);
    assert!(text.contains("Home \u{2192} index.html"));
    assert!(text.contains("Not Found \u{2192} 404.html"));
    assert!(text.contains("Generated 11 pages, 2 assets"));
}

#[test]
fn check_reports_catalog_and_contact_status() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["check"], &fixture_source(), tmp.path());
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("001 Projects (3 entries)"));
    assert!(text.contains("EmailJS: not configured"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn check_rejects_duplicate_catalog_ids() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("catalog.toml"),
        r#"
[[skills]]
id = "ml"
name = "Machine Learning"
description = "a"

[[skills]]
id = "ml"
name = "Machine Learning"
description = "b"
"#,
    )
    .unwrap();
    let out = run(&["check"], tmp.path(), &tmp.path().join("dist"));
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("DuplicateId"), "{stderr}");
    assert!(stderr.contains(r#"id: "ml""#), "{stderr}");
}

#[test]
fn routes_lists_menu_resolution() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["routes"], &fixture_source(), tmp.path());
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("003 Work"));
    assert!(text.contains("CTF Challenges /ctf-challenges \u{2192} Not Found"));
}

#[test]
fn gen_config_is_valid_toml() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["gen-config"], &fixture_source(), tmp.path());
    assert!(out.status.success());
    let parsed: Result<toml::Table, _> = toml::from_str(&stdout(&out));
    assert!(parsed.is_ok());
}

#[test]
fn gen_catalog_round_trips_through_build() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["gen-catalog"], &fixture_source(), tmp.path());
    assert!(out.status.success());
    std::fs::write(tmp.path().join("catalog.toml"), stdout(&out)).unwrap();

    let out = run(&["check"], tmp.path(), &tmp.path().join("dist"));
    assert!(out.status.success());
}

#[test]
fn send_message_without_contact_ids_fails() {
    let tmp = TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_cyberfolio"))
        .args(["send-message", "--name", "Ada", "--email", "ada@example.com"])
        .args(["--message", "Hello", "--source"])
        .arg(tmp.path())
        .env_remove(CONTACT_ENV[0])
        .env_remove(CONTACT_ENV[1])
        .env_remove(CONTACT_ENV[2])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
