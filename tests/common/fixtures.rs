//! Test fixtures - reusable content constants for tests.

/// Tag the fixture repository is tagged with
pub const RELEASE_TAG: &str = "2012-01-05T1038";

/// Config overlay content
pub const CONFIG_CONTENT: &str = "This is the test config file.";

/// Files committed to the fixture repository
pub const REPO_FILES: &[(&str, &str)] = &[
    ("app.py", "print('timetables')\n"),
    ("config/README", "The config file goes here.\n"),
    ("secret/db.key", "hunter2\n"),
    ("secret/ssl/site.pem", "-----BEGIN CERTIFICATE-----\n"),
];

/// Settings file pointing at the env's destination and staging dir
pub fn settings_toml(repository: &str, destination: &str, staging: &str) -> String {
    format!(
        r#"[deploy]
name = "tt"
destination = "{destination}"
staging_dir = "{staging}"
ensure_files = ["data/log.txt"]

[source]
repository = "{repository}"
"#
    )
}
