//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::Settings;
use super::SettingsWarning;

/// Overrides the settings file location
pub const SETTINGS_PATH_VAR: &str = "TAGDEPLOY_SETTINGS_PATH";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Settings, Vec<SettingsWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            SettingsWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from an explicit file, the default file, or defaults
///
/// An explicit file must exist. A missing default file falls back to the
/// built-in defaults. Environment overrides are applied in every case.
pub fn load_or_default(explicit: Option<&Path>) -> DeployResult<Settings> {
    let settings = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(DeployError::InvalidSettings {
                    file: path.to_path_buf(),
                    message: "settings file not found".to_string(),
                });
            }
            Settings::load(path)?
        }
        None => match default_settings_path() {
            Some(path) if path.is_file() => Settings::load(&path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Settings::default()
            }
            None => Settings::default(),
        },
    };

    Ok(with_env_overrides(settings))
}

/// `$TAGDEPLOY_SETTINGS_PATH`, else `<config dir>/tagdeploy/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = non_empty_var(SETTINGS_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("tagdeploy").join("config.toml"))
}

/// Apply environment variable overrides (TAGDEPLOY_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    apply_env_overrides(settings, non_empty_var)
}

/// Apply overrides from `lookup`, which maps a variable name to its value
pub fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup("TAGDEPLOY_NAME") {
        settings.deploy.name = name;
    }
    if let Some(destination) = lookup("TAGDEPLOY_DESTINATION") {
        settings.deploy.destination = Some(PathBuf::from(destination));
    }
    if let Some(staging) = lookup("TAGDEPLOY_STAGING_DIR") {
        settings.deploy.staging_dir = Some(PathBuf::from(staging));
    }
    if let Some(user) = lookup("TAGDEPLOY_USER") {
        settings.identity.user = Some(user);
    }
    if let Some(group) = lookup("TAGDEPLOY_GROUP") {
        settings.identity.group = Some(group);
    }
    if let Some(git) = lookup("TAGDEPLOY_GIT") {
        settings.source.git = PathBuf::from(git);
    }
    if let Some(repository) = lookup("TAGDEPLOY_REPOSITORY") {
        settings.source.repository = Some(repository);
    }

    settings
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Line of the table header or `key = ...` assignment for a dotted path
fn find_line_number(content: &str, dotted: &str) -> Option<usize> {
    let (table, key) = dotted.rsplit_once('.').unwrap_or(("", dotted));
    let mut current = String::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if let Some(header) = table_header(line) {
            if header == dotted {
                return Some(i + 1);
            }
            current = header.to_string();
        } else if current == table && assigned_key(line) == Some(key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let end = inner.find(']')?;
    Some(inner[..end].trim_start_matches('[').trim())
}

fn assigned_key(line: &str) -> Option<&str> {
    let (lhs, _) = line.split_once('=')?;
    Some(lhs.trim().trim_matches('"'))
}

const KNOWN_KEYS: &[&str] = &[
    "deploy",
    "name",
    "destination",
    "staging_dir",
    "ensure_files",
    "identity",
    "user",
    "group",
    "source",
    "repository",
    "git",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, single row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
