use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration loaded from recycler.toml.
///
/// A missing config file is not an error: every section has defaults that
/// reproduce the stock setup (docletServer.ecs via `ps -eaf`, relaunched
/// with `~/easycoder docletServer.ecs`).
#[derive(Debug, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RecyclerConfig {
    pub target: TargetConfig,
    pub listing: ListingConfig,
    pub launcher: LauncherConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Substring matched against each process-listing line.
    pub name: String,
    /// Lines containing this marker are never selected, so a pipeline like
    /// `ps -eaf | grep docletServer.ecs` cannot match its own grep.
    pub exclusion: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Launcher command path; a leading `~/` or `$HOME/` is expanded.
    pub command: String,
    pub args: Vec<String>,
}

// --- Default implementations ---

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            name: "docletServer.ecs".to_string(),
            exclusion: "grep".to_string(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            command: "ps".to_string(),
            args: vec!["-eaf".to_string()],
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            command: "~/easycoder".to_string(),
            args: vec!["docletServer.ecs".to_string()],
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file (other than it not existing).
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl RecyclerConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; any other read or parse failure
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl LauncherConfig {
    /// The launcher command with any home-directory prefix expanded.
    pub fn resolved_command(&self) -> PathBuf {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        expand_home(&self.command, home.as_deref())
    }
}

/// Expand a leading `~/` or `$HOME/` against the given home directory.
/// Anything else passes through untouched, as does everything when no home
/// directory is known.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    if let Some(home) = home {
        if let Some(rest) = raw.strip_prefix("~/") {
            return home.join(rest);
        }
        if let Some(rest) = raw.strip_prefix("$HOME/") {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_setup() {
        let config = RecyclerConfig::default();
        assert_eq!(config.target.name, "docletServer.ecs");
        assert_eq!(config.target.exclusion, "grep");
        assert_eq!(config.listing.command, "ps");
        assert_eq!(config.listing.args, vec!["-eaf"]);
        assert_eq!(config.launcher.command, "~/easycoder");
        assert_eq!(config.launcher.args, vec!["docletServer.ecs"]);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: RecyclerConfig = toml::from_str(
            r#"
            [target]
            name = "otherServer.ecs"
            "#,
        )
        .unwrap();
        assert_eq!(config.target.name, "otherServer.ecs");
        // Unnamed fields keep their defaults
        assert_eq!(config.target.exclusion, "grep");
        assert_eq!(config.listing.command, "ps");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RecyclerConfig::load(&dir.path().join("nonexistent.toml")).unwrap();
        assert_eq!(config.target.name, "docletServer.ecs");
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recycler.toml");
        std::fs::write(&path, "this is not { toml").unwrap();

        let err = RecyclerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recycler.toml");
        std::fs::write(
            &path,
            r#"
            [launcher]
            command = "/opt/easycoder"
            args = ["server.ecs"]
            "#,
        )
        .unwrap();

        let config = RecyclerConfig::load(&path).unwrap();
        assert_eq!(config.launcher.command, "/opt/easycoder");
        assert_eq!(config.launcher.args, vec!["server.ecs"]);
    }

    #[test]
    fn test_expand_home_tilde() {
        let path = expand_home("~/easycoder", Some(Path::new("/home/doclet")));
        assert_eq!(path, PathBuf::from("/home/doclet/easycoder"));
    }

    #[test]
    fn test_expand_home_dollar_home() {
        let path = expand_home("$HOME/easycoder", Some(Path::new("/home/doclet")));
        assert_eq!(path, PathBuf::from("/home/doclet/easycoder"));
    }

    #[test]
    fn test_expand_home_absolute_path_untouched() {
        let path = expand_home("/usr/local/bin/easycoder", Some(Path::new("/home/doclet")));
        assert_eq!(path, PathBuf::from("/usr/local/bin/easycoder"));
    }

    #[test]
    fn test_expand_home_without_home_dir() {
        let path = expand_home("~/easycoder", None);
        assert_eq!(path, PathBuf::from("~/easycoder"));
    }
}
