//! Persistent editor settings: the Go toolchain path and the workspace folder
//! Stored as pretty-printed JSON under the user config directory

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "gopad";
const CONFIG_FILE: &str = "config.json";

/// Install locations checked when `go` is not on PATH
const COMMON_GO_PATHS: &[&str] = &[
    "/usr/local/go/bin/go",
    "/usr/bin/go",
    "/opt/homebrew/bin/go",
    "C:\\Program Files\\Go\\bin\\go.exe",
    "C:\\go\\bin\\go.exe",
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to determine the user config directory")]
    NoConfigDir,

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' is not a working Go executable", .0.display())]
    InvalidGoPath(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub go_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folder: Option<PathBuf>,
}

/// A settings file at a fixed path
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// `<config_dir>/gopad/config.json`
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::at(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings. A missing file gives defaults, and an empty Go path
    /// is filled in by auto-detection.
    pub fn load(&self) -> Result<Settings> {
        let mut settings: Settings = match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(|source| SettingsError::Json {
                path: self.path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                Settings::default()
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if settings.go_path.is_empty() {
            settings.go_path = detect_go_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
        }

        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let io_err = |source: io::Error| SettingsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let data = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data).map_err(io_err)?;

        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Store a Go executable after checking that `<path> version` runs
    pub fn set_go_path(&self, go_path: &Path) -> Result<Settings> {
        if !validate_go_path(go_path) {
            return Err(SettingsError::InvalidGoPath(go_path.to_path_buf()));
        }
        let mut settings = self.load()?;
        settings.go_path = go_path.display().to_string();
        self.save(&settings)?;
        Ok(settings)
    }

    pub fn set_workspace_folder(&self, folder: &Path) -> Result<Settings> {
        if !folder.is_dir() {
            return Err(SettingsError::NotADirectory(folder.to_path_buf()));
        }
        let mut settings = self.load()?;
        settings.workspace_folder = Some(folder.to_path_buf());
        self.save(&settings)?;
        Ok(settings)
    }
}

/// Find a Go executable: first on PATH, then in common install locations
pub fn detect_go_path() -> Option<PathBuf> {
    let exe = if cfg!(windows) { "go.exe" } else { "go" };

    let on_path = env::var_os("PATH").and_then(|paths| {
        env::split_paths(&paths)
            .map(|dir| dir.join(exe))
            .find(|candidate| candidate.is_file())
    });

    on_path.or_else(|| {
        COMMON_GO_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file())
    })
}

/// True if the path exists and `<path> version` exits successfully
pub fn validate_go_path(go_path: &Path) -> bool {
    if go_path.as_os_str().is_empty() || !go_path.exists() {
        return false;
    }

    Command::new(go_path)
        .arg("version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("config.json"));
        let settings = store.load().unwrap();

        assert_eq!(settings.workspace_folder, None);
        let detected = detect_go_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        assert_eq!(settings.go_path, detected);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("nested").join("config.json"));
        let settings = Settings {
            go_path: "/opt/go/bin/go".to_string(),
            workspace_folder: Some(dir.path().to_path_buf()),
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_file_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("config.json"));
        store
            .save(&Settings {
                go_path: "/usr/bin/go".to_string(),
                workspace_folder: None,
            })
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"goPath\""));
        assert!(!raw.contains("workspaceFolder"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ goPath: ").unwrap();

        let err = SettingsStore::at(&path).load().unwrap_err();
        assert!(matches!(err, SettingsError::Json { .. }), "got {:?}", err);
    }

    #[test]
    fn test_unknown_keys_and_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "goPath": "/x/go", "theme": "dark" }"#).unwrap();

        let settings = SettingsStore::at(&path).load().unwrap();
        assert_eq!(settings.go_path, "/x/go");
        assert_eq!(settings.workspace_folder, None);
    }

    #[test]
    fn test_set_workspace_folder() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("config.json"));

        let settings = store.set_workspace_folder(dir.path()).unwrap();
        assert_eq!(settings.workspace_folder.as_deref(), Some(dir.path()));
        assert_eq!(store.load().unwrap().workspace_folder.as_deref(), Some(dir.path()));

        let missing = dir.path().join("missing");
        assert!(matches!(
            store.set_workspace_folder(&missing),
            Err(SettingsError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_invalid_go_path_rejected() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("config.json"));
        let bogus = dir.path().join("not-go");

        assert!(!validate_go_path(&bogus));
        assert!(!validate_go_path(Path::new("")));
        assert!(matches!(
            store.set_go_path(&bogus),
            Err(SettingsError::InvalidGoPath(_))
        ));
        assert!(!store.path().exists(), "Nothing should be written on failure");
    }

    #[test]
    fn test_error_messages() {
        let err = SettingsError::NotADirectory(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "'/nope' is not a directory");
    }
}
