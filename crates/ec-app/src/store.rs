//! Session storage: settings as YAML, history as JSON lines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::history::{History, HistoryEntry};
use crate::mode::CalculatorMode;
use crate::settings::Settings;

/// Environment variable naming the session directory.
pub const HOME_ENV: &str = "EQCALC_HOME";

const SETTINGS_FILE: &str = "settings.yaml";
const HISTORY_FILE: &str = "history.jsonl";

#[derive(Clone, Debug)]
pub struct SessionStore {
    root_dir: PathBuf,
}

impl SessionStore {
    pub fn new(root_dir: PathBuf) -> AppResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// `explicit`, else `$EQCALC_HOME`, else `./.eqcalc`.
    pub fn resolve(explicit: Option<&Path>) -> AppResult<Self> {
        let root = match explicit {
            Some(path) => path.to_path_buf(),
            None => std::env::var_os(HOME_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".eqcalc")),
        };
        Self::new(root)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn settings_path(&self) -> PathBuf {
        self.root_dir.join(SETTINGS_FILE)
    }

    fn history_path(&self) -> PathBuf {
        self.root_dir.join(HISTORY_FILE)
    }

    /// Stored settings, or defaults on first use.
    pub fn load_settings(&self) -> AppResult<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| AppError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        let settings = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings YAML: {}", e)))?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        let path = self.settings_path();
        let content = serde_yaml::to_string(settings)?;
        fs::write(&path, content).map_err(|e| AppError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Record the last-used mode, leaving every other stored setting as is.
    pub fn remember_mode(&self, mode: CalculatorMode) -> AppResult<()> {
        let mut settings = self.load_settings()?;
        if settings.mode != mode {
            settings.mode = mode;
            self.save_settings(&settings)?;
        }
        Ok(())
    }

    pub fn load_history(&self) -> AppResult<History> {
        let path = self.history_path();
        if !path.exists() {
            return Ok(History::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| AppError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        let mut entries = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let entry: HistoryEntry = serde_json::from_str(line)?;
                entries.push(entry);
            }
        }
        Ok(History::from_entries(entries))
    }

    /// Append one entry without rewriting the file.
    pub fn append_history(&self, entry: &HistoryEntry) -> AppResult<()> {
        use std::io::Write;

        let path = self.history_path();
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::FileWrite {
                path: path.clone(),
                source: e,
            })?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn clear_history(&self) -> AppResult<()> {
        let path = self.history_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        tracing::debug!("cleared history");
        Ok(())
    }
}
