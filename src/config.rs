use crate::errors::{FsError, FsResult};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub root: Root,
    #[serde(default)]
    pub clean_chars: CleanChars,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Root { pub root_dir: PathBuf }

/// Character sets allowed in generated entry names, compared against lower-cased input.
#[derive(Debug, Deserialize, Clone)]
pub struct CleanChars {
    #[serde(default = "default_anywhere")]
    pub anywhere: String,
    #[serde(default = "default_not_in_beginning")]
    pub not_in_beginning: String,
}
fn default_anywhere() -> String { "abcdefghijklmnopqrstuvwxyz0123456789-_".to_string() }
fn default_not_in_beginning() -> String { ".".to_string() }

impl Default for CleanChars {
    fn default() -> Self {
        Self { anywhere: default_anywhere(), not_in_beginning: default_not_in_beginning() }
    }
}

const FORBIDDEN_NAME_CHARS: [char; 3] = ['/', '\\', '\0'];

impl Config {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self { root: Root { root_dir: root_dir.into() }, clean_chars: CleanChars::default() }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw).context("parsing json config")?)
        } else {
            Ok(toml::from_str(&raw).context("parsing toml config")?)
        }
    }

    pub fn validate(&self) -> FsResult<()> {
        let root = &self.root.root_dir;
        if root.as_os_str().is_empty() {
            return Err(FsError::InvalidConfiguration("root_dir must not be empty".into()));
        }
        if !root.is_absolute() {
            return Err(FsError::InvalidConfiguration(format!("root_dir must be absolute: {}", root.display())));
        }
        if !root.is_dir() {
            return Err(FsError::InvalidConfiguration(format!(
                "root_dir does not exist or is not a directory: {}",
                root.display()
            )));
        }
        self.clean_chars.validate()
    }
}

impl CleanChars {
    pub fn validate(&self) -> FsResult<()> {
        if self.anywhere.is_empty() {
            return Err(FsError::InvalidConfiguration("clean_chars.anywhere must not be empty".into()));
        }
        let mut all = self.anywhere.chars().chain(self.not_in_beginning.chars());
        if let Some(c) = all.find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
            return Err(FsError::InvalidConfiguration(format!("clean_chars must not allow {c:?}")));
        }
        Ok(())
    }
}

pub fn canonical_root(root: &Path) -> FsResult<PathBuf> {
    let c = dunce::canonicalize(root).map_err(|e| FsError::InvalidConfiguration(format!("{}: {e}", root.display())))?;
    if !c.is_dir() {
        return Err(FsError::InvalidConfiguration(format!("root is not a directory: {}", c.display())));
    }
    Ok(c)
}
