use super::{join, normalize};
use crate::config::canonical_root;
use crate::errors::{FsError, FsResult};
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// An absolute path proven to lie under the site root.
///
/// Only [`RootGuard`] and [`SitePath::child`] construct these, so every path
/// handed to `std::fs` by the file operations has passed containment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SitePath {
    abs: PathBuf,
    root: PathBuf,
}

impl SitePath {
    pub fn as_path(&self) -> &Path { &self.abs }

    /// Path relative to the site root; empty for the root itself.
    pub fn relative(&self) -> &Path {
        self.abs.strip_prefix(&self.root).unwrap_or_else(|_| Path::new(""))
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        if self.is_root() { None } else { self.abs.file_name() }
    }

    pub fn is_root(&self) -> bool { self.abs == self.root }

    /// The location on disk after following symlinks, for alias checks between two site paths.
    pub fn real_location(&self) -> FsResult<PathBuf> {
        real_location(&self.abs).ok_or_else(|| FsError::PathEscapesRoot { path: self.abs.clone() })
    }

    /// Derives the path of a directory entry. `name` must be a single plain component.
    pub fn child(&self, name: &OsStr) -> FsResult<SitePath> {
        let mut comps = Path::new(name).components();
        match (comps.next(), comps.next()) {
            (Some(Component::Normal(_)), None) => contain(&self.root, self.abs.join(name)),
            _ => Err(FsError::InvalidPath(format!(
                "not a plain entry name: {}",
                Path::new(name).display()
            ))),
        }
    }
}

impl AsRef<Path> for SitePath {
    fn as_ref(&self) -> &Path { &self.abs }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.abs.display()) }
}

#[derive(Debug, Clone)]
pub struct RootGuard {
    root: PathBuf,
}

impl RootGuard {
    pub fn new(root: &Path) -> FsResult<Self> {
        Ok(Self { root: canonical_root(root)? })
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn root_path(&self) -> SitePath {
        SitePath { abs: self.root.clone(), root: self.root.clone() }
    }

    pub fn is_under_root(&self, candidate: &Path) -> bool {
        self.ensure_under_root(candidate).is_ok()
    }

    pub fn ensure_under_root(&self, candidate: &Path) -> FsResult<SitePath> {
        contain(&self.root, normalize(candidate))
    }

    /// Joins the root with `segments`, then proves the result is still under the root.
    pub fn checked_combine<S: AsRef<Path>>(&self, segments: &[S]) -> FsResult<SitePath> {
        let mut all: Vec<&Path> = Vec::with_capacity(segments.len() + 1);
        all.push(&self.root);
        all.extend(segments.iter().map(|s| s.as_ref()));
        let joined = join(&all)?;
        let resolved = self.ensure_under_root(&joined)?;
        debug!(path = %resolved, "resolved site path");
        Ok(resolved)
    }

    pub fn resolve(&self, relative: &str) -> FsResult<SitePath> {
        self.checked_combine(&[relative])
    }

    pub fn is_in_site(&self, relative: &str) -> bool {
        self.resolve(relative).is_ok()
    }
}

// Component-wise prefix test, so `/site` does not contain `/site-other`. The
// deepest existing ancestor is then resolved through symlinks and tested again.
fn contain(root: &Path, normalized: PathBuf) -> FsResult<SitePath> {
    if !normalized.is_absolute() || !normalized.starts_with(root) {
        warn!(path = %normalized.display(), root = %root.display(), "path escapes site root");
        return Err(FsError::PathEscapesRoot { path: normalized });
    }
    match real_location(&normalized) {
        Some(real) if real.starts_with(root) => Ok(SitePath { abs: normalized, root: root.to_path_buf() }),
        real => {
            let target = real.map(|r| r.display().to_string()).unwrap_or_else(|| "dangling link".into());
            warn!(path = %normalized.display(), target = %target, "link escapes site root");
            Err(FsError::PathEscapesRoot { path: normalized })
        }
    }
}

/// Where `path` lands once symlinks are followed: the canonical deepest
/// existing ancestor with the missing components re-appended. `None` when a
/// component is a dangling symlink, since creating through it could land anywhere.
fn real_location(path: &Path) -> Option<PathBuf> {
    let mut missing: Vec<&OsStr> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(real) = dunce::canonicalize(current) {
            let mut out = real;
            out.extend(missing.iter().rev());
            return Some(out);
        }
        if fs::symlink_metadata(current).is_ok() {
            return None;
        }
        missing.push(current.file_name()?);
        current = current.parent()?;
    }
}
