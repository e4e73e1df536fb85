pub mod copy;
pub mod delete;
pub mod relocate;

use crate::{
    config::Config,
    errors::{FsError, FsResult},
    paths::{RootGuard, SitePath},
    sanitize::{CharacterPolicy, Sanitizer},
};
use std::path::Path;
use tracing::info;

/// Which endpoint of an operation was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Source,
    Destination,
}

/// Result of a file operation that passed containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NotFound(Missing),
}

impl Outcome {
    pub fn is_done(&self) -> bool { matches!(self, Outcome::Done) }
}

/// Root-confined file operations for one site.
///
/// Every operation resolves its relative arguments through the [`RootGuard`]
/// before any filesystem call. Containment failures come back as
/// `Err(FsError::PathEscapesRoot)`, missing endpoints as `Ok(Outcome::NotFound)`.
/// Callers serialise mutations on overlapping subtrees themselves.
#[derive(Debug, Clone)]
pub struct SiteFs {
    guard: RootGuard,
    sanitizer: Sanitizer,
}

impl SiteFs {
    pub fn new(cfg: &Config) -> FsResult<Self> {
        cfg.validate()?;
        let guard = RootGuard::new(&cfg.root.root_dir)?;
        let sanitizer = Sanitizer::new(CharacterPolicy::from_config(&cfg.clean_chars)?);
        info!(root = %guard.root().display(), "site filesystem ready");
        Ok(Self { guard, sanitizer })
    }

    pub fn guard(&self) -> &RootGuard { &self.guard }
    pub fn root(&self) -> &Path { self.guard.root() }
    pub fn sanitizer(&self) -> &Sanitizer { &self.sanitizer }

    pub fn sanitize(&self, raw: &str) -> String { self.sanitizer.sanitize(raw) }

    pub fn checked_combine<S: AsRef<Path>>(&self, segments: &[S]) -> FsResult<SitePath> {
        self.guard.checked_combine(segments)
    }

    pub fn is_in_site(&self, relative: &str) -> bool { self.guard.is_in_site(relative) }

    // Sources of deletes and moves may never be the root itself.
    fn resolve_target(&self, relative: &str) -> FsResult<SitePath> {
        let target = self.guard.resolve(relative)?;
        if target.is_root() {
            return Err(FsError::RootNotAllowed);
        }
        Ok(target)
    }
}

pub(crate) fn exists_no_follow(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
