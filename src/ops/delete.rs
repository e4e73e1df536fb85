use super::{Missing, Outcome, SiteFs};
use crate::errors::{FsError, FsResult};
use std::fs;
use tracing::info;

impl SiteFs {
    pub fn delete_file(&self, path: &str) -> FsResult<Outcome> {
        let target = self.resolve_target(path)?;
        if !target.as_path().is_file() {
            return Ok(Outcome::NotFound(Missing::Source));
        }
        fs::remove_file(&target).map_err(|e| FsError::io(target.as_path(), e))?;
        info!(path = %target.relative().display(), "deleted file");
        Ok(Outcome::Done)
    }

    /// Non-recursive deletes of a non-empty directory fail with `FsError::Io`.
    pub fn delete_directory(&self, path: &str, recursive: bool) -> FsResult<Outcome> {
        let target = self.resolve_target(path)?;
        if !target.as_path().is_dir() {
            return Ok(Outcome::NotFound(Missing::Source));
        }
        let res = if recursive { fs::remove_dir_all(&target) } else { fs::remove_dir(&target) };
        res.map_err(|e| FsError::io(target.as_path(), e))?;
        info!(path = %target.relative().display(), recursive, "deleted directory");
        Ok(Outcome::Done)
    }
}
