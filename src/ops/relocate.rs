use super::{exists_no_follow, Missing, Outcome, SiteFs};
use crate::errors::{FsError, FsResult};
use crate::paths::SitePath;
use std::fs;
use tracing::info;

impl SiteFs {
    /// Moves a file into `new_containing_dir`, replacing a same-named file there.
    pub fn move_file(&self, path: &str, new_containing_dir: &str) -> FsResult<Outcome> {
        let source = self.resolve_target(path)?;
        let dest_dir = self.guard.resolve(new_containing_dir)?;
        if !source.as_path().is_file() {
            return Ok(Outcome::NotFound(Missing::Source));
        }
        if !dest_dir.as_path().is_dir() {
            return Ok(Outcome::NotFound(Missing::Destination));
        }
        let target = landing_path(&source, &dest_dir)?;
        if target.real_location()? == source.real_location()? {
            return Ok(Outcome::Done);
        }
        if target.as_path().is_dir() {
            return Err(FsError::DestinationExists { path: target.as_path().to_path_buf() });
        }
        if exists_no_follow(target.as_path()) {
            fs::remove_file(&target).map_err(|e| FsError::io(target.as_path(), e))?;
        }
        fs::rename(&source, &target).map_err(|e| FsError::io(source.as_path(), e))?;
        info!(from = %source.relative().display(), to = %target.relative().display(), "moved file");
        Ok(Outcome::Done)
    }

    /// Moves a directory into `new_containing_dir`.
    ///
    /// A same-named empty directory at the destination is replaced. Anything
    /// else under that name is left alone and reported as `DestinationExists`.
    pub fn move_directory(&self, path: &str, new_containing_dir: &str) -> FsResult<Outcome> {
        let source = self.resolve_target(path)?;
        let dest_dir = self.guard.resolve(new_containing_dir)?;
        if !source.as_path().is_dir() {
            return Ok(Outcome::NotFound(Missing::Source));
        }
        if !dest_dir.as_path().is_dir() {
            return Ok(Outcome::NotFound(Missing::Destination));
        }
        if dest_dir.real_location()?.starts_with(source.real_location()?) {
            return Err(FsError::InvalidPath(format!(
                "cannot move {} into itself",
                source.relative().display()
            )));
        }
        let target = landing_path(&source, &dest_dir)?;
        if target.real_location()? == source.real_location()? {
            return Ok(Outcome::Done);
        }
        if exists_no_follow(target.as_path()) {
            if !is_empty_dir(&target)? {
                return Err(FsError::DestinationExists { path: target.as_path().to_path_buf() });
            }
            fs::remove_dir(&target).map_err(|e| FsError::io(target.as_path(), e))?;
        }
        fs::rename(&source, &target).map_err(|e| FsError::io(source.as_path(), e))?;
        info!(from = %source.relative().display(), to = %target.relative().display(), "moved directory");
        Ok(Outcome::Done)
    }
}

fn landing_path(source: &SitePath, dest_dir: &SitePath) -> FsResult<SitePath> {
    let name = source
        .file_name()
        .ok_or_else(|| FsError::InvalidPath(format!("no entry name in {source}")))?;
    dest_dir.child(name)
}

fn is_empty_dir(path: &SitePath) -> FsResult<bool> {
    let meta = fs::symlink_metadata(path).map_err(|e| FsError::io(path.as_path(), e))?;
    if !meta.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path).map_err(|e| FsError::io(path.as_path(), e))?;
    Ok(entries.next().is_none())
}
