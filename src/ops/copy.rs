use super::{Missing, Outcome, SiteFs};
use crate::errors::{FsError, FsResult};
use crate::paths::SitePath;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const HIDDEN_MARKER: &str = ".";

impl SiteFs {
    /// Copies the files of `src` into `dest`, creating `dest` when absent.
    ///
    /// With `recursive`, subdirectories are copied too, except hidden ones
    /// (leading `.`). Symlinks are never followed. A failure part-way leaves
    /// whatever was already copied in place.
    pub fn copy_directory(&self, src: &str, dest: &str, recursive: bool) -> FsResult<Outcome> {
        let source = self.guard.resolve(src)?;
        let target = self.guard.resolve(dest)?;
        if !source.as_path().is_dir() {
            return Ok(Outcome::NotFound(Missing::Source));
        }
        // Compared on disk, so a destination reached through a symlink counts too.
        let real_source = source.real_location()?;
        if target.real_location()? == real_source {
            return Ok(Outcome::Done);
        }
        let files = copy_tree(&source, &target, recursive, &real_source)?;
        info!(
            from = %source.relative().display(),
            to = %target.relative().display(),
            recursive,
            files,
            "copied directory"
        );
        Ok(Outcome::Done)
    }
}

fn copy_tree(src: &SitePath, dest: &SitePath, recursive: bool, real_top: &Path) -> FsResult<usize> {
    if recursive && dest.real_location()?.starts_with(real_top) {
        return Err(FsError::InvalidPath(format!(
            "cannot copy {} recursively into itself",
            src.relative().display()
        )));
    }
    fs::create_dir_all(dest).map_err(|e| FsError::io(dest.as_path(), e))?;
    let mut copied = 0;
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(src).map_err(|e| FsError::io(src.as_path(), e))? {
        let entry = entry.map_err(|e| FsError::io(src.as_path(), e))?;
        let kind = entry.file_type().map_err(|e| FsError::io(entry.path(), e))?;
        let name = entry.file_name();
        if kind.is_symlink() {
            debug!(path = %entry.path().display(), "skipping symlink");
        } else if kind.is_file() {
            let from = src.child(&name)?;
            let to = dest.child(&name)?;
            if to.real_location()? == from.real_location()? {
                debug!(path = %to, "skipping file that aliases its source");
                continue;
            }
            fs::copy(&from, &to).map_err(|e| FsError::io(to.as_path(), e))?;
            copied += 1;
        } else if kind.is_dir() && recursive {
            if is_hidden(&name) {
                debug!(path = %entry.path().display(), "skipping hidden directory");
            } else {
                subdirs.push(name);
            }
        }
    }
    for name in subdirs {
        copied += copy_tree(&src.child(&name)?, &dest.child(&name)?, true, real_top)?;
    }
    Ok(copied)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with(HIDDEN_MARKER)
}
