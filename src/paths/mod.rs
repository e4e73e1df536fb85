pub mod guard;

pub use guard::{RootGuard, SitePath};

use crate::errors::{FsError, FsResult};
use std::path::{Component, Path, PathBuf};

/// Joins two or more segments left to right with the native separator.
///
/// Segments after the first must be relative: `PathBuf::push` would otherwise
/// discard everything accumulated so far. Empty segments contribute nothing.
pub fn join<S: AsRef<Path>>(segments: &[S]) -> FsResult<PathBuf> {
    if segments.len() < 2 {
        return Err(FsError::InvalidPath(format!(
            "join needs at least two segments, got {}",
            segments.len()
        )));
    }
    let mut combined = PathBuf::new();
    for (i, seg) in segments.iter().enumerate() {
        let seg = seg.as_ref();
        if seg.as_os_str().to_string_lossy().contains('\0') {
            return Err(FsError::InvalidPath(format!("segment {i} contains NUL")));
        }
        if seg.as_os_str().is_empty() {
            continue;
        }
        if i > 0 && is_anchored(seg) {
            return Err(FsError::InvalidPath(format!(
                "segment {i} is absolute: {}",
                seg.display()
            )));
        }
        combined.push(seg);
    }
    Ok(combined)
}

fn is_anchored(p: &Path) -> bool {
    p.has_root() || matches!(p.components().next(), Some(Component::Prefix(_)))
}

/// Lexically resolves `.` and `..` without touching the filesystem.
///
/// `..` never climbs above a root or drive prefix; on a relative path a
/// leading `..` that has nothing to cancel is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(s) => out.push(s),
        }
    }
    out
}
