//! Filesystem metadata probing.
//!
//! Every existence and type check made while resolving a subject goes through the
//! [`PathProbe`] trait. The core never opens files; it only asks what kind of entry
//! a path refers to.
//!
//! [`LocalFs`] is the implementation used by default. Tests substitute their own
//! probe to observe which paths were inspected.

use std::io::ErrorKind;
use std::path::Path;

/// What a path referred to at the moment it was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file (after following symlinks).
    File,
    /// A directory (after following symlinks).
    Directory,
    /// Something else: a device, fifo or socket.
    Other,
    /// The metadata could not be read for a reason other than absence.
    Inaccessible(String),
}

impl PathKind {
    /// Returns `true` unless the path is known to be absent.
    ///
    /// An inaccessible path is treated as existing: absence was not proven.
    pub fn exists(&self) -> bool {
        !matches!(self, PathKind::Missing)
    }
}

/// Read-only view of filesystem metadata.
pub trait PathProbe {
    /// Reports the kind of entry at `path`.
    fn kind(&self, path: &Path) -> PathKind;
}

/// Probes the local filesystem via `std::fs::metadata`.
///
/// A path is [`PathKind::Missing`] when it cannot name an entry: nothing is there, an
/// ancestor is not a directory, or the path is a symlink whose target cannot be resolved
/// (dangling or looping). Any other failure is [`PathKind::Inaccessible`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn kind(&self, path: &Path) -> PathKind {
        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => PathKind::File,
            Ok(metadata) if metadata.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::Other,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                PathKind::Missing
            }
            Err(_) if is_unresolvable_link(path) => PathKind::Missing,
            Err(e) => PathKind::Inaccessible(e.to_string()),
        }
    }
}

/// `path` itself is a symlink, so the failure came from following it (e.g. `ELOOP`).
fn is_unresolvable_link(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}

impl<P: PathProbe + ?Sized> PathProbe for &P {
    fn kind(&self, path: &Path) -> PathKind {
        (**self).kind(path)
    }
}
