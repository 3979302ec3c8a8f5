//! Subject directory on-disk paths.
//!
//! This module defines the relative directory structure of a single FreeSurfer subject as
//! written by `recon-all`.
//!
//! It contains **no I/O**. Its sole responsibility is to provide typed, canonical paths so
//! that directory names are defined in exactly one place.
//!
//! # Path Structure
//!
//! ```text
//! <subject_id>/
//!     mri/
//!         transforms/
//!     surf/
//!     label/
//!     stats/
//!     scripts/
//!     script/
//!         recon-all.done
//! ```
//!
//! The `script/recon-all.done` marker is distinct from `scripts/recon-all.done`. Only the
//! former is consulted by [`crate::FreeSurferSubject::recon_all_done`].

use std::path::PathBuf;

use crate::constants::RECON_ALL_DONE_FILENAME;

/// MRI volume directory.
#[derive(Debug, Clone, Copy)]
pub struct MriDir;

impl MriDir {
    pub const NAME: &'static str = "mri";
}

/// Registration transforms, nested under [`MriDir`].
#[derive(Debug, Clone, Copy)]
pub struct TransformsDir;

impl TransformsDir {
    pub const NAME: &'static str = "transforms";
}

/// Surface directory, shared by both hemispheres.
#[derive(Debug, Clone, Copy)]
pub struct SurfDir;

impl SurfDir {
    pub const NAME: &'static str = "surf";
}

/// Parcellation and annotation directory, shared by both hemispheres.
#[derive(Debug, Clone, Copy)]
pub struct LabelDir;

impl LabelDir {
    pub const NAME: &'static str = "label";
}

/// Statistics directory.
#[derive(Debug, Clone, Copy)]
pub struct StatsDir;

impl StatsDir {
    pub const NAME: &'static str = "stats";
}

/// Log and status directory.
#[derive(Debug, Clone, Copy)]
pub struct ScriptsDir;

impl ScriptsDir {
    pub const NAME: &'static str = "scripts";
}

/// Singular `script` directory holding the completion marker checked by the status query.
#[derive(Debug, Clone, Copy)]
pub struct ScriptDir;

impl ScriptDir {
    pub const NAME: &'static str = "script";
}

/// Relative on-disk paths for one subject.
///
/// The paths are relative to the subject directory and must be joined onto it before
/// filesystem access.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectPaths;

impl SubjectPaths {
    /// Returns the relative path to `mri/`.
    pub fn mri_dir() -> PathBuf {
        PathBuf::from(MriDir::NAME)
    }

    /// Returns the relative path to `mri/transforms/`.
    pub fn transforms_dir() -> PathBuf {
        Self::mri_dir().join(TransformsDir::NAME)
    }

    /// Returns the relative path to `surf/`.
    pub fn surf_dir() -> PathBuf {
        PathBuf::from(SurfDir::NAME)
    }

    /// Returns the relative path to `label/`.
    pub fn label_dir() -> PathBuf {
        PathBuf::from(LabelDir::NAME)
    }

    /// Returns the relative path to `stats/`.
    pub fn stats_dir() -> PathBuf {
        PathBuf::from(StatsDir::NAME)
    }

    /// Returns the relative path to `scripts/`.
    pub fn scripts_dir() -> PathBuf {
        PathBuf::from(ScriptsDir::NAME)
    }

    /// Returns the relative path to `script/recon-all.done`.
    pub fn recon_all_done_marker() -> PathBuf {
        PathBuf::from(ScriptDir::NAME).join(RECON_ALL_DONE_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_constants() {
        assert_eq!(MriDir::NAME, "mri");
        assert_eq!(TransformsDir::NAME, "transforms");
        assert_eq!(SurfDir::NAME, "surf");
        assert_eq!(LabelDir::NAME, "label");
        assert_eq!(StatsDir::NAME, "stats");
        assert_eq!(ScriptsDir::NAME, "scripts");
        assert_eq!(ScriptDir::NAME, "script");
    }

    #[test]
    fn test_subject_relative_paths() {
        assert_eq!(SubjectPaths::mri_dir(), PathBuf::from("mri"));
        assert_eq!(SubjectPaths::transforms_dir(), PathBuf::from("mri/transforms"));
        assert_eq!(SubjectPaths::surf_dir(), PathBuf::from("surf"));
        assert_eq!(SubjectPaths::label_dir(), PathBuf::from("label"));
        assert_eq!(SubjectPaths::stats_dir(), PathBuf::from("stats"));
        assert_eq!(SubjectPaths::scripts_dir(), PathBuf::from("scripts"));
    }

    #[test]
    fn test_done_marker_uses_singular_script_dir() {
        let marker = SubjectPaths::recon_all_done_marker();
        assert_eq!(marker, PathBuf::from("script/recon-all.done"));
        assert_ne!(marker, SubjectPaths::scripts_dir().join(RECON_ALL_DONE_FILENAME));
    }

    #[test]
    fn test_paths_are_relative() {
        for path in [
            SubjectPaths::mri_dir(),
            SubjectPaths::transforms_dir(),
            SubjectPaths::surf_dir(),
            SubjectPaths::label_dir(),
            SubjectPaths::stats_dir(),
            SubjectPaths::scripts_dir(),
            SubjectPaths::recon_all_done_marker(),
        ] {
            assert!(path.is_relative(), "{} should be relative", path.display());
        }
    }

    #[test]
    fn test_caller_can_join_with_subject_root() {
        let subject_root = std::path::Path::new("/Applications/freesurfer/subjects/bert");
        assert_eq!(
            subject_root.join(SubjectPaths::transforms_dir()),
            PathBuf::from("/Applications/freesurfer/subjects/bert/mri/transforms")
        );
        assert_eq!(
            subject_root.join(SubjectPaths::recon_all_done_marker()),
            PathBuf::from("/Applications/freesurfer/subjects/bert/script/recon-all.done")
        );
    }
}
