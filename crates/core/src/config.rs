//! Core runtime configuration.
//!
//! The subjects directory should be resolved once at process startup and then passed into the
//! core. Nothing in this crate reads process-wide environment variables; callers read
//! `SUBJECTS_DIR` themselves and hand the value to [`resolve_subjects_dir`].

use std::fs;
use std::path::{Path, PathBuf};

use neurorm_types::SubjectId;

use crate::constants::SUBJECTS_DIR_ENV;
use crate::paths::subject::MriDir;
use crate::subject::FreeSurferSubject;
use crate::{SubjectError, SubjectResult};

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct SubjectsConfig {
    subjects_dir: PathBuf,
}

impl SubjectsConfig {
    /// Create a new `SubjectsConfig`. The subjects directory must already exist.
    pub fn new(subjects_dir: PathBuf) -> SubjectResult<Self> {
        if !subjects_dir.is_dir() {
            return Err(SubjectError::InvalidInput(format!(
                "subjects directory is not a directory: {}",
                subjects_dir.display()
            )));
        }

        Ok(Self { subjects_dir })
    }

    pub fn subjects_dir(&self) -> &Path {
        &self.subjects_dir
    }

    /// Resolves one subject beneath the configured directory.
    pub fn subject(&self, subject_id: &str) -> SubjectResult<FreeSurferSubject> {
        FreeSurferSubject::from_subjects_dir(&self.subjects_dir, subject_id)
    }

    /// Lists the subjects beneath the configured directory.
    ///
    /// A subject is any directory entry that is itself a directory containing `mri/` and whose
    /// name is a valid [`SubjectId`]. Entries that cannot be read are skipped with a warning.
    /// The result is sorted.
    pub fn list_subjects(&self) -> SubjectResult<Vec<SubjectId>> {
        let mut subjects = Vec::new();

        for entry in fs::read_dir(&self.subjects_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry in {}: {}", self.subjects_dir.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.join(MriDir::NAME).is_dir() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("skipping non-UTF-8 subject directory: {}", path.display());
                continue;
            };

            match SubjectId::new(name) {
                Ok(id) => subjects.push(id),
                Err(e) => tracing::warn!("skipping subject directory {}: {}", path.display(), e),
            }
        }

        subjects.sort();
        Ok(subjects)
    }
}

/// Resolve the subjects directory without reading environment variables.
///
/// `override_dir` (for example a `--subjects-dir` flag) wins. Otherwise a non-blank
/// `env_value` (the caller's reading of `SUBJECTS_DIR`) is used. Either way the result must
/// be an existing directory.
pub fn resolve_subjects_dir(
    override_dir: Option<PathBuf>,
    env_value: Option<String>,
) -> SubjectResult<SubjectsConfig> {
    let from_env = env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    match override_dir.or(from_env) {
        Some(dir) => SubjectsConfig::new(dir),
        None => Err(SubjectError::InvalidInput(format!(
            "no subjects directory given and {SUBJECTS_DIR_ENV} is not set"
        ))),
    }
}
