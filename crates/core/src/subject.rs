//! FreeSurfer subject aggregate.
//!
//! A [`FreeSurferSubject`] is the validated view of one subject directory produced by
//! `recon-all`. It is built in a single pass by [`FreeSurferSubject::from_subjects_dir`]:
//!
//! 1. The subject path `subjects_dir/subject_id` is computed and must exist. If it does not,
//!    resolution stops with [`SubjectError::NotFound`] before any other path is inspected.
//! 2. Every file group is resolved from its subdirectory and validates its own files.
//! 3. All failures from all groups are merged into one [`SubjectError::Validation`] report,
//!    located by dotted field path (`mri.wm`, `right_label.aparc_annot`).
//!
//! Construction either returns the whole aggregate or fails; no partial subject is ever
//! returned.
//!
//! # Freshness
//!
//! Existence is checked once, at construction. A file removed afterwards is not noticed, and
//! nothing prevents the tree from changing between validation and a consumer opening a file.

use std::path::{Path, PathBuf};

use neurorm_types::SubjectId;

use crate::files::{FileField, LabelFiles, MriFiles, ScriptFiles, StatsFiles, SurfaceFiles};
use crate::hemisphere::Hemisphere;
use crate::paths::subject::SubjectPaths;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::FileChecks;
use crate::{SubjectError, SubjectResult};

/// Complete FreeSurfer subject directory structure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FreeSurferSubject {
    pub subject_id: SubjectId,
    pub subject_path: PathBuf,

    pub mri: MriFiles,

    pub left_hemisphere: SurfaceFiles,
    pub right_hemisphere: SurfaceFiles,

    pub stats: StatsFiles,

    pub scripts: ScriptFiles,

    pub left_label: LabelFiles,
    pub right_label: LabelFiles,
}

/// One required file of a subject, located within the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFile<'a> {
    /// Dotted location, e.g. `mri.transforms.cc_up_lta`.
    pub location: String,
    pub field: FileField,
    pub path: &'a Path,
}

impl FreeSurferSubject {
    /// Resolves and validates `subject_id` beneath `subjects_dir`.
    ///
    /// # Errors
    ///
    /// - [`SubjectError::InvalidInput`] if `subject_id` is not a single path component.
    /// - [`SubjectError::NotFound`] if `subjects_dir/subject_id` does not exist.
    /// - [`SubjectError::Validation`] listing every missing or mistyped path otherwise.
    pub fn from_subjects_dir(subjects_dir: &Path, subject_id: &str) -> SubjectResult<Self> {
        Self::from_subjects_dir_with(&LocalFs, subjects_dir, subject_id)
    }

    pub fn from_subjects_dir_with<P: PathProbe + ?Sized>(
        probe: &P,
        subjects_dir: &Path,
        subject_id: &str,
    ) -> SubjectResult<Self> {
        let subject_id = SubjectId::new(subject_id)?;
        let subject_path = subjects_dir.join(&subject_id);

        tracing::debug!(
            subject = %subject_id,
            path = %subject_path.display(),
            "resolving subject"
        );

        if !probe.kind(&subject_path).exists() {
            return Err(SubjectError::NotFound { path: subject_path });
        }

        let resolved_path = subject_path.clone();
        let mut checks = FileChecks::new(probe, &subject_path);
        checks.directory("subject_path", &subject_path);

        let surf_dir = subject_path.join(SubjectPaths::surf_dir());
        let label_dir = subject_path.join(SubjectPaths::label_dir());

        let mri = checks.nested(
            "mri",
            MriFiles::from_path_with(probe, &subject_path.join(SubjectPaths::mri_dir())),
        );
        let left_hemisphere = checks.nested(
            "left_hemisphere",
            SurfaceFiles::from_path_with(probe, &surf_dir, Hemisphere::Left),
        );
        let right_hemisphere = checks.nested(
            "right_hemisphere",
            SurfaceFiles::from_path_with(probe, &surf_dir, Hemisphere::Right),
        );
        let stats = checks.nested(
            "stats",
            StatsFiles::from_path_with(probe, &subject_path.join(SubjectPaths::stats_dir())),
        );
        let scripts = checks.nested(
            "scripts",
            ScriptFiles::from_path_with(probe, &subject_path.join(SubjectPaths::scripts_dir())),
        );
        let left_label = checks.nested(
            "left_label",
            LabelFiles::from_path_with(probe, &label_dir, Hemisphere::Left),
        );
        let right_label = checks.nested(
            "right_label",
            LabelFiles::from_path_with(probe, &label_dir, Hemisphere::Right),
        );

        let subject = checks
            .finish(move || {
                Some(Self {
                    subject_id,
                    subject_path: resolved_path,
                    mri: mri?,
                    left_hemisphere: left_hemisphere?,
                    right_hemisphere: right_hemisphere?,
                    stats: stats?,
                    scripts: scripts?,
                    left_label: left_label?,
                    right_label: right_label?,
                })
            })
            .map_err(|errors| {
                tracing::warn!(
                    path = %subject_path.display(),
                    failures = errors.len(),
                    "subject failed validation"
                );
                SubjectError::Validation(errors)
            })?;

        tracing::debug!(subject = %subject.subject_id, files = subject.file_count(), "subject resolved");
        Ok(subject)
    }

    /// Whether `recon-all` has marked this subject as finished.
    ///
    /// Checks `script/recon-all.done` (singular `script`) afresh on every call. This is not the
    /// `scripts/recon-all.done` file validated as [`ScriptFiles::recon_all_status`].
    pub fn recon_all_done(&self) -> bool {
        self.recon_all_done_with(&LocalFs)
    }

    /// [`FreeSurferSubject::recon_all_done`] through `probe`, for subjects resolved with
    /// [`FreeSurferSubject::from_subjects_dir_with`].
    pub fn recon_all_done_with<P: PathProbe + ?Sized>(&self, probe: &P) -> bool {
        probe
            .kind(&self.subject_path.join(SubjectPaths::recon_all_done_marker()))
            .exists()
    }

    /// Returns the hemisphere's surface files.
    pub fn surfaces(&self, hemi: Hemisphere) -> &SurfaceFiles {
        match hemi {
            Hemisphere::Left => &self.left_hemisphere,
            Hemisphere::Right => &self.right_hemisphere,
        }
    }

    /// Returns the hemisphere's annotation files.
    pub fn labels(&self, hemi: Hemisphere) -> &LabelFiles {
        match hemi {
            Hemisphere::Left => &self.left_label,
            Hemisphere::Right => &self.right_label,
        }
    }

    /// Every required file of the subject with its dotted location.
    pub fn files(&self) -> Vec<SubjectFile<'_>> {
        fn located<'a>(
            prefix: &str,
            files: impl IntoIterator<Item = (FileField, &'a Path)>,
        ) -> impl Iterator<Item = SubjectFile<'a>> {
            let prefix = prefix.to_owned();
            files.into_iter().map(move |(field, path)| SubjectFile {
                location: format!("{prefix}.{}", field.field),
                field,
                path,
            })
        }

        located("mri", self.mri.files())
            .chain(located("mri.transforms", self.mri.transforms.files()))
            .chain(located("left_hemisphere", self.left_hemisphere.files()))
            .chain(located("right_hemisphere", self.right_hemisphere.files()))
            .chain(located("left_label", self.left_label.files()))
            .chain(located("right_label", self.right_label.files()))
            .chain(located("stats", self.stats.files()))
            .chain(located("scripts", self.scripts.files()))
            .collect()
    }

    /// Number of required files validated for a subject.
    pub fn file_count(&self) -> usize {
        self.files().len()
    }
}
