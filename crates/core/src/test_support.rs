//! Fixtures shared by the unit tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::files::{
    FileField, LabelFiles, MriFiles, ScriptFiles, StatsFiles, SurfaceFiles, TransformFiles,
};
use crate::hemisphere::Hemisphere;
use crate::paths::subject::SubjectPaths;
use crate::probe::{LocalFs, PathKind, PathProbe};

/// Creates `dir` and an empty file for every field.
pub(crate) fn touch_all(dir: &Path, fields: &[FileField], hemisphere: Option<Hemisphere>) {
    fs::create_dir_all(dir).unwrap();
    for field in fields {
        fs::write(field.path_in(dir, hemisphere), b"").unwrap();
    }
}

/// Creates a complete `recon-all` output tree for `subject_id` and returns its path.
///
/// The singular `script/` directory is not created.
pub(crate) fn create_subject_tree(subjects_dir: &Path, subject_id: &str) -> PathBuf {
    let root = subjects_dir.join(subject_id);

    touch_all(&root.join(SubjectPaths::mri_dir()), &MriFiles::FIELDS, None);
    touch_all(
        &root.join(SubjectPaths::transforms_dir()),
        &TransformFiles::FIELDS,
        None,
    );
    for hemi in Hemisphere::ALL {
        touch_all(&root.join(SubjectPaths::surf_dir()), &SurfaceFiles::FIELDS, Some(hemi));
        touch_all(&root.join(SubjectPaths::label_dir()), &LabelFiles::FIELDS, Some(hemi));
    }
    touch_all(&root.join(SubjectPaths::stats_dir()), &StatsFiles::FIELDS, None);
    touch_all(&root.join(SubjectPaths::scripts_dir()), &ScriptFiles::FIELDS, None);

    root
}

/// Delegates to [`LocalFs`] and records every probed path.
#[derive(Debug, Default)]
pub(crate) struct RecordingProbe {
    probed: Mutex<Vec<PathBuf>>,
}

impl RecordingProbe {
    pub(crate) fn probed(&self) -> Vec<PathBuf> {
        self.probed.lock().unwrap().clone()
    }
}

impl PathProbe for RecordingProbe {
    fn kind(&self, path: &Path) -> PathKind {
        self.probed.lock().unwrap().push(path.to_path_buf());
        LocalFs.kind(path)
    }
}

/// Answers with a fixed kind for chosen paths and asks [`LocalFs`] about the rest.
#[derive(Debug, Default)]
pub(crate) struct StubProbe {
    kinds: HashMap<PathBuf, PathKind>,
}

impl StubProbe {
    pub(crate) fn with(mut self, path: &Path, kind: PathKind) -> Self {
        self.kinds.insert(path.to_path_buf(), kind);
        self
    }
}

impl PathProbe for StubProbe {
    fn kind(&self, path: &Path) -> PathKind {
        match self.kinds.get(path) {
            Some(kind) => kind.clone(),
            None => LocalFs.kind(path),
        }
    }
}
