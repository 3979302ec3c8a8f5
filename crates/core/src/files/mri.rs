//! Volumes in `mri/`.

use std::path::{Path, PathBuf};

use super::{FileField, TransformFiles};
use crate::paths::subject::TransformsDir;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const ORIG: FileField = FileField::literal("orig", "orig.mgz", "Original input volume");
const RAWAVG: FileField = FileField::literal("rawavg", "rawavg.mgz", "Raw average volume");
const T1: FileField = FileField::literal("t1", "T1.mgz", "T1-weighted volume");
const BRAIN: FileField = FileField::literal("brain", "brain.mgz", "Brain-extracted volume");
const BRAINMASK: FileField = FileField::literal("brainmask", "brainmask.mgz", "Brain mask");
const FILLED: FileField = FileField::literal("filled", "filled.mgz", "Filled volume");
const WM: FileField = FileField::literal("wm", "wm.mgz", "White matter volume");
const ASEG: FileField = FileField::literal("aseg", "aseg.mgz", "Subcortical segmentation");
const NORM: FileField = FileField::literal("norm", "norm.mgz", "Normalized volume");
const ORIG_NU: FileField = FileField::literal(
    "orig_nu",
    "orig_nu.mgz",
    "Non-uniformity corrected original",
);
const NU: FileField = FileField::literal("nu", "nu.mgz", "Non-uniformity corrected volume");
const APARC_ASEG: FileField = FileField::literal(
    "aparc_aseg",
    "aparc+aseg.mgz",
    "Parcellation + subcortical segmentation",
);
const APARC_A2009S_ASEG: FileField = FileField::literal(
    "aparc_a2009s_aseg",
    "aparc.a2009s+aseg.mgz",
    "Destrieux atlas parcellation + subcortical",
);
const WMPARC: FileField =
    FileField::literal("wmparc", "wmparc.mgz", "White matter parcellation");
const RIBBON: FileField = FileField::literal("ribbon", "ribbon.mgz", "Cortical ribbon mask");

/// MRI volume files in `mri/`, plus the transforms beneath it.
///
/// Owns its [`TransformFiles`]; failures inside `mri/transforms/` are reported under the
/// `transforms.` prefix.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MriFiles {
    pub orig: PathBuf,
    pub rawavg: PathBuf,
    pub t1: PathBuf,
    pub brain: PathBuf,
    pub brainmask: PathBuf,
    pub filled: PathBuf,
    pub wm: PathBuf,
    pub aseg: PathBuf,
    pub norm: PathBuf,
    pub orig_nu: PathBuf,
    pub nu: PathBuf,
    pub aparc_aseg: PathBuf,
    pub aparc_a2009s_aseg: PathBuf,
    pub wmparc: PathBuf,
    pub ribbon: PathBuf,
    pub transforms: TransformFiles,
}

impl MriFiles {
    pub const FIELDS: [FileField; 15] = [
        ORIG,
        RAWAVG,
        T1,
        BRAIN,
        BRAINMASK,
        FILLED,
        WM,
        ASEG,
        NORM,
        ORIG_NU,
        NU,
        APARC_ASEG,
        APARC_A2009S_ASEG,
        WMPARC,
        RIBBON,
    ];

    /// Resolves and validates `path` and its `transforms/` subdirectory.
    pub fn from_path(path: &Path) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, path)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        path: &Path,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, path);

        let orig = checks.file(&ORIG);
        let rawavg = checks.file(&RAWAVG);
        let t1 = checks.file(&T1);
        let brain = checks.file(&BRAIN);
        let brainmask = checks.file(&BRAINMASK);
        let filled = checks.file(&FILLED);
        let wm = checks.file(&WM);
        let aseg = checks.file(&ASEG);
        let norm = checks.file(&NORM);
        let orig_nu = checks.file(&ORIG_NU);
        let nu = checks.file(&NU);
        let aparc_aseg = checks.file(&APARC_ASEG);
        let aparc_a2009s_aseg = checks.file(&APARC_A2009S_ASEG);
        let wmparc = checks.file(&WMPARC);
        let ribbon = checks.file(&RIBBON);
        let transforms = checks.nested(
            "transforms",
            TransformFiles::from_path_with(probe, &path.join(TransformsDir::NAME)),
        );

        checks.finish(move || {
            Some(Self {
                orig,
                rawavg,
                t1,
                brain,
                brainmask,
                filled,
                wm,
                aseg,
                norm,
                orig_nu,
                nu,
                aparc_aseg,
                aparc_a2009s_aseg,
                wmparc,
                ribbon,
                transforms: transforms?,
            })
        })
    }

    /// The volumes directly in `mri/`, in declaration order. See [`MriFiles::transforms`] for the
    /// nested group.
    pub fn files(&self) -> [(FileField, &Path); 15] {
        [
            (ORIG, &self.orig),
            (RAWAVG, &self.rawavg),
            (T1, &self.t1),
            (BRAIN, &self.brain),
            (BRAINMASK, &self.brainmask),
            (FILLED, &self.filled),
            (WM, &self.wm),
            (ASEG, &self.aseg),
            (NORM, &self.norm),
            (ORIG_NU, &self.orig_nu),
            (NU, &self.nu),
            (APARC_ASEG, &self.aparc_aseg),
            (APARC_A2009S_ASEG, &self.aparc_a2009s_aseg),
            (WMPARC, &self.wmparc),
            (RIBBON, &self.ribbon),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::touch_all;
    use std::fs;
    use tempfile::TempDir;

    fn create_mri_dir(root: &Path) {
        touch_all(root, &MriFiles::FIELDS, None);
        touch_all(&root.join("transforms"), &TransformFiles::FIELDS, None);
    }

    #[test]
    fn test_from_path_resolves_volumes_and_transforms() {
        let temp = TempDir::new().unwrap();
        create_mri_dir(temp.path());

        let mri = MriFiles::from_path(temp.path()).expect("complete mri directory");

        assert_eq!(mri.t1, temp.path().join("T1.mgz"));
        assert_eq!(mri.aparc_aseg, temp.path().join("aparc+aseg.mgz"));
        assert_eq!(mri.aparc_a2009s_aseg, temp.path().join("aparc.a2009s+aseg.mgz"));
        assert_eq!(mri.orig_nu, temp.path().join("orig_nu.mgz"));
        assert_eq!(mri.ribbon, temp.path().join("ribbon.mgz"));
        assert_eq!(
            mri.transforms.talairach_auto_xfm,
            temp.path().join("transforms").join("talairach.auto.xfm")
        );
    }

    #[test]
    fn test_missing_volume_reported_alone() {
        let temp = TempDir::new().unwrap();
        create_mri_dir(temp.path());
        fs::remove_file(temp.path().join("wm.mgz")).unwrap();

        let errors = MriFiles::from_path(temp.path()).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["wm"]);
    }

    #[test]
    fn test_nested_transform_failures_are_prefixed_and_merged() {
        let temp = TempDir::new().unwrap();
        create_mri_dir(temp.path());
        fs::remove_file(temp.path().join("nu.mgz")).unwrap();
        fs::remove_file(temp.path().join("transforms").join("cc_up.lta")).unwrap();
        fs::remove_file(temp.path().join("transforms").join("talairach.m3z")).unwrap();

        let errors = MriFiles::from_path(temp.path()).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains_field("nu"));
        assert!(errors.contains_field("transforms.cc_up_lta"));
        assert!(errors.contains_field("transforms.talairach_m3z"));
    }

    #[test]
    fn test_missing_transforms_dir_reports_all_five() {
        let temp = TempDir::new().unwrap();
        touch_all(temp.path(), &MriFiles::FIELDS, None);

        let errors = MriFiles::from_path(temp.path()).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert!(errors.fields().all(|f| f.starts_with("transforms.")));
    }

    #[test]
    fn test_serialises_field_names() {
        let temp = TempDir::new().unwrap();
        create_mri_dir(temp.path());
        let mri = MriFiles::from_path(temp.path()).unwrap();

        let json = serde_json::to_value(&mri).unwrap();
        assert_eq!(json["t1"], serde_json::json!(temp.path().join("T1.mgz")));
        assert!(json["transforms"].get("cc_up_lta").is_some());
    }
}
