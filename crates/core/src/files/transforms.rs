//! Registration transforms in `mri/transforms/`.

use std::path::{Path, PathBuf};

use super::FileField;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const TALAIRACH_LTA: FileField =
    FileField::literal("talairach_lta", "talairach.lta", "Talairach transform");
const TALAIRACH_XFM: FileField = FileField::literal(
    "talairach_xfm",
    "talairach.xfm",
    "Talairach transform (FSL format)",
);
const TALAIRACH_M3Z: FileField = FileField::literal(
    "talairach_m3z",
    "talairach.m3z",
    "Talairach transform (compressed)",
);
const TALAIRACH_AUTO_XFM: FileField = FileField::literal(
    "talairach_auto_xfm",
    "talairach.auto.xfm",
    "Automatic Talairach transform",
);
const CC_UP_LTA: FileField =
    FileField::literal("cc_up_lta", "cc_up.lta", "Corpus callosum transform");

/// Transform files in `mri/transforms/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TransformFiles {
    pub talairach_lta: PathBuf,
    pub talairach_xfm: PathBuf,
    pub talairach_m3z: PathBuf,
    pub talairach_auto_xfm: PathBuf,
    pub cc_up_lta: PathBuf,
}

impl TransformFiles {
    pub const FIELDS: [FileField; 5] = [
        TALAIRACH_LTA,
        TALAIRACH_XFM,
        TALAIRACH_M3Z,
        TALAIRACH_AUTO_XFM,
        CC_UP_LTA,
    ];

    /// Resolves and validates the transform files under `transforms_path`.
    pub fn from_path(transforms_path: &Path) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, transforms_path)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        transforms_path: &Path,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, transforms_path);

        let talairach_lta = checks.file(&TALAIRACH_LTA);
        let talairach_xfm = checks.file(&TALAIRACH_XFM);
        let talairach_m3z = checks.file(&TALAIRACH_M3Z);
        let talairach_auto_xfm = checks.file(&TALAIRACH_AUTO_XFM);
        let cc_up_lta = checks.file(&CC_UP_LTA);

        checks.finish(move || {
            Some(Self {
                talairach_lta,
                talairach_xfm,
                talairach_m3z,
                talairach_auto_xfm,
                cc_up_lta,
            })
        })
    }

    /// Every file in this group with its declaration, in declaration order.
    pub fn files(&self) -> [(FileField, &Path); 5] {
        [
            (TALAIRACH_LTA, &self.talairach_lta),
            (TALAIRACH_XFM, &self.talairach_xfm),
            (TALAIRACH_M3Z, &self.talairach_m3z),
            (TALAIRACH_AUTO_XFM, &self.talairach_auto_xfm),
            (CC_UP_LTA, &self.cc_up_lta),
        ]
    }
}
