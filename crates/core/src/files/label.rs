//! Per-hemisphere cortical parcellations in `label/`.

use std::path::{Path, PathBuf};

use super::FileField;
use crate::hemisphere::Hemisphere;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const APARC_ANNOT: FileField =
    FileField::hemispheric("aparc_annot", "aparc.annot", "Desikan-Killiany parcellation");
const APARC_A2009S_ANNOT: FileField = FileField::hemispheric(
    "aparc_a2009s_annot",
    "aparc.a2009s.annot",
    "Destrieux parcellation",
);
const APARC_DKTATLAS_ANNOT: FileField = FileField::hemispheric(
    "aparc_dktatlas_annot",
    "aparc.DKTatlas.annot",
    "DKT parcellation",
);
const BA_EXVIVO_ANNOT: FileField =
    FileField::hemispheric("ba_exvivo_annot", "BA_exvivo.annot", "Brodmann areas");
const BA_EXVIVO_THRESH_ANNOT: FileField = FileField::hemispheric(
    "ba_exvivo_thresh_annot",
    "BA_exvivo.thresh.annot",
    "Thresholded Brodmann areas",
);

/// Annotation files for one hemisphere in `label/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LabelFiles {
    pub hemisphere: Hemisphere,
    pub aparc_annot: PathBuf,
    pub aparc_a2009s_annot: PathBuf,
    pub aparc_dktatlas_annot: PathBuf,
    pub ba_exvivo_annot: PathBuf,
    pub ba_exvivo_thresh_annot: PathBuf,
}

impl LabelFiles {
    pub const FIELDS: [FileField; 5] = [
        APARC_ANNOT,
        APARC_A2009S_ANNOT,
        APARC_DKTATLAS_ANNOT,
        BA_EXVIVO_ANNOT,
        BA_EXVIVO_THRESH_ANNOT,
    ];

    pub fn from_path(label_path: &Path, hemi: Hemisphere) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, label_path, hemi)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        label_path: &Path,
        hemi: Hemisphere,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, label_path).for_hemisphere(hemi);

        let aparc_annot = checks.file(&APARC_ANNOT);
        let aparc_a2009s_annot = checks.file(&APARC_A2009S_ANNOT);
        let aparc_dktatlas_annot = checks.file(&APARC_DKTATLAS_ANNOT);
        let ba_exvivo_annot = checks.file(&BA_EXVIVO_ANNOT);
        let ba_exvivo_thresh_annot = checks.file(&BA_EXVIVO_THRESH_ANNOT);

        checks.finish(move || {
            Some(Self {
                hemisphere: hemi,
                aparc_annot,
                aparc_a2009s_annot,
                aparc_dktatlas_annot,
                ba_exvivo_annot,
                ba_exvivo_thresh_annot,
            })
        })
    }

    pub fn files(&self) -> [(FileField, &Path); 5] {
        [
            (APARC_ANNOT, &self.aparc_annot),
            (APARC_A2009S_ANNOT, &self.aparc_a2009s_annot),
            (APARC_DKTATLAS_ANNOT, &self.aparc_dktatlas_annot),
            (BA_EXVIVO_ANNOT, &self.ba_exvivo_annot),
            (BA_EXVIVO_THRESH_ANNOT, &self.ba_exvivo_thresh_annot),
        ]
    }
}
