//! Per-hemisphere surfaces and overlays in `surf/`.

use std::path::{Path, PathBuf};

use super::FileField;
use crate::hemisphere::Hemisphere;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const ORIG: FileField = FileField::hemispheric("orig", "orig", "Original surface");
const SMOOTHWM: FileField =
    FileField::hemispheric("smoothwm", "smoothwm", "Smoothed white matter surface");
const INFLATED: FileField = FileField::hemispheric("inflated", "inflated", "Inflated surface");
const SPHERE: FileField = FileField::hemispheric("sphere", "sphere", "Spherical surface");
const SPHERE_REG: FileField =
    FileField::hemispheric("sphere_reg", "sphere.reg", "Registered spherical surface");
const WHITE: FileField = FileField::hemispheric("white", "white", "White matter surface");
const PIAL: FileField = FileField::hemispheric("pial", "pial", "Pial surface");
const CURV: FileField = FileField::hemispheric("curv", "curv", "Curvature file");
const SULC: FileField = FileField::hemispheric("sulc", "sulc", "Sulcal depth");
const AREA: FileField = FileField::hemispheric("area", "area", "Surface area");
const VOLUME: FileField = FileField::hemispheric("volume", "volume", "Volume file");
const THICKNESS: FileField =
    FileField::hemispheric("thickness", "thickness", "Cortical thickness");
const W_G_PCT_MGH: FileField =
    FileField::hemispheric("w_g_pct_mgh", "w-g.pct.mgh", "White/gray contrast");
const JACOBIAN_WHITE: FileField = FileField::hemispheric(
    "jacobian_white",
    "jacobian_white",
    "Jacobian on white surface",
);

/// Surface files for one hemisphere in `surf/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SurfaceFiles {
    pub hemisphere: Hemisphere,
    pub orig: PathBuf,
    pub smoothwm: PathBuf,
    pub inflated: PathBuf,
    pub sphere: PathBuf,
    pub sphere_reg: PathBuf,
    pub white: PathBuf,
    pub pial: PathBuf,
    pub curv: PathBuf,
    pub sulc: PathBuf,
    pub area: PathBuf,
    pub volume: PathBuf,
    pub thickness: PathBuf,
    pub w_g_pct_mgh: PathBuf,
    pub jacobian_white: PathBuf,
}

impl SurfaceFiles {
    pub const FIELDS: [FileField; 14] = [
        ORIG,
        SMOOTHWM,
        INFLATED,
        SPHERE,
        SPHERE_REG,
        WHITE,
        PIAL,
        CURV,
        SULC,
        AREA,
        VOLUME,
        THICKNESS,
        W_G_PCT_MGH,
        JACOBIAN_WHITE,
    ];

    /// Resolves and validates the `hemi` surfaces under `surf_path`.
    pub fn from_path(surf_path: &Path, hemi: Hemisphere) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, surf_path, hemi)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        surf_path: &Path,
        hemi: Hemisphere,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, surf_path).for_hemisphere(hemi);

        let orig = checks.file(&ORIG);
        let smoothwm = checks.file(&SMOOTHWM);
        let inflated = checks.file(&INFLATED);
        let sphere = checks.file(&SPHERE);
        let sphere_reg = checks.file(&SPHERE_REG);
        let white = checks.file(&WHITE);
        let pial = checks.file(&PIAL);
        let curv = checks.file(&CURV);
        let sulc = checks.file(&SULC);
        let area = checks.file(&AREA);
        let volume = checks.file(&VOLUME);
        let thickness = checks.file(&THICKNESS);
        let w_g_pct_mgh = checks.file(&W_G_PCT_MGH);
        let jacobian_white = checks.file(&JACOBIAN_WHITE);

        checks.finish(move || {
            Some(Self {
                hemisphere: hemi,
                orig,
                smoothwm,
                inflated,
                sphere,
                sphere_reg,
                white,
                pial,
                curv,
                sulc,
                area,
                volume,
                thickness,
                w_g_pct_mgh,
                jacobian_white,
            })
        })
    }

    pub fn files(&self) -> [(FileField, &Path); 14] {
        [
            (ORIG, &self.orig),
            (SMOOTHWM, &self.smoothwm),
            (INFLATED, &self.inflated),
            (SPHERE, &self.sphere),
            (SPHERE_REG, &self.sphere_reg),
            (WHITE, &self.white),
            (PIAL, &self.pial),
            (CURV, &self.curv),
            (SULC, &self.sulc),
            (AREA, &self.area),
            (VOLUME, &self.volume),
            (THICKNESS, &self.thickness),
            (W_G_PCT_MGH, &self.w_g_pct_mgh),
            (JACOBIAN_WHITE, &self.jacobian_white),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::touch_all;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_prefixes_with_token() {
        let temp = TempDir::new().unwrap();
        touch_all(temp.path(), &SurfaceFiles::FIELDS, Some(Hemisphere::Left));

        let surf = SurfaceFiles::from_path(temp.path(), Hemisphere::Left).unwrap();

        assert_eq!(surf.hemisphere, Hemisphere::Left);
        assert_eq!(surf.orig, temp.path().join("lh.orig"));
        assert_eq!(surf.sphere_reg, temp.path().join("lh.sphere.reg"));
        assert_eq!(surf.w_g_pct_mgh, temp.path().join("lh.w-g.pct.mgh"));
        assert_eq!(surf.jacobian_white, temp.path().join("lh.jacobian_white"));
    }

    #[test]
    fn test_left_and_right_differ_only_by_token() {
        let temp = TempDir::new().unwrap();
        for hemi in Hemisphere::ALL {
            touch_all(temp.path(), &SurfaceFiles::FIELDS, Some(hemi));
        }

        let left = SurfaceFiles::from_path(temp.path(), Hemisphere::Left).unwrap();
        let right = SurfaceFiles::from_path(temp.path(), Hemisphere::Right).unwrap();

        for ((lf, lp), (rf, rp)) in left.files().iter().zip(right.files().iter()) {
            assert_eq!(lf, rf);
            let lname = lp.file_name().unwrap().to_str().unwrap();
            let rname = rp.file_name().unwrap().to_str().unwrap();
            assert_eq!(lname.strip_prefix("lh."), rname.strip_prefix("rh."));
            assert_eq!(lp.parent(), rp.parent());
        }
    }

    #[test]
    fn test_other_hemisphere_files_do_not_satisfy() {
        let temp = TempDir::new().unwrap();
        touch_all(temp.path(), &SurfaceFiles::FIELDS, Some(Hemisphere::Left));

        let errors = SurfaceFiles::from_path(temp.path(), Hemisphere::Right).unwrap_err();

        assert_eq!(errors.len(), 14);
        assert!(errors
            .iter()
            .all(|e| e.path.file_name().unwrap().to_str().unwrap().starts_with("rh.")));
    }
}
