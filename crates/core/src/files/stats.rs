//! Summary statistics in `stats/`.
//!
//! Hemisphere-specific tables are declared as separate `lh_`/`rh_` fields rather than
//! parameterised by [`crate::Hemisphere`].

use std::path::{Path, PathBuf};

use super::FileField;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const ASEG_STATS: FileField = FileField::literal(
    "aseg_stats",
    "aseg.stats",
    "Subcortical segmentation statistics",
);
const LH_APARC_STATS: FileField = FileField::literal(
    "lh_aparc_stats",
    "lh.aparc.stats",
    "Left hemisphere parcellation statistics",
);
const RH_APARC_STATS: FileField = FileField::literal(
    "rh_aparc_stats",
    "rh.aparc.stats",
    "Right hemisphere parcellation statistics",
);
const LH_APARC_A2009S_STATS: FileField = FileField::literal(
    "lh_aparc_a2009s_stats",
    "lh.aparc.a2009s.stats",
    "Left hemisphere Destrieux statistics",
);
const RH_APARC_A2009S_STATS: FileField = FileField::literal(
    "rh_aparc_a2009s_stats",
    "rh.aparc.a2009s.stats",
    "Right hemisphere Destrieux statistics",
);
const LH_APARC_DKTATLAS_STATS: FileField = FileField::literal(
    "lh_aparc_dktatlas_stats",
    "lh.aparc.DKTatlas.stats",
    "Left hemisphere DKT statistics",
);
const RH_APARC_DKTATLAS_STATS: FileField = FileField::literal(
    "rh_aparc_dktatlas_stats",
    "rh.aparc.DKTatlas.stats",
    "Right hemisphere DKT statistics",
);
const LH_CURV_STATS: FileField = FileField::literal(
    "lh_curv_stats",
    "lh.curv.stats",
    "Left hemisphere curvature statistics",
);
const RH_CURV_STATS: FileField = FileField::literal(
    "rh_curv_stats",
    "rh.curv.stats",
    "Right hemisphere curvature statistics",
);
const LH_W_G_PCT_STATS: FileField = FileField::literal(
    "lh_w_g_pct_stats",
    "lh.w-g.pct.stats",
    "Left hemisphere white/gray contrast statistics",
);
const RH_W_G_PCT_STATS: FileField = FileField::literal(
    "rh_w_g_pct_stats",
    "rh.w-g.pct.stats",
    "Right hemisphere white/gray contrast statistics",
);
const WMPARC_STATS: FileField = FileField::literal(
    "wmparc_stats",
    "wmparc.stats",
    "White matter parcellation statistics",
);

/// Statistics files in `stats/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatsFiles {
    pub aseg_stats: PathBuf,
    pub lh_aparc_stats: PathBuf,
    pub rh_aparc_stats: PathBuf,
    pub lh_aparc_a2009s_stats: PathBuf,
    pub rh_aparc_a2009s_stats: PathBuf,
    pub lh_aparc_dktatlas_stats: PathBuf,
    pub rh_aparc_dktatlas_stats: PathBuf,
    pub lh_curv_stats: PathBuf,
    pub rh_curv_stats: PathBuf,
    pub lh_w_g_pct_stats: PathBuf,
    pub rh_w_g_pct_stats: PathBuf,
    pub wmparc_stats: PathBuf,
}

impl StatsFiles {
    pub const FIELDS: [FileField; 12] = [
        ASEG_STATS,
        LH_APARC_STATS,
        RH_APARC_STATS,
        LH_APARC_A2009S_STATS,
        RH_APARC_A2009S_STATS,
        LH_APARC_DKTATLAS_STATS,
        RH_APARC_DKTATLAS_STATS,
        LH_CURV_STATS,
        RH_CURV_STATS,
        LH_W_G_PCT_STATS,
        RH_W_G_PCT_STATS,
        WMPARC_STATS,
    ];

    pub fn from_path(stats_path: &Path) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, stats_path)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        stats_path: &Path,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, stats_path);

        let aseg_stats = checks.file(&ASEG_STATS);
        let lh_aparc_stats = checks.file(&LH_APARC_STATS);
        let rh_aparc_stats = checks.file(&RH_APARC_STATS);
        let lh_aparc_a2009s_stats = checks.file(&LH_APARC_A2009S_STATS);
        let rh_aparc_a2009s_stats = checks.file(&RH_APARC_A2009S_STATS);
        let lh_aparc_dktatlas_stats = checks.file(&LH_APARC_DKTATLAS_STATS);
        let rh_aparc_dktatlas_stats = checks.file(&RH_APARC_DKTATLAS_STATS);
        let lh_curv_stats = checks.file(&LH_CURV_STATS);
        let rh_curv_stats = checks.file(&RH_CURV_STATS);
        let lh_w_g_pct_stats = checks.file(&LH_W_G_PCT_STATS);
        let rh_w_g_pct_stats = checks.file(&RH_W_G_PCT_STATS);
        let wmparc_stats = checks.file(&WMPARC_STATS);

        checks.finish(move || {
            Some(Self {
                aseg_stats,
                lh_aparc_stats,
                rh_aparc_stats,
                lh_aparc_a2009s_stats,
                rh_aparc_a2009s_stats,
                lh_aparc_dktatlas_stats,
                rh_aparc_dktatlas_stats,
                lh_curv_stats,
                rh_curv_stats,
                lh_w_g_pct_stats,
                rh_w_g_pct_stats,
                wmparc_stats,
            })
        })
    }

    pub fn files(&self) -> [(FileField, &Path); 12] {
        [
            (ASEG_STATS, &self.aseg_stats),
            (LH_APARC_STATS, &self.lh_aparc_stats),
            (RH_APARC_STATS, &self.rh_aparc_stats),
            (LH_APARC_A2009S_STATS, &self.lh_aparc_a2009s_stats),
            (RH_APARC_A2009S_STATS, &self.rh_aparc_a2009s_stats),
            (LH_APARC_DKTATLAS_STATS, &self.lh_aparc_dktatlas_stats),
            (RH_APARC_DKTATLAS_STATS, &self.rh_aparc_dktatlas_stats),
            (LH_CURV_STATS, &self.lh_curv_stats),
            (RH_CURV_STATS, &self.rh_curv_stats),
            (LH_W_G_PCT_STATS, &self.lh_w_g_pct_stats),
            (RH_W_G_PCT_STATS, &self.rh_w_g_pct_stats),
            (WMPARC_STATS, &self.wmparc_stats),
        ]
    }
}
