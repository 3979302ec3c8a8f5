//! Logs and status files in `scripts/`.

use std::path::{Path, PathBuf};

use super::FileField;
use crate::constants::RECON_ALL_DONE_FILENAME;
use crate::probe::{LocalFs, PathProbe};
use crate::validation::{FileChecks, ValidationErrors};

const RECON_ALL_LOG: FileField =
    FileField::literal("recon_all_log", "recon-all.log", "Main recon-all log file");
const RECON_ALL_STATUS: FileField = FileField::literal(
    "recon_all_status",
    RECON_ALL_DONE_FILENAME,
    "Processing status file",
);
const BUILD_LOG: FileField = FileField::literal("build_log", "build-stamp.txt", "Build log");

/// Log and script files in `scripts/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScriptFiles {
    pub recon_all_log: PathBuf,
    pub recon_all_status: PathBuf,
    pub build_log: PathBuf,
}

impl ScriptFiles {
    pub const FIELDS: [FileField; 3] = [RECON_ALL_LOG, RECON_ALL_STATUS, BUILD_LOG];

    pub fn from_path(scripts_path: &Path) -> Result<Self, ValidationErrors> {
        Self::from_path_with(&LocalFs, scripts_path)
    }

    pub fn from_path_with<P: PathProbe + ?Sized>(
        probe: &P,
        scripts_path: &Path,
    ) -> Result<Self, ValidationErrors> {
        let mut checks = FileChecks::new(probe, scripts_path);

        let recon_all_log = checks.file(&RECON_ALL_LOG);
        let recon_all_status = checks.file(&RECON_ALL_STATUS);
        let build_log = checks.file(&BUILD_LOG);

        checks.finish(move || {
            Some(Self {
                recon_all_log,
                recon_all_status,
                build_log,
            })
        })
    }

    pub fn files(&self) -> [(FileField, &Path); 3] {
        [
            (RECON_ALL_LOG, &self.recon_all_log),
            (RECON_ALL_STATUS, &self.recon_all_status),
            (BUILD_LOG, &self.build_log),
        ]
    }
}
