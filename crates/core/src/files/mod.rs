//! File groups of a FreeSurfer subject.
//!
//! Each group is a fixed set of named, individually required files living in one subdirectory.
//! Constructing a group validates every file it names and reports all failures together.
//!
//! The files of each group are declared once as [`FileField`] constants carrying the field name,
//! the on-disk file name and a short description. Groups expose them again through `files()`
//! for reporting.

mod label;
mod mri;
mod scripts;
mod stats;
mod surface;
mod transforms;

pub use label::LabelFiles;
pub use mri::MriFiles;
pub use scripts::ScriptFiles;
pub use stats::StatsFiles;
pub use surface::SurfaceFiles;
pub use transforms::TransformFiles;

use std::path::{Path, PathBuf};

use crate::hemisphere::Hemisphere;

/// Declaration of one required file within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileField {
    /// Field name, used as the location in validation reports.
    pub field: &'static str,
    /// File name, or the suffix following `<hemisphere>.` for hemispheric fields.
    pub name: &'static str,
    /// What the file contains.
    pub description: &'static str,
    hemispheric: bool,
}

impl FileField {
    /// A file whose name is used as-is.
    pub const fn literal(field: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            field,
            name,
            description,
            hemispheric: false,
        }
    }

    /// A file whose name is prefixed with the hemisphere token, e.g. `lh.white`.
    pub const fn hemispheric(
        field: &'static str,
        suffix: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            field,
            name: suffix,
            description,
            hemispheric: true,
        }
    }

    pub const fn is_hemispheric(&self) -> bool {
        self.hemispheric
    }

    /// The on-disk file name.
    ///
    /// Hemispheric fields without a hemisphere render as `?h.<suffix>`.
    pub fn file_name(&self, hemisphere: Option<Hemisphere>) -> String {
        match (self.hemispheric, hemisphere) {
            (false, _) => self.name.to_owned(),
            (true, Some(hemi)) => format!("{}.{}", hemi.token(), self.name),
            (true, None) => format!("?h.{}", self.name),
        }
    }

    /// The file's path within `base`.
    pub fn path_in(&self, base: &Path, hemisphere: Option<Hemisphere>) -> PathBuf {
        base.join(self.file_name(hemisphere))
    }
}
