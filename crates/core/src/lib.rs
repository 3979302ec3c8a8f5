//! # neurorm Core
//!
//! Typed, validated access to the output of FreeSurfer's `recon-all` pipeline.
//!
//! This crate maps the fixed per-subject directory layout onto Rust types:
//! - File groups for `mri/`, `mri/transforms/`, `surf/`, `label/`, `stats/` and `scripts/`
//! - A [`FreeSurferSubject`] aggregate built from a subjects directory and a subject id
//! - Validation that reports every missing file in one pass
//!
//! Only file metadata is inspected; no volume or surface data is ever read.
//!
//! ```no_run
//! use neurorm_core::FreeSurferSubject;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let subject = FreeSurferSubject::from_subjects_dir(Path::new("/opt/freesurfer/subjects"), "bert")?;
//! println!("{}", subject.mri.t1.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod files;
pub mod hemisphere;
pub mod paths;
pub mod probe;
pub mod subject;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use config::{resolve_subjects_dir, SubjectsConfig};
pub use error::{SubjectError, SubjectResult};
pub use files::{
    FileField, LabelFiles, MriFiles, ScriptFiles, StatsFiles, SurfaceFiles, TransformFiles,
};
pub use hemisphere::Hemisphere;
pub use neurorm_types::SubjectId;
pub use probe::{LocalFs, PathKind, PathProbe};
pub use subject::{FreeSurferSubject, SubjectFile};
pub use validation::{FieldError, PathIssue, ValidationErrors};
