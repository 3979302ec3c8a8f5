//! Path validation and error aggregation.
//!
//! Constructing any file group validates every path it names. Validation never stops at the
//! first problem: each required path is checked independently and every failure is collected
//! into a single [`ValidationErrors`] report, so a malformed subject directory can be fixed in
//! one pass rather than one error at a time.
//!
//! Failures are located by a dotted field path, for example `mri.transforms.cc_up_lta`, built up
//! as nested groups are merged into their parent.

use crate::files::FileField;
use crate::hemisphere::Hemisphere;
use crate::probe::{PathKind, PathProbe};
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a required path failed validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathIssue {
    /// Nothing exists at the path.
    Missing,
    /// The path exists but is not a regular file.
    NotAFile,
    /// The path exists but is not a directory.
    NotADirectory,
    /// Metadata for the path could not be read.
    Inaccessible(String),
}

impl fmt::Display for PathIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathIssue::Missing => write!(f, "does not exist"),
            PathIssue::NotAFile => write!(f, "is not a regular file"),
            PathIssue::NotADirectory => write!(f, "is not a directory"),
            PathIssue::Inaccessible(reason) => write!(f, "cannot be read: {reason}"),
        }
    }
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    /// Dotted location of the field within the subject, e.g. `mri.wm`.
    pub field: String,
    /// The path that was checked.
    pub path: PathBuf,
    /// What was wrong with it.
    pub issue: PathIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.issue, self.path.display())
    }
}

/// Every field that failed validation during one construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the dotted field locations of every failure, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Returns `true` if a failure was recorded for exactly this field location.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }

    fn push(&mut self, field: impl Into<String>, path: PathBuf, issue: PathIssue) {
        self.errors.push(FieldError {
            field: field.into(),
            path,
            issue,
        });
    }

    /// Merges a nested group's failures, prefixing each location with `prefix.`.
    fn absorb(&mut self, prefix: &str, nested: ValidationErrors) {
        self.errors.extend(nested.errors.into_iter().map(|mut e| {
            e.field = format!("{prefix}.{}", e.field);
            e
        }));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} required path(s) failed validation", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Collects checks for one group rooted at `base`.
///
/// Each check computes and records its path regardless of the outcome, so the caller can keep
/// going after a failure. [`FileChecks::finish`] only builds the group once nothing failed.
pub(crate) struct FileChecks<'a, P: PathProbe + ?Sized> {
    probe: &'a P,
    base: &'a Path,
    hemisphere: Option<Hemisphere>,
    errors: ValidationErrors,
}

impl<'a, P: PathProbe + ?Sized> FileChecks<'a, P> {
    pub(crate) fn new(probe: &'a P, base: &'a Path) -> Self {
        Self {
            probe,
            base,
            hemisphere: None,
            errors: ValidationErrors::default(),
        }
    }

    /// Prefixes every hemisphere-relative file name with the hemisphere token.
    pub(crate) fn for_hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = Some(hemisphere);
        self
    }

    /// Requires `field` to be a regular file under the base directory.
    pub(crate) fn file(&mut self, field: &FileField) -> PathBuf {
        let path = field.path_in(self.base, self.hemisphere);
        let issue = match self.probe.kind(&path) {
            PathKind::File => None,
            PathKind::Missing => Some(PathIssue::Missing),
            PathKind::Directory | PathKind::Other => Some(PathIssue::NotAFile),
            PathKind::Inaccessible(reason) => Some(PathIssue::Inaccessible(reason)),
        };
        if let Some(issue) = issue {
            self.errors.push(field.field, path.clone(), issue);
        }
        path
    }

    /// Requires `path` to be a directory.
    pub(crate) fn directory(&mut self, field: &str, path: &Path) {
        let issue = match self.probe.kind(path) {
            PathKind::Directory => None,
            PathKind::Missing => Some(PathIssue::Missing),
            PathKind::File | PathKind::Other => Some(PathIssue::NotADirectory),
            PathKind::Inaccessible(reason) => Some(PathIssue::Inaccessible(reason)),
        };
        if let Some(issue) = issue {
            self.errors.push(field, path.to_path_buf(), issue);
        }
    }

    /// Records a nested group's outcome under `field`.
    pub(crate) fn nested<T>(&mut self, field: &str, result: Result<T, ValidationErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.errors.absorb(field, errors);
                None
            }
        }
    }

    /// Builds the group when every check passed, otherwise returns every failure.
    ///
    /// `build` only runs when no failure was recorded, at which point every value returned by
    /// [`FileChecks::nested`] is `Some`.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}
