//! Constants used throughout the neurorm core crate.
//!
//! Directory names live on the typed markers in [`crate::paths`]; this module holds the
//! remaining names that are not part of a file group.

/// Environment variable FreeSurfer uses for the subjects root.
pub const SUBJECTS_DIR_ENV: &str = "SUBJECTS_DIR";

/// Completion marker written by `recon-all`.
pub const RECON_ALL_DONE_FILENAME: &str = "recon-all.done";
