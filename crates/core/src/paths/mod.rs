//! On-disk path definitions for FreeSurfer subjects.
//!
//! This module defines relative filesystem paths within a subject directory.
//! It contains **no I/O logic** - only typed path construction.

pub mod subject;
