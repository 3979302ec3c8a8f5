//! Cortical hemisphere selector.

use std::fmt;
use std::str::FromStr;

use crate::{SubjectError, SubjectResult};

/// Left or right hemisphere.
///
/// Its only role is to select the filename prefix token used throughout the `surf/`, `label/`
/// and `stats/` directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Hemisphere {
    #[serde(rename = "lh")]
    Left,
    #[serde(rename = "rh")]
    Right,
}

impl Hemisphere {
    /// Both hemispheres, left first.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Left, Hemisphere::Right];

    /// The filename prefix token, `lh` or `rh`.
    pub const fn token(self) -> &'static str {
        match self {
            Hemisphere::Left => "lh",
            Hemisphere::Right => "rh",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Hemisphere {
    type Err = SubjectError;

    fn from_str(s: &str) -> SubjectResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lh" | "left" => Ok(Hemisphere::Left),
            "rh" | "right" => Ok(Hemisphere::Right),
            other => Err(SubjectError::InvalidInput(format!(
                "unknown hemisphere {other:?} (expected lh or rh)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(Hemisphere::Left.token(), "lh");
        assert_eq!(Hemisphere::Right.token(), "rh");
        assert_eq!(Hemisphere::Right.to_string(), "rh");
    }

    #[test]
    fn test_parse() {
        assert_eq!("lh".parse::<Hemisphere>().unwrap(), Hemisphere::Left);
        assert_eq!("Right".parse::<Hemisphere>().unwrap(), Hemisphere::Right);
        assert!("both".parse::<Hemisphere>().is_err());
    }
}
