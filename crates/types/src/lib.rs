/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    /// The input was empty or contained only whitespace
    #[error("subject id cannot be empty")]
    Empty,

    /// The input starts or ends with whitespace
    #[error("subject id has leading or trailing whitespace: {0:?}")]
    SurroundingWhitespace(String),

    /// The input would not name a single directory beneath the subjects directory
    #[error("subject id must be a single path component: {0:?}")]
    NotAComponent(String),
}

/// A subject identifier that is safe to join onto a subjects directory.
///
/// This type wraps a `String` and guarantees the value names exactly one
/// directory entry: it is non-empty, contains no path separator for the
/// current platform, and is neither `.` nor `..`.
///
/// The input is stored exactly as given. Leading or trailing whitespace is
/// rejected rather than trimmed, since ` bert` and `bert` are different
/// directories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    /// Creates a new `SubjectId` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(SubjectId)` if the input is a single path component,
    /// `Err(IdError::Empty)` if it is empty or whitespace,
    /// `Err(IdError::SurroundingWhitespace)` if it starts or ends with whitespace, or
    /// `Err(IdError::NotAComponent)` if it contains a separator or is `.`/`..`.
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdError> {
        let input = input.as_ref();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }

        if trimmed.len() != input.len() {
            return Err(IdError::SurroundingWhitespace(input.to_owned()));
        }

        if input == "."
            || input == ".."
            || input.chars().any(|c| std::path::is_separator(c) || c == '\0')
        {
            return Err(IdError::NotAComponent(input.to_owned()));
        }

        Ok(Self(input.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SubjectId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for SubjectId {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl serde::Serialize for SubjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SubjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SubjectId::new(&s).map_err(serde::de::Error::custom)
    }
}
