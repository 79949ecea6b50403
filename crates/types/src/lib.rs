//! Validated text primitives shared by the site crates.
//!
//! Content is authored by hand in YAML, so the only guarantees the rest of the workspace can
//! rely on are the ones enforced here at deserialisation time.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// The input contained characters outside `[a-z0-9-]`
    #[error("slug contains invalid characters: {0}")]
    InvalidSlug(String),
    /// The input started or ended with a hyphen
    #[error("slug cannot start or end with '-': {0}")]
    DanglingHyphen(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, returning `TextError::Empty` for blank input.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A URL path segment used as a routing key and HTML anchor.
///
/// Slugs are lowercase ASCII letters, digits and single hyphens, e.g. `chico-customs-attorney`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Validates `input` as a slug.
    ///
    /// # Errors
    ///
    /// - `TextError::Empty` for blank input
    /// - `TextError::InvalidSlug` when any byte is outside `[a-z0-9-]`
    /// - `TextError::DanglingHyphen` when the slug starts or ends with `-`
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let s = input.as_ref().trim();
        if s.is_empty() {
            return Err(TextError::Empty);
        }
        if !s
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'))
        {
            return Err(TextError::InvalidSlug(s.to_owned()));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(TextError::DanglingHyphen(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }

    /// Derives a slug from free text such as a city name.
    ///
    /// Runs of non-alphanumeric characters collapse to a single `-`.
    pub fn slugify(input: &str) -> Result<Self, TextError> {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_lowercase());
            } else if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        Self::new(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! text_impls {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

text_impls!(NonEmptyText);
text_impls!(Slug);
