//! The display name used as a pseudo-identity.
//!
//! An [`Identity`] is whatever name a member typed in on the login screen. It partitions
//! ownership records and formations but carries no integrity guarantee: anyone who types
//! the same name acts as that member. It must never be treated as authentication.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Name must not be \".\" or \"..\"")]
    DotSegment,
    #[error("No name has been chosen for this session")]
    NotInSession,
}

/// A trimmed, non-empty display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Trims `name` and wraps it, failing with [`IdentityError::EmptyName`] when nothing is left.
    ///
    /// `.` and `..` are refused since URLs normalise them away as path segments, even
    /// percent-encoded.
    pub fn parse(name: &str) -> Result<Self, IdentityError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        if trimmed == "." || trimmed == ".." {
            return Err(IdentityError::DotSegment);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identity currently attached to the session
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IdentityDto {
    /// The chosen display name
    pub name: String,
}

/// Request body for choosing a display name
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SetIdentityDto {
    /// Display name, surrounding whitespace is trimmed
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let identity = Identity::parse("  八咫烏太郎 \n").unwrap();

        assert_eq!(identity.as_str(), "八咫烏太郎");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Identity::parse(""), Err(IdentityError::EmptyName));
        assert_eq!(Identity::parse("   \t"), Err(IdentityError::EmptyName));
    }

    /// Expect names that would vanish from a URL path to be refused
    #[test]
    fn rejects_dot_segments() {
        assert_eq!(Identity::parse(" .. "), Err(IdentityError::DotSegment));
        assert_eq!(Identity::parse("."), Err(IdentityError::DotSegment));
        assert_eq!(Identity::parse("...").unwrap().as_str(), "...");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let identity = Identity::parse(" Oda Nobunaga ").unwrap();

        assert_eq!(identity.to_string(), "Oda Nobunaga");
    }
}
