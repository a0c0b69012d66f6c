//! The dotted package identifier of an Android app.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A validated, dot-separated package identifier such as `com.example.app`.
///
/// Every segment starts with an ASCII letter or `_` and contains only ASCII
/// alphanumerics and `_`, so the derived [`PackageName::relative_path`] can
/// never climb out of the source root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref().trim();

        if raw.is_empty() {
            return Err(invalid(raw, "name cannot be empty"));
        }

        for segment in raw.split('.') {
            let mut chars = segment.chars();
            match chars.next() {
                None => return Err(invalid(raw, "name contains an empty segment")),
                Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                    return Err(invalid(
                        raw,
                        &format!("segment '{segment}' must start with a letter or '_'"),
                    ));
                }
                Some(_) => {}
            }
            if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
                return Err(invalid(
                    raw,
                    &format!("segment '{segment}' contains '{bad}'"),
                ));
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// `com.example.app` → `com/example/app` (platform separators).
    pub fn relative_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_name_maps_to_nested_path() {
        let pkg = PackageName::parse("com.example.app").unwrap();
        assert_eq!(
            pkg.relative_path(),
            PathBuf::from("com").join("example").join("app")
        );
        assert_eq!(pkg.segments().count(), 3);
    }

    #[test]
    fn single_segment_is_accepted() {
        assert!(PackageName::parse("app").is_ok());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(PackageName::parse("  a.b ").unwrap().as_str(), "a.b");
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for bad in ["", "..", "com..app", ".com", "com.", "com/app", "com\\app", "1com.app"] {
            assert!(
                matches!(
                    PackageName::parse(bad),
                    Err(DomainError::InvalidPackageName { .. })
                ),
                "accepted: {bad:?}"
            );
        }
    }

    #[test]
    fn underscores_and_digits_allowed_after_first_char() {
        assert!(PackageName::parse("_internal.app2.my_feature").is_ok());
    }
}
