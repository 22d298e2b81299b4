//! Release version values.
//!
//! Versions are the three-part tags this tool creates and publishes:
//! `v{major}.{minor}.{patch}`, nothing more. Prerelease and build metadata
//! are intentionally not accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A three-part release version, ordered lexicographically on the triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    /// Major version component
    pub major: u64,
    /// Minor version component
    pub minor: u64,
    /// Patch version component
    pub patch: u64,
}

impl SemVer {
    /// Sentinel value meaning "no tag was supplied"
    pub const ZERO: SemVer = SemVer {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Create a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Bump the minor component. The patch component always resets to zero.
    pub const fn bump_minor(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
            patch: 0,
        }
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let parts: Vec<&str> = bare.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::InvalidVersion {
                version: s.to_string(),
                reason: format!("expected 3 dot-separated parts, found {}", parts.len()),
            });
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| VersionError::InvalidVersion {
                version: s.to_string(),
                reason: format!("'{part}' is not a number"),
            })?;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!("v1.2.3".parse::<SemVer>().unwrap(), SemVer::new(1, 2, 3));
        assert_eq!("1.2.3".parse::<SemVer>().unwrap(), SemVer::new(1, 2, 3));
        assert_eq!("v0.0.0".parse::<SemVer>().unwrap(), SemVer::ZERO);
    }

    #[test]
    fn parse_format_round_trips() {
        for v in [
            SemVer::new(0, 0, 0),
            SemVer::new(1, 2, 3),
            SemVer::new(10, 0, 27),
        ] {
            assert_eq!(v.to_string().parse::<SemVer>().unwrap(), v);
        }
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in ["v1.2", "v1.2.3.4", "v1.x.3", "", "v", "va.b.c", "v1..3"] {
            assert!(bad.parse::<SemVer>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn bump_minor_resets_patch() {
        let v = SemVer::new(1, 2, 9);
        assert_eq!(v.bump_minor(), SemVer::new(1, 3, 0));
        assert_eq!(v.bump_minor().patch, 0);
        assert_eq!(SemVer::ZERO.bump_minor(), SemVer::new(0, 1, 0));
    }

    #[test]
    fn ordering_is_lexicographic_on_the_triple() {
        let mut versions = vec![
            SemVer::new(1, 0, 10),
            SemVer::new(0, 9, 9),
            SemVer::new(1, 0, 2),
            SemVer::new(2, 0, 0),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                SemVer::new(0, 9, 9),
                SemVer::new(1, 0, 2),
                SemVer::new(1, 0, 10),
                SemVer::new(2, 0, 0),
            ]
        );

        // Exactly one of <, ==, > holds for any pair.
        for &x in &versions {
            for &y in &versions {
                let relations = [
                    x.cmp(&y) == Ordering::Less,
                    x == y,
                    x.cmp(&y) == Ordering::Greater,
                ];
                assert_eq!(relations.iter().filter(|r| **r).count(), 1);
            }
        }
    }

    #[test]
    fn displays_with_v_prefix() {
        assert_eq!(SemVer::new(1, 3, 0).to_string(), "v1.3.0");
    }
}
