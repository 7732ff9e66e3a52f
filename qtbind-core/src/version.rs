use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A toolkit version in `X.Y.Z` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Version {
    /// The toolkit release the bindings are generated against when nothing
    /// else is configured.
    pub const DEFAULT_QT: Version = Version::new(5, 8, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::DEFAULT_QT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: parts[2].parse().map_err(|_| "invalid patch")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_qt_5_8() {
        assert_eq!(Version::default(), Version::new(5, 8, 0));
        assert_eq!(Version::default().to_string(), "5.8.0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("5.7.1".parse::<Version>().unwrap(), Version::new(5, 7, 1));
        assert_eq!(
            " 5.10.0 ".parse::<Version>().unwrap(),
            Version::new(5, 10, 0)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("5.8".parse::<Version>().is_err());
        assert!("5.8.0.1".parse::<Version>().is_err());
        assert!("five.eight.zero".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Version::new(5, 7, 0) < Version::new(5, 8, 0));
        assert!(Version::new(5, 10, 0) > Version::new(5, 9, 9));
    }

    #[test]
    fn test_serde_roundtrip_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Build {
            qt_version: Version,
        }
        let build: Build = toml::from_str(r#"qt_version = "5.9.2""#).unwrap();
        assert_eq!(build.qt_version, Version::new(5, 9, 2));
        assert_eq!(
            toml::to_string(&build).unwrap().trim(),
            r#"qt_version = "5.9.2""#
        );
    }
}
