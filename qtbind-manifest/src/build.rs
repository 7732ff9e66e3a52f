//! `[build]` settings of a generation run.

use qtbind_core::{Os, Platform, Version};
use serde::Deserialize;

/// Build configuration from the `[build]` table.
///
/// Every field has a default so a manifest without `[build]` targets the
/// host OS with the default toolkit version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default = "Os::current")]
    pub os: Os,

    #[serde(default)]
    pub qt_version: Version,

    /// Generate against no native backend; native-backed enum values
    /// degrade to zero.
    #[serde(default)]
    pub stub: bool,

    /// Order classes by inheritance instead of by name.
    #[serde(default)]
    pub moc: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let host = Platform::host();
        Self {
            os: host.os,
            qt_version: host.qt_version,
            stub: false,
            moc: false,
        }
    }
}

impl BuildConfig {
    pub fn platform(&self) -> Platform {
        Platform::new(self.os, self.qt_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let build: BuildConfig = toml::from_str("").unwrap();
        assert_eq!(build, BuildConfig::default());
        assert_eq!(build.platform(), Platform::host());
        assert_eq!(build.qt_version, Version::new(5, 8, 0));
        assert!(!build.stub);
        assert!(!build.moc);
    }

    #[test]
    fn test_explicit_values() {
        let build: BuildConfig = toml::from_str(
            r#"
            os = "darwin"
            qt_version = "5.9.1"
            stub = true
            moc = true
            "#,
        )
        .unwrap();
        assert_eq!(
            build.platform(),
            Platform::new(Os::Darwin, Version::new(5, 9, 1))
        );
        assert!(build.stub);
        assert!(build.moc);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<BuildConfig>("target = \"linux\"").is_err());
    }
}
