//! Target platform description used for module applicability.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Version;

/// Host operating system the bindings are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
    Android,
    Ios,
}

impl Os {
    /// The operating system this binary was compiled for.
    ///
    /// Falls back to [`Os::Linux`] on unlisted unix-likes.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Os::Darwin,
            "windows" => Os::Windows,
            "android" => Os::Android,
            "ios" => Os::Ios,
            _ => Os::Linux,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
            Os::Windows => "windows",
            Os::Android => "android",
            Os::Ios => "ios",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Os::Linux),
            "darwin" | "macos" => Ok(Os::Darwin),
            "windows" => Ok(Os::Windows),
            "android" => Ok(Os::Android),
            "ios" => Ok(Os::Ios),
            other => Err(format!(
                "unknown os '{}', expected one of: linux, darwin, windows, android, ios",
                other
            )),
        }
    }
}

/// The OS and toolkit version a generation run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub os: Os,
    pub qt_version: Version,
}

impl Platform {
    pub fn new(os: Os, qt_version: Version) -> Self {
        Self { os, qt_version }
    }

    /// The current OS with the default toolkit version.
    pub fn host() -> Self {
        Self::new(Os::current(), Version::DEFAULT_QT)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Qt {})", self.os, self.qt_version)
    }
}
