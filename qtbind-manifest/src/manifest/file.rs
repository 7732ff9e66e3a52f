use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A qtbind.toml file and the manifest parsed from it.
pub struct QtbindToml {
    path: PathBuf,
    manifest: Manifest,
}

impl QtbindToml {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
