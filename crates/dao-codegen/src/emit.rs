// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source emission for build scripts.
//!
//! A [`SourceUnit`] is one generated file. [`FileEmitter`] writes units
//! below a root directory, one sub-directory per namespace segment:
//!
//! ```text
//! $OUT_DIR/
//! └── app/
//!     └── model/
//!         └── user_dao.rs
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf}
};

use thiserror::Error;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by dao-codegen. Do not edit.";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Module path of the generated item.
    pub namespace: Vec<String>,

    /// File name, including the `.rs` extension.
    pub file_name: String,

    /// File contents.
    pub contents: String
}

impl SourceUnit {
    /// Unit with the generated header prepended to `code`.
    #[must_use]
    pub fn new(namespace: Vec<String>, file_name: impl Into<String>, code: &str) -> Self {
        Self {
            namespace,
            file_name: file_name.into(),
            contents: format!("{GENERATED_HEADER}\n{code}\n")
        }
    }

    /// Path relative to the emission root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.namespace.iter().collect();
        path.push(&self.file_name);
        path
    }
}

/// Failure writing a source unit.
#[derive(Debug, Error)]
pub enum EmissionError {
    /// Creating directories or writing the file failed.
    #[error("failed to write generated source `{}`: {source}", path.display())]
    Io {
        /// Target path.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error
    }
}

/// Sink for generated source units.
pub trait Emitter {
    /// Write one unit.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionError`] when the unit cannot be written.
    fn emit(&mut self, unit: &SourceUnit) -> Result<(), EmissionError>;
}

/// Writes units under a root directory.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    root: PathBuf
}

impl FileEmitter {
    /// Emitter rooted at `root`, usually `$OUT_DIR`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into()
        }
    }

    /// Emission root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, unit: &SourceUnit) -> Result<(), EmissionError> {
        let path = self.root.join(unit.relative_path());
        let io_error = |source| EmissionError::Io {
            path: path.clone(),
            source
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&path, &unit.contents).map_err(io_error)?;
        tracing::debug!(path = %path.display(), "wrote generated source");
        Ok(())
    }
}
