//! Line-oriented word-list files on disk.
//!
//! Lists live at `<base_dir>/<dir>/<file>`. Reads fall back to the path
//! relative to the working directory when the file is missing under the base
//! directory; writes always target the base directory.

use crate::errors::format_error_with_code_and_help;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Location of one list: `(directory, file name)`.
pub type ListLocation = (&'static str, &'static str);

pub const RESOURCES_DIR: &str = "resources";
pub const DATA_DIR: &str = "data";

/// Base dictionary.
pub const DEFINITIONS: ListLocation = (RESOURCES_DIR, "definitions.txt");
/// Secondary dictionary appended after the base one.
pub const MERGED: ListLocation = (RESOURCES_DIR, "merged.txt");
pub const INCLUDE: ListLocation = (DATA_DIR, "include.txt");
pub const EXCLUDE: ListLocation = (DATA_DIR, "exclude.txt");
/// Include-list words waiting to be folded into the dictionary.
pub const MERGEABLE_DEFINITIONS: ListLocation = (DATA_DIR, "mergeable_definitions.txt");
/// Output of the clean-merge pass.
pub const MERGED_CLEANED: ListLocation = (DATA_DIR, "merged_cleaned.txt");

/// Errors raised while reading or writing list files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read word list '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write word list '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Read { .. } => "F001",
            StoreError::Write { .. } => "F002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            StoreError::Read { .. } => "Word list could not be read",
            StoreError::Write { .. } => "Word list could not be written",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            StoreError::Read { .. } => "The list file was missing under the data directory and under the working directory, or it could not be opened or decoded as UTF-8.",
            StoreError::Write { .. } => "The list file or its parent directory could not be created, or a write to it failed.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            StoreError::Read { .. } => Some("Check --data-dir (or WORDGRID_DATA_DIR) points at the folder holding resources/ and data/"),
            StoreError::Write { .. } => Some("Check that the data directory is writable"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }

    /// True when the list simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Reads and writes the word lists under one base directory.
#[derive(Debug, Clone)]
pub struct WordStore {
    base_dir: PathBuf,
}

impl WordStore {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.into() }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a list is written to.
    #[must_use]
    pub fn path_of(&self, (dir, file): ListLocation) -> PathBuf {
        self.base_dir.join(dir).join(file)
    }

    /// Path a list is read from: under the base directory, else relative.
    fn read_path_of(&self, location: ListLocation) -> PathBuf {
        let path = self.path_of(location);
        let (dir, file) = location;
        if path.exists() {
            path
        } else {
            Path::new(dir).join(file)
        }
    }

    /// Every line of the list, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the list is missing or unreadable.
    pub fn read_lines(&self, location: ListLocation) -> Result<Vec<String>, StoreError> {
        let path = self.read_path_of(location);
        let data = fs::read_to_string(&path).map_err(|source| StoreError::Read { path: path.clone(), source })?;
        let lines: Vec<String> = data
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        debug!("read {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    /// Replace the list with `lines`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be created or written.
    pub fn overwrite<S: AsRef<str>>(&self, lines: &[S], location: ListLocation) -> Result<(), StoreError> {
        let path = self.path_of(location);
        let result = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::File::create(&path))
            .and_then(|file| write_lines(file, lines));
        result.map_err(|source| StoreError::Write { path: path.clone(), source })?;
        debug!("wrote {} lines to {}", lines.len(), path.display());
        Ok(())
    }

    /// Append `lines` to the list, creating the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be opened or written.
    pub fn append<S: AsRef<str>>(&self, lines: &[S], location: ListLocation) -> Result<(), StoreError> {
        let path = self.path_of(location);
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .and_then(|file| write_lines(file, lines));
        result.map_err(|source| StoreError::Write { path: path.clone(), source })?;
        debug!("appended {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}

fn write_lines<S: AsRef<str>>(file: fs::File, lines: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
