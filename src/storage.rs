use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by document persistence.
///
/// `FileNotFound` is the only kind the state machine distinguishes - it gets
/// its own notice wording. Everything else is an opaque I/O failure. Neither
/// kind is allowed to escape past the editor as an uncaught error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persists documents as newline-joined text files under a root directory.
///
/// A pure translation layer: it never touches the buffer, it only turns line
/// sequences into files and back. The root is created lazily on first save.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the document to `root/filename`, overwriting any existing file.
    /// Lines are joined with a single `\n`; no trailing newline is added.
    /// Returns the filename used, enabling save-as flows where the caller
    /// just obtained the name from a prompt.
    pub fn save(&self, filename: &str, lines: &[String]) -> Result<String, StorageError> {
        let path = self.root.join(filename);
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;
        fs::write(&path, lines.join("\n")).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(file = filename, lines = lines.len(), "document saved");
        Ok(filename.to_string())
    }

    /// Read `root/filename` and split it into lines, stripping the line
    /// terminators. The caller decides what to do with the result; this
    /// never mutates any buffer.
    pub fn load(&self, filename: &str) -> Result<Vec<String>, StorageError> {
        let path = self.root.join(filename);
        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StorageError::FileNotFound { path: path.clone() }
            } else {
                StorageError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let lines = content.lines().map(str::to_string).collect::<Vec<_>>();
        tracing::info!(file = filename, lines = lines.len(), "document loaded");
        Ok(lines)
    }

    /// Sorted names of the plain files directly under the root. Used to
    /// populate the file selector; a missing root reads as an empty list
    /// rather than an error, matching the "nothing saved yet" case.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StorageError::Io {
                path: self.root.clone(),
                source,
            })?;
            if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
