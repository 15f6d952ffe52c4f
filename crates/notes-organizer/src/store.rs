//! Flat-file storage for the organizer's artifacts.
//!
//! - raw notes: read only; a missing file reads as `None`
//! - current thoughts: whole-file overwrite on every run
//! - evolution log: append only, created on first write
//!
//! No locking: one process at a time is assumed.
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::AppError;

pub struct ArtifactStore {
    raw_notes: PathBuf,
    current_thoughts: PathBuf,
    evolution_log: PathBuf,
}

impl ArtifactStore {
    pub fn new(config: &Config) -> Self {
        Self {
            raw_notes: config.raw_notes_path(),
            current_thoughts: config.current_thoughts_path(),
            evolution_log: config.evolution_log_path(),
        }
    }

    pub fn raw_notes_path(&self) -> &Path {
        &self.raw_notes
    }

    pub fn current_thoughts_path(&self) -> &Path {
        &self.current_thoughts
    }

    pub fn evolution_log_path(&self) -> &Path {
        &self.evolution_log
    }

    pub fn read_raw_notes(&self) -> Result<Option<String>, AppError> {
        read_optional(&self.raw_notes)
    }

    pub fn read_current_thoughts(&self) -> Result<Option<String>, AppError> {
        read_optional(&self.current_thoughts)
    }

    /// Replaces the current-thoughts file; prior content is not merged.
    pub fn write_current_thoughts(&self, content: &str) -> Result<(), AppError> {
        ensure_parent(&self.current_thoughts)?;
        std::fs::write(&self.current_thoughts, content).map_err(|source| AppError::Io {
            path: self.current_thoughts.clone(),
            source,
        })?;
        debug!(path = %self.current_thoughts.display(), bytes = content.len(), "current thoughts written");
        Ok(())
    }

    /// Appends one section to the evolution log. An existing log gets a
    /// newline separator before the new section.
    pub fn append_evolution_log(&self, section: &str) -> Result<(), AppError> {
        ensure_parent(&self.evolution_log)?;
        let existed = self.evolution_log.exists();
        let io_err = |source: std::io::Error| AppError::Io {
            path: self.evolution_log.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.evolution_log)
            .map_err(io_err)?;
        if existed {
            file.write_all(b"\n").map_err(io_err)?;
        }
        file.write_all(section.as_bytes()).map_err(io_err)?;
        debug!(path = %self.evolution_log.display(), existed, "evolution log appended");
        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AppError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn ensure_parent(path: &Path) -> Result<(), AppError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| AppError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
