use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_RAW_FILE: &str = "raw-notes.txt";
const DEFAULT_THOUGHTS_FILE: &str = "current-thoughts.txt";
const DEFAULT_EVOLUTION_FILE: &str = "evolution-log.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub raw_notes_file: String,
    pub current_thoughts_file: String,
    pub evolution_log_file: String,
}

impl Config {
    /// All optional:
    /// - `NOTES_BASE_DIR` (default: ".")
    /// - `NOTES_RAW_FILE` (default: "raw-notes.txt")
    /// - `NOTES_THOUGHTS_FILE` (default: "current-thoughts.txt")
    /// - `NOTES_EVOLUTION_FILE` (default: "evolution-log.txt")
    ///
    /// `base_dir_override` (the `--base-dir` flag) wins over `NOTES_BASE_DIR`.
    pub fn from_env(base_dir_override: Option<PathBuf>) -> Result<Self, AppError> {
        let base_dir = base_dir_override
            .or_else(|| std::env::var("NOTES_BASE_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Self::with_files(
            base_dir,
            env_or("NOTES_RAW_FILE", DEFAULT_RAW_FILE),
            env_or("NOTES_THOUGHTS_FILE", DEFAULT_THOUGHTS_FILE),
            env_or("NOTES_EVOLUTION_FILE", DEFAULT_EVOLUTION_FILE),
        )
    }

    pub fn with_files(
        base_dir: PathBuf,
        raw_notes_file: String,
        current_thoughts_file: String,
        evolution_log_file: String,
    ) -> Result<Self, AppError> {
        if base_dir.exists() && !base_dir.is_dir() {
            return Err(AppError::Config(format!(
                "base dir is not a directory: {}",
                base_dir.display()
            )));
        }

        Ok(Self {
            base_dir,
            raw_notes_file,
            current_thoughts_file,
            evolution_log_file,
        })
    }

    pub fn raw_notes_path(&self) -> PathBuf {
        self.resolve(&self.raw_notes_file)
    }

    pub fn current_thoughts_path(&self) -> PathBuf {
        self.resolve(&self.current_thoughts_file)
    }

    pub fn evolution_log_path(&self) -> PathBuf {
        self.resolve(&self.evolution_log_file)
    }

    // absolute file names are kept as-is by `join`
    fn resolve(&self, file: &str) -> PathBuf {
        Path::new(&self.base_dir).join(file)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
