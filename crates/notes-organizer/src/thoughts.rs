//! Topic lookup against the persisted current-thoughts file.
use tracing::{info, warn};

use notes_core::relevance::relevant_thoughts;

use crate::error::AppError;
use crate::store::ArtifactStore;

/// Returns `None` when the current-thoughts file has not been written yet.
pub fn run_thoughts(store: &ArtifactStore, topic: &str) -> Result<Option<Vec<String>>, AppError> {
    let Some(current) = store.read_current_thoughts()? else {
        warn!(
            path = %store.current_thoughts_path().display(),
            "current thoughts file not found"
        );
        return Ok(None);
    };

    let thoughts = relevant_thoughts(topic, &current);
    info!(topic, found = thoughts.len(), "relevant thoughts selected");
    Ok(Some(thoughts))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::Config;

    fn store_in(dir: &Path) -> ArtifactStore {
        let config = Config::with_files(
            dir.to_path_buf(),
            "raw-notes.txt".to_string(),
            "current-thoughts.txt".to_string(),
            "evolution-log.txt".to_string(),
        )
        .unwrap();
        ArtifactStore::new(&config)
    }

    #[test]
    fn missing_artifact_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(run_thoughts(&store, "睡眠").unwrap().is_none());
    }

    #[test]
    fn selects_from_written_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store
            .write_current_thoughts(
                "=== 石原トレーナーの現在の考え・哲学 ===\n最終更新: 2024-01-06 09:05\n\n【睡眠】\n・睡眠が一番\n\n【その他】\n・今日は雨\n",
            )
            .unwrap();

        assert_eq!(run_thoughts(&store, "睡眠の質").unwrap(), Some(vec!["睡眠が一番".to_string()]));
        assert_eq!(run_thoughts(&store, "ストレッチ").unwrap(), Some(Vec::new()));
    }
}
