//! One organize pass: raw notes in, current thoughts and evolution log out.
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, warn};

use notes_core::model::{EvolutionEvent, ThoughtSummary};
use notes_core::render::{render_current_thoughts, render_evolution_log};
use notes_core::{aggregate, detect_evolution, parse_categorized};

use crate::error::AppError;
use crate::store::ArtifactStore;

#[derive(Debug, Serialize)]
pub struct OrganizeReport {
    pub dates: usize,
    pub notes: usize,
    pub summary: ThoughtSummary,
    pub events: Vec<EvolutionEvent>,
    /// False for dry runs.
    pub written: bool,
}

/// Returns `None` when there is nothing to organize (missing or markerless
/// raw notes); no artifact is touched in that case.
pub fn run_organize(
    store: &ArtifactStore,
    now: &NaiveDateTime,
    dry_run: bool,
) -> Result<Option<OrganizeReport>, AppError> {
    let Some(raw) = store.read_raw_notes()? else {
        warn!(path = %store.raw_notes_path().display(), "raw notes file not found");
        return Ok(None);
    };

    let dated = parse_categorized(&raw);
    if dated.is_empty() {
        info!("no dated notes found");
        return Ok(None);
    }
    let notes: usize = dated.iter().map(|d| d.note_count()).sum();
    info!(dates = dated.len(), notes, "notes parsed");

    let summary = aggregate(&dated);
    let events = detect_evolution(&dated);

    if !dry_run {
        store.write_current_thoughts(&render_current_thoughts(&summary, now))?;
        info!(
            path = %store.current_thoughts_path().display(),
            categories = summary.categories.len(),
            "current thoughts updated"
        );

        if let Some(section) = render_evolution_log(&events, now) {
            store.append_evolution_log(&section)?;
            info!(
                path = %store.evolution_log_path().display(),
                events = events.len(),
                "evolution events recorded"
            );
        } else {
            info!("no new evolution detected");
        }
    }

    Ok(Some(OrganizeReport {
        dates: dated.len(),
        notes,
        summary,
        events,
        written: !dry_run,
    }))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use notes_core::model::Category;

    use super::*;
    use crate::config::Config;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

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

    const NOTES: &str = "\
2024-03-01
睡眠 は 7時間
プロテイン は 補助
2024-01-01
睡眠 より 食べる 量
2024-02-01
睡眠 の 質 を 重視
";

    #[test]
    fn missing_raw_notes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(run_organize(&store, &at(9), false).unwrap().is_none());
        assert!(!store.current_thoughts_path().exists());
        assert!(!store.evolution_log_path().exists());
    }

    #[test]
    fn markerless_raw_notes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), "日付のないメモ\n").unwrap();
        let store = store_in(dir.path());
        assert!(run_organize(&store, &at(9), false).unwrap().is_none());
        assert!(!store.current_thoughts_path().exists());
    }

    #[test]
    fn organize_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), NOTES).unwrap();
        let store = store_in(dir.path());

        let report = run_organize(&store, &at(9), false).unwrap().unwrap();
        assert_eq!(report.dates, 3);
        assert_eq!(report.notes, 4);
        assert_eq!(report.events.len(), 2);
        assert!(report.written);
        assert_eq!(
            report.summary.get(Category::Sleep).unwrap(),
            &["睡眠 は 7時間", "睡眠 の 質 を 重視", "睡眠 より 食べる 量"]
        );

        let thoughts = std::fs::read_to_string(store.current_thoughts_path()).unwrap();
        assert!(thoughts.contains("最終更新: 2024-04-01 09:00"));
        assert!(thoughts.contains("【睡眠】\n・睡眠 は 7時間\n"));
        assert!(thoughts.contains("【プロテイン・栄養】\n・プロテイン は 補助\n"));

        let log = std::fs::read_to_string(store.evolution_log_path()).unwrap();
        assert!(log.starts_with("=== 考えの変化履歴 - 2024-04-01 09:00 ==="));
        assert_eq!(log.matches("変化タイプ: 考えの発展").count(), 2);
    }

    #[test]
    fn rerun_overwrites_thoughts_and_appends_log() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), NOTES).unwrap();
        let store = store_in(dir.path());

        run_organize(&store, &at(9), false).unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), "2024-05-01\n今日は雨\n").unwrap();
        run_organize(&store, &at(10), false).unwrap();

        let thoughts = std::fs::read_to_string(store.current_thoughts_path()).unwrap();
        assert!(!thoughts.contains("睡眠"));
        assert!(thoughts.contains("【その他】\n・今日は雨\n"));

        // second run had no events, so the first section stays alone
        let log = std::fs::read_to_string(store.evolution_log_path()).unwrap();
        assert_eq!(log.matches("=== 考えの変化履歴").count(), 1);

        std::fs::write(dir.path().join("raw-notes.txt"), NOTES).unwrap();
        run_organize(&store, &at(11), false).unwrap();
        let log = std::fs::read_to_string(store.evolution_log_path()).unwrap();
        assert_eq!(log.matches("=== 考えの変化履歴").count(), 2);
        assert!(log.contains("\n\n=== 考えの変化履歴 - 2024-04-01 11:00 ==="));
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), NOTES).unwrap();
        let store = store_in(dir.path());

        let report = run_organize(&store, &at(9), true).unwrap().unwrap();
        assert!(!report.written);
        assert_eq!(report.events.len(), 2);
        assert!(!store.current_thoughts_path().exists());
        assert!(!store.evolution_log_path().exists());
    }

    #[test]
    fn report_serializes_with_category_slugs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw-notes.txt"), NOTES).unwrap();
        let store = store_in(dir.path());
        let report = run_organize(&store, &at(9), true).unwrap().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["events"][0]["category"], "sleep");
        assert_eq!(json["summary"]["categories"][0]["category"], "nutrition");
        assert_eq!(json["summary"]["categories"][1]["thoughts"][0], "睡眠 は 7時間");
    }
}
