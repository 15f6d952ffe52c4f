//! Plain-text layout of the two persisted artifacts.
//!
//! The timestamp is passed in so output is reproducible.

use chrono::NaiveDateTime;

use crate::model::{EvolutionEvent, ThoughtSummary};

pub const BULLET: char = '・';

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const THOUGHTS_TITLE: &str = "=== 石原トレーナーの現在の考え・哲学 ===";

/// Full replacement content of the current-thoughts file.
pub fn render_current_thoughts(summary: &ThoughtSummary, updated_at: &NaiveDateTime) -> String {
    let mut lines = vec![
        THOUGHTS_TITLE.to_string(),
        format!("最終更新: {}", updated_at.format(TIMESTAMP_FORMAT)),
        String::new(),
    ];

    for entry in &summary.categories {
        lines.push(format!("【{}】", entry.category.label()));
        lines.extend(entry.thoughts.iter().map(|t| format!("{BULLET}{t}")));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// One evolution-log section, or `None` when there is nothing to append.
pub fn render_evolution_log(events: &[EvolutionEvent], logged_at: &NaiveDateTime) -> Option<String> {
    if events.is_empty() {
        return None;
    }

    let mut lines = vec![
        format!("=== 考えの変化履歴 - {} ===", logged_at.format(TIMESTAMP_FORMAT)),
        String::new(),
    ];
    for event in events {
        lines.push(format!("【{} - {}】", event.date, event.category.label()));
        lines.push(format!("変化タイプ: {}", event.change_type));
        lines.push(format!("以前の考え: {}", event.previous));
        lines.push(format!("現在の考え: {}", event.current));
        lines.push(String::new());
    }

    Some(lines.join("\n"))
}
