use crate::aggregate::collect_by_category;
use crate::model::{CategorizedNotes, EvolutionEvent, CHANGE_TYPE_DEVELOPMENT};
use crate::similarity::similar;

/// Finds places where a category's thinking moved on.
///
/// Each category with at least two notes is walked oldest first (stable for
/// equal dates); every adjacent pair that is not similar yields an event
/// dated at the later note. Events come out category by category, in the
/// order categories first appear.
pub fn detect_evolution(dated: &[CategorizedNotes]) -> Vec<EvolutionEvent> {
    let mut events = Vec::new();

    for (category, mut notes) in collect_by_category(dated) {
        if notes.len() < 2 {
            continue;
        }
        notes.sort_by(|a, b| a.0.cmp(b.0));

        for pair in notes.windows(2) {
            let (_, previous) = pair[0];
            let (date, current) = pair[1];
            if !similar(previous, current) {
                events.push(EvolutionEvent {
                    date: date.to_string(),
                    category,
                    previous: previous.to_string(),
                    current: current.to_string(),
                    change_type: CHANGE_TYPE_DEVELOPMENT,
                });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::parser::parse_categorized;

    #[test]
    fn single_note_categories_produce_nothing() {
        let raw = "2024-01-01\n・continuation notes about consistency\n2024-01-05\n・posture fragment about desk sitting\n";
        assert!(detect_evolution(&parse_categorized(raw)).is_empty());
    }

    #[test]
    fn three_dissimilar_notes_yield_two_events() {
        let raw = "\
2024-03-01
睡眠 は 7時間
2024-01-01
睡眠 より 食べる 量
2024-02-01
睡眠 の 質 を 重視
";
        // parser keeps input order, detector sorts ascending
        let events = detect_evolution(&parse_categorized(raw));
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].date, "2024-02-01");
        assert_eq!(events[0].category, Category::Sleep);
        assert_eq!(events[0].previous, "睡眠 より 食べる 量");
        assert_eq!(events[0].current, "睡眠 の 質 を 重視");
        assert_eq!(events[0].change_type, CHANGE_TYPE_DEVELOPMENT);

        assert_eq!(events[1].date, "2024-03-01");
        assert_eq!(events[1].previous, "睡眠 の 質 を 重視");
        assert_eq!(events[1].current, "睡眠 は 7時間");
    }

    #[test]
    fn similar_adjacent_notes_are_skipped() {
        let raw = "\
2024-01-01
睡眠 は 大事 やな
2024-01-02
睡眠 は 大事 やわ
";
        assert!(detect_evolution(&parse_categorized(raw)).is_empty());
    }

    #[test]
    fn events_grouped_by_first_appearance() {
        let raw = "\
2024-01-01
睡眠 短め
プロテイン 最高
2024-01-02
睡眠 たっぷり が 正解
プロテイン 不要 かも 知れん
";
        let events = detect_evolution(&parse_categorized(raw));
        let cats: Vec<Category> = events.iter().map(|e| e.category).collect();
        assert_eq!(cats, vec![Category::Nutrition, Category::Sleep]);
    }
}
