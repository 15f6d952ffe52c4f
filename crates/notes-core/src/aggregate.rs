use crate::model::{Category, CategorizedNotes, CategoryThoughts, ThoughtSummary};
use crate::similarity::similar;

/// Most thoughts kept per category in the summary.
pub const MAX_THOUGHTS_PER_CATEGORY: usize = 3;

/// A note paired with the date it was written under.
pub(crate) type DatedNote<'a> = (&'a str, &'a str);

/// Flattens dated groups into per-category `(date, note)` lists.
///
/// Categories are ordered by first appearance while walking the groups in
/// input order; notes keep their input order.
pub(crate) fn collect_by_category(dated: &[CategorizedNotes]) -> Vec<(Category, Vec<DatedNote<'_>>)> {
    let mut collected: Vec<(Category, Vec<DatedNote<'_>>)> = Vec::new();
    for group in dated {
        for (category, notes) in &group.categories {
            let idx = match collected.iter().position(|(c, _)| c == category) {
                Some(idx) => idx,
                None => {
                    collected.push((*category, Vec::new()));
                    collected.len() - 1
                }
            };
            collected[idx]
                .1
                .extend(notes.iter().map(|note| (group.date.as_str(), note.as_str())));
        }
    }
    collected
}

/// Builds the current-thoughts summary.
///
/// Per category, notes are visited newest date first (stable for equal
/// dates) and kept only when dissimilar to everything already kept, up to
/// [`MAX_THOUGHTS_PER_CATEGORY`]. Once the cap is hit the rest are dropped.
pub fn aggregate(dated: &[CategorizedNotes]) -> ThoughtSummary {
    let mut categories = Vec::new();

    for (category, mut notes) in collect_by_category(dated) {
        notes.sort_by(|a, b| b.0.cmp(a.0));

        let mut thoughts: Vec<String> = Vec::new();
        for (_, note) in notes {
            if thoughts.iter().any(|kept| similar(note, kept)) {
                continue;
            }
            thoughts.push(note.to_string());
            if thoughts.len() >= MAX_THOUGHTS_PER_CATEGORY {
                break;
            }
        }

        if !thoughts.is_empty() {
            categories.push(CategoryThoughts { category, thoughts });
        }
    }

    ThoughtSummary { categories }
}
