use serde::Serialize;

/// Topical bucket a note is filed into.
///
/// Declaration order matters: the categorizer walks categories top to bottom
/// and files a note under the first one whose keywords match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nutrition,
    TrainingFrequency,
    Motivation,
    Posture,
    Sleep,
    ClientInteractions,
    IndustrySkepticism,
    TrainerInsights,
    /// Catch-all for notes no keyword table matches.
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Nutrition,
        Category::TrainingFrequency,
        Category::Motivation,
        Category::Posture,
        Category::Sleep,
        Category::ClientInteractions,
        Category::IndustrySkepticism,
        Category::TrainerInsights,
        Category::Other,
    ];

    /// Label written into the persisted artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Category::Nutrition => "プロテイン・栄養",
            Category::TrainingFrequency => "筋トレ・頻度",
            Category::Motivation => "継続・モチベーション",
            Category::Posture => "姿勢・体の悩み",
            Category::Sleep => "睡眠",
            Category::ClientInteractions => "お客様との関わり",
            Category::IndustrySkepticism => "業界への疑問",
            Category::TrainerInsights => "トレーナーとしての気づき",
            Category::Other => "その他",
        }
    }
}

/// Raw note lines found under one date heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    /// `YYYY-MM-DD`, compared as a string.
    pub date: String,
    pub notes: Vec<String>,
}

/// Notes of a single date, bucketed by category.
///
/// Only non-empty categories are present, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedNotes {
    pub date: String,
    pub categories: Vec<(Category, Vec<String>)>,
}

impl CategorizedNotes {
    pub fn note_count(&self) -> usize {
        self.categories.iter().map(|(_, notes)| notes.len()).sum()
    }
}

/// Deduplicated, most-recent-first thoughts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryThoughts {
    pub category: Category,
    pub thoughts: Vec<String>,
}

/// Current-thoughts summary across all dates.
///
/// Categories appear in the order they were first encountered while walking
/// the dated groups, not in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThoughtSummary {
    pub categories: Vec<CategoryThoughts>,
}

impl ThoughtSummary {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.thoughts.as_slice())
    }
}

/// Label attached to every detected evolution event.
pub const CHANGE_TYPE_DEVELOPMENT: &str = "考えの発展";

/// Two chronologically adjacent notes of one category that are not similar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionEvent {
    /// Date of the later note.
    pub date: String,
    pub category: Category,
    pub previous: String,
    pub current: String,
    pub change_type: &'static str,
}
