use crate::model::{Category, CategorizedNotes};

/// Ordered keyword table. The first row with a keyword contained in the note
/// wins; anything unmatched falls through to [`Category::Other`].
///
/// English keywords are lowercase and matched against the lowercased note.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Nutrition,
        &[
            "プロテイン", "栄養", "食事", "サプリ",
            "protein", "nutrition", "meal", "diet", "supplement",
        ],
    ),
    (
        Category::TrainingFrequency,
        &[
            "筋トレ", "頻度", "週", "毎日", "トレーニング",
            "training", "workout", "frequency", "per week", "every day",
        ],
    ),
    (
        Category::Motivation,
        &[
            "継続", "楽しく", "モチベーション", "続け",
            "consisten", "continu", "motivation", "enjoy", "habit",
        ],
    ),
    (
        Category::Posture,
        &[
            "猫背", "反り腰", "腰痛", "姿勢",
            "posture", "slouch", "back pain", "hunch",
        ],
    ),
    (Category::Sleep, &["睡眠", "sleep"]),
    (
        Category::ClientInteractions,
        &[
            "お客様", "体験", "セッション",
            "client", "customer", "session", "trial session",
        ],
    ),
    (
        Category::IndustrySkepticism,
        &[
            "業界", "広告", "根性論", "画一的",
            "industry", "advertis", "no pain no gain", "one-size",
        ],
    ),
    (
        Category::TrainerInsights,
        &[
            "トレーナー", "指導", "完璧", "親近感",
            "trainer", "coaching", "perfect", "relatab",
        ],
    ),
];

/// Files a note under exactly one category, first match in table order.
pub fn categorize(note: &str) -> Category {
    let lowered = note.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Buckets one date's notes. Empty categories are dropped and the rest keep
/// declaration order; notes keep their input order within a category.
pub fn categorize_notes(date: &str, notes: &[String]) -> CategorizedNotes {
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); Category::ALL.len()];
    for note in notes {
        // discriminants follow `Category::ALL` order
        buckets[categorize(note) as usize].push(note.clone());
    }

    let categories = Category::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, notes)| !notes.is_empty())
        .collect();

    CategorizedNotes {
        date: date.to_string(),
        categories,
    }
}
