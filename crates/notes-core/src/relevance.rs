//! Topic lookup over a rendered current-thoughts artifact.
//!
//! This table is configured independently of the categorizer's keyword
//! table; the two are not kept in sync.

use crate::render::BULLET;

const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("プロテイン", &["プロテイン", "栄養", "食事", "サプリ"]),
    ("筋トレ", &["筋トレ", "トレーニング", "頻度", "継続"]),
    ("姿勢", &["猫背", "反り腰", "姿勢", "腰痛"]),
    ("継続", &["継続", "モチベーション", "楽しく"]),
    ("睡眠", &["睡眠"]),
    ("食事", &["食事", "栄養", "プロテイン"]),
];

/// Keywords selected by a topic: every row whose key or any keyword occurs
/// in the topic contributes all of its keywords.
pub fn topic_keywords(topic: &str) -> Vec<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .filter(|(key, keywords)| topic.contains(key) || keywords.iter().any(|k| topic.contains(k)))
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .collect()
}

/// Bullet lines of the artifact that mention any keyword of the topic, with
/// one leading bullet removed.
pub fn relevant_thoughts(topic: &str, current_thoughts: &str) -> Vec<String> {
    let keywords = topic_keywords(topic);
    if keywords.is_empty() {
        return Vec::new();
    }

    current_thoughts
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(BULLET))
        .filter(|line| keywords.iter().any(|k| line.contains(k)))
        .map(|line| line[BULLET.len_utf8()..].trim().to_string())
        .collect()
}
