use regex::Regex;

use crate::categorizer::categorize_notes;
use crate::model::{CategorizedNotes, DateGroup};

/// Splits raw notes into dated groups.
///
/// A date marker is a `YYYY-MM-DD` token delimited by whitespace or the ends
/// of the input. Everything up to the next marker belongs to that date, one
/// note per non-blank trimmed line. Text before the first marker is dropped,
/// and a marker with nothing under it yields no group. When a date heading
/// repeats, the later block replaces the earlier one in place.
///
/// Digits may be any Unicode decimal digit, so full-width dates such as
/// `２０２４-０１-０１` are markers too. A leading byte-order mark is ignored.
pub fn parse(raw: &str) -> Vec<DateGroup> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let date_re = Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid regex");

    let markers: Vec<(usize, usize)> = date_re
        .find_iter(raw)
        .filter(|m| is_standalone(raw, m.start(), m.end()))
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut groups: Vec<DateGroup> = Vec::new();
    for (i, &(start, end)) in markers.iter().enumerate() {
        let block_end = markers.get(i + 1).map_or(raw.len(), |&(next, _)| next);
        let date = &raw[start..end];
        let notes: Vec<String> = raw[end..block_end]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if notes.is_empty() {
            continue;
        }

        match groups.iter_mut().find(|g| g.date == date) {
            Some(existing) => existing.notes = notes,
            None => groups.push(DateGroup {
                date: date.to_string(),
                notes,
            }),
        }
    }

    groups
}

/// Parses and categorizes in one go, keeping date order from the input.
pub fn parse_categorized(raw: &str) -> Vec<CategorizedNotes> {
    parse(raw)
        .iter()
        .map(|group| categorize_notes(&group.date, &group.notes))
        .collect()
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    let after_ok = text[end..].chars().next().map_or(true, char::is_whitespace);
    before_ok && after_ok
}
