use super::keywords::{
    symptom_scan_order, KeywordEntry, CRISIS_KEYWORDS, EMERGENCY_KEYWORDS,
    HOSPITAL_SEARCH_KEYWORDS,
};
use super::types::{KeywordMatch, SymptomCategory};

/// Case-fold user text for keyword comparison. Burmese passes through as-is.
fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// First entry (in declaration order) with a keyword contained in `lower`.
fn first_match<'a>(
    entries: impl IntoIterator<Item = &'a KeywordEntry>,
    lower: &str,
) -> Option<KeywordMatch> {
    entries.into_iter().find_map(|entry| {
        entry
            .keywords
            .iter()
            .find(|kw| lower.contains(*kw))
            .map(|kw| KeywordMatch {
                category: entry.category,
                keyword: *kw,
            })
    })
}

/// Detect which symptom category a message mentions.
///
/// Walks emergency entries first, then the non-emergency ones. The
/// earliest-declared category wins when several match.
pub fn match_category(text: &str) -> Option<SymptomCategory> {
    let lower = normalize(text);
    first_match(symptom_scan_order(), &lower).map(|m| m.category)
}

/// Same scan as [`is_emergency_text`], reporting which keyword fired.
pub fn find_emergency_keyword(text: &str) -> Option<KeywordMatch> {
    let lower = normalize(text);
    first_match(EMERGENCY_KEYWORDS, &lower)
}

pub fn is_emergency_text(text: &str) -> bool {
    find_emergency_keyword(text).is_some()
}

pub fn is_hospital_search_text(text: &str) -> bool {
    let lower = normalize(text);
    HOSPITAL_SEARCH_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Crisis phrasing checked immediately before a model call.
pub fn is_crisis_text(text: &str) -> bool {
    let lower = normalize(text);
    CRISIS_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
