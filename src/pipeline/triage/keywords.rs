//! Bilingual (English + Burmese) keyword corpus.
//!
//! Tables are data, not control flow: scan order is declaration order, and
//! that order is the tie-break when a message hits several categories.
//! English keywords are stored lowercase; Burmese has no case.

use super::types::SymptomCategory;

/// One category and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordEntry {
    pub category: SymptomCategory,
    pub keywords: &'static [&'static str],
}

// ── Emergency corpus ────────────────────────────────────────

/// Keywords that short-circuit straight to the emergency branch.
///
/// Deliberately redundant: missing a true emergency is the failure mode
/// that matters, so both apostrophe styles are listed.
pub static EMERGENCY_KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry {
        category: SymptomCategory::ChestPain,
        keywords: &[
            "chest pain",
            "heart attack",
            "ရင်ဘတ်နာ",
            "နှလုံးအောင့်",
            "ရင်ဘတ်ထဲတွင်နာ",
            "နှလုံးထိခိုက်",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Breathing,
        keywords: &[
            "can't breathe",
            "can\u{2019}t breathe",
            "cannot breathe",
            "difficulty breathing",
            "shortness of breath",
            "not breathing",
            "choking",
            "asthma attack",
            "အသက်ရှူမရ",
            "အသက်ရှူကြပ်",
            "အသက်ရှူခက်ခဲ",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Stroke,
        keywords: &[
            "stroke",
            "face drooping",
            "arm weakness",
            "speech difficulty",
            "slurred speech",
            "paralysis",
            "one side numb",
            "လေဖြတ်",
            "မျက်နှာတစ်ဖက်ကျ",
            "စကားမပြော",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Bleeding,
        keywords: &[
            "severe bleeding",
            "bleeding heavily",
            "won't stop bleeding",
            "won\u{2019}t stop bleeding",
            "hemorrhage",
            "blood loss",
            "သွေးထွက်များ",
            "သွေးအများကြီးထွက်",
            "သွေးမတိတ်",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::FeverChild,
        keywords: &[
            "high fever child",
            "baby fever",
            "infant fever",
            "child high temperature",
            "child convulsion",
            "febrile seizure",
            "ကလေးဖျားခြင်း",
            "ကလေးအဖျား",
            "ကလေးတက်ခြင်း",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Consciousness,
        keywords: &[
            "unconscious",
            "loss of consciousness",
            "fainted",
            "passed out",
            "not responding",
            "unresponsive",
            "collapsed",
            "seizure",
            "convulsion",
            "သတိလစ်",
            "မသိမသာ",
            "မေ့သွား",
            "အသိပျက်",
        ],
    },
];

// ── Non-emergency symptom corpus ────────────────────────────

/// Keywords that open a triage questionnaire. Scanned after
/// [`EMERGENCY_KEYWORDS`].
pub static SYMPTOM_KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry {
        category: SymptomCategory::Headache,
        keywords: &[
            "headache",
            "head pain",
            "migraine",
            "head hurts",
            "ခေါင်းကိုက်",
            "ခေါင်းနာ",
            "ခေါင်းတစ်ခြမ်းကိုက်",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Abdominal,
        keywords: &[
            "stomach pain",
            "abdominal pain",
            "belly pain",
            "stomach ache",
            "ache in abdomen",
            "cramps",
            "ဗိုက်နာ",
            "ဝမ်းနာ",
            "အစာအိမ်နာ",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Injury,
        keywords: &[
            "broken bone",
            "fracture",
            "twisted ankle",
            "sprain",
            "wound",
            "cut",
            "burn",
            "fall",
            "accident",
            "injured",
            "အရိုးကျိုး",
            "ဒဏ်ရာ",
            "ပြုတ်ကျ",
            "မီးလောင်",
        ],
    },
    KeywordEntry {
        category: SymptomCategory::Fever,
        keywords: &[
            "fever",
            "high temperature",
            "feeling hot",
            "chills",
            "ဖျား",
            "ကိုယ်ပူ",
            "ချမ်းတုန်",
        ],
    },
];

// ── Hospital search ─────────────────────────────────────────

pub static HOSPITAL_SEARCH_KEYWORDS: &[&str] = &[
    "အနားက ဆေးရုံ",
    "အနီးဆုံး ဆေးရုံ",
    "အနီးဆုံးဆေးရုံ",
    "hospital near me",
    "nearest hospital",
    "closest hospital",
    "find hospital near me",
    "hospitals around me",
    "nearest to me",
    "closest to me",
];

// ── Crisis guard ────────────────────────────────────────────

/// Checked by the chat layer before a questionnaire starts and before a
/// model call. Catches crisis phrasing that has no triage category
/// (self-harm, poisoning).
pub static CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "want to die",
    "heart attack",
    "chest pain",
    "can't breathe",
    "can\u{2019}t breathe",
    "stroke",
    "bleeding heavily",
    "unconscious",
    "overdose",
    "poisoning",
    "emergency",
    "severe pain",
    "choking",
    "သေချင်",
    "အဆိပ်သင့်",
];

/// Every entry a symptom-category scan walks, emergency entries first.
pub fn symptom_scan_order() -> impl Iterator<Item = &'static KeywordEntry> {
    EMERGENCY_KEYWORDS.iter().chain(SYMPTOM_KEYWORDS.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_keyword_lists() -> Vec<&'static [&'static str]> {
        let mut lists: Vec<&'static [&'static str]> =
            symptom_scan_order().map(|e| e.keywords).collect();
        lists.push(HOSPITAL_SEARCH_KEYWORDS);
        lists.push(CRISIS_KEYWORDS);
        lists
    }

    #[test]
    fn scan_order_follows_category_declaration_order() {
        let order: Vec<SymptomCategory> = symptom_scan_order().map(|e| e.category).collect();
        assert_eq!(order, SymptomCategory::all());
    }

    #[test]
    fn emergency_entries_are_emergency_categories() {
        assert!(EMERGENCY_KEYWORDS
            .iter()
            .all(|e| e.category.is_emergency_category()));
        assert!(SYMPTOM_KEYWORDS
            .iter()
            .all(|e| !e.category.is_emergency_category()));
    }

    #[test]
    fn each_category_appears_once() {
        let mut seen = HashSet::new();
        for entry in symptom_scan_order() {
            assert!(seen.insert(entry.category), "duplicate entry for {}", entry.category);
        }
    }

    #[test]
    fn keywords_are_lowercase_and_trimmed() {
        for list in all_keyword_lists() {
            for kw in list {
                assert!(!kw.is_empty());
                assert_eq!(kw.trim(), *kw, "untrimmed keyword: {kw:?}");
                assert_eq!(kw.to_lowercase(), *kw, "keyword not lowercase: {kw:?}");
            }
        }
    }

    #[test]
    fn every_category_has_both_languages() {
        for entry in symptom_scan_order() {
            assert!(
                entry.keywords.iter().any(|k| k.is_ascii()),
                "{} has no English keyword",
                entry.category
            );
            assert!(
                entry.keywords.iter().any(|k| !k.is_ascii()),
                "{} has no Burmese keyword",
                entry.category
            );
        }
    }

    #[test]
    fn hospital_search_does_not_overlap_emergency() {
        for entry in EMERGENCY_KEYWORDS {
            for kw in entry.keywords {
                assert!(!HOSPITAL_SEARCH_KEYWORDS.contains(kw));
            }
        }
    }
}
