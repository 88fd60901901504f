use super::matcher::{find_emergency_keyword, is_hospital_search_text, match_category};
use super::types::PreCheckResult;

/// Decide the conversational branch for one user message.
///
/// Order is fixed and first match wins: emergency, hospital search,
/// symptom category, normal chat. Emergency detection must never be
/// shadowed by a hospital or symptom keyword in the same message.
pub fn run_pre_checks(user_message: &str) -> PreCheckResult {
    let result = if let Some(hit) = find_emergency_keyword(user_message) {
        tracing::warn!(
            category = %hit.category,
            keyword = hit.keyword,
            "Pre-check: emergency keyword"
        );
        PreCheckResult::Emergency
    } else if is_hospital_search_text(user_message) {
        PreCheckResult::HospitalSearch
    } else if let Some(category) = match_category(user_message) {
        PreCheckResult::Triage { category }
    } else {
        PreCheckResult::Normal
    };

    tracing::debug!(
        kind = result.kind(),
        category = ?result.category(),
        "Pre-check complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::triage::types::SymptomCategory;

    #[test]
    fn chest_pain_and_breathing_is_emergency() {
        assert_eq!(
            run_pre_checks("I have chest pain and can't breathe"),
            PreCheckResult::Emergency
        );
    }

    #[test]
    fn nearest_hospital_is_hospital_search() {
        assert_eq!(
            run_pre_checks("where is the nearest hospital"),
            PreCheckResult::HospitalSearch
        );
    }

    #[test]
    fn headache_starts_triage() {
        assert_eq!(
            run_pre_checks("I have a headache"),
            PreCheckResult::Triage {
                category: SymptomCategory::Headache
            }
        );
    }

    #[test]
    fn plain_question_is_normal() {
        assert_eq!(run_pre_checks("How many hours should I sleep?"), PreCheckResult::Normal);
        assert_eq!(run_pre_checks(""), PreCheckResult::Normal);
    }

    // =================================================================
    // PRECEDENCE
    // =================================================================

    #[test]
    fn emergency_beats_hospital_search() {
        let texts = [
            "chest pain, nearest hospital?",
            "stroke - find hospital near me",
            "သတိလစ်သွားတယ် အနီးဆုံးဆေးရုံ",
            "my baby fever is bad, closest hospital please",
            "NOT BREATHING where is the closest hospital",
        ];
        for text in texts {
            assert_eq!(run_pre_checks(text), PreCheckResult::Emergency, "{text}");
        }
    }

    #[test]
    fn every_emergency_keyword_with_hospital_phrase_is_emergency() {
        use crate::pipeline::triage::keywords::{EMERGENCY_KEYWORDS, HOSPITAL_SEARCH_KEYWORDS};

        for entry in EMERGENCY_KEYWORDS {
            for kw in entry.keywords {
                for phrase in HOSPITAL_SEARCH_KEYWORDS {
                    let text = format!("{phrase} {kw}");
                    assert_eq!(run_pre_checks(&text), PreCheckResult::Emergency, "{text}");
                }
            }
        }
    }

    #[test]
    fn hospital_search_beats_symptom() {
        assert_eq!(
            run_pre_checks("headache, hospital near me"),
            PreCheckResult::HospitalSearch
        );
    }

    #[test]
    fn burmese_symptom_starts_triage() {
        assert_eq!(
            run_pre_checks("ဗိုက်နာတယ်"),
            PreCheckResult::Triage {
                category: SymptomCategory::Abdominal
            }
        );
    }
}
