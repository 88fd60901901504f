use super::questions::find_question;
use super::types::{Severity, SymptomCategory, TriageResponse, TriageResult};

/// Positive answers needed to raise severity by one step.
const POSITIVE_THRESHOLD: usize = 2;

/// Score the answers recorded for `category` into a severity verdict.
///
/// Responses for other categories are ignored. An emergency is any "yes"
/// to a question the bank marks as an emergency indicator; answers to
/// question ids the bank doesn't know count as positives but never as
/// indicators. Pure: no state, no side effects.
pub fn evaluate(responses: &[TriageResponse], category: SymptomCategory) -> TriageResult {
    let scoped: Vec<&TriageResponse> = responses
        .iter()
        .filter(|r| r.category == category)
        .collect();

    let positive_count = scoped.iter().filter(|r| r.answer).count();

    let emergency_triggered = scoped.iter().any(|r| {
        r.answer
            && find_question(category, &r.question_id)
                .is_some_and(|q| q.is_emergency_indicator)
    });

    let severity = match (emergency_triggered, positive_count >= POSITIVE_THRESHOLD) {
        (true, true) => Severity::Critical,
        (true, false) => Severity::High,
        (false, true) => Severity::Medium,
        (false, false) => Severity::Low,
    };

    TriageResult {
        is_emergency: emergency_triggered,
        severity,
        category,
        answered_count: scoped.len(),
        positive_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::triage::questions::questions_for;

    fn answer(category: SymptomCategory, id: &str, yes: bool) -> TriageResponse {
        let question = find_question(category, id).unwrap();
        question.respond(yes)
    }

    // =================================================================
    // DECISION TABLE
    // =================================================================

    #[test]
    fn empty_is_low_for_every_category() {
        for category in SymptomCategory::all() {
            let result = evaluate(&[], *category);
            assert_eq!(
                result,
                TriageResult {
                    is_emergency: false,
                    severity: Severity::Low,
                    category: *category,
                    answered_count: 0,
                    positive_count: 0,
                }
            );
        }
    }

    #[test]
    fn headache_sudden_and_stiff_neck_is_critical() {
        let responses = vec![
            answer(SymptomCategory::Headache, "hd_1", true),
            answer(SymptomCategory::Headache, "hd_2", true),
        ];
        let result = evaluate(&responses, SymptomCategory::Headache);
        assert!(result.is_emergency);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.answered_count, 2);
        assert_eq!(result.positive_count, 2);
    }

    #[test]
    fn single_indicator_is_high() {
        let responses = vec![
            answer(SymptomCategory::Headache, "hd_1", true),
            answer(SymptomCategory::Headache, "hd_2", false),
        ];
        let result = evaluate(&responses, SymptomCategory::Headache);
        assert!(result.is_emergency);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.positive_count, 1);
    }

    #[test]
    fn indicator_plus_plain_positive_is_critical() {
        let responses = vec![
            answer(SymptomCategory::Abdominal, "ab_3", true),
            answer(SymptomCategory::Abdominal, "ab_2", true),
        ];
        let result = evaluate(&responses, SymptomCategory::Abdominal);
        assert_eq!(result.severity, Severity::Critical);
    }

    #[test]
    fn two_plain_positives_is_medium() {
        let responses = vec![
            answer(SymptomCategory::Fever, "fv_1", true),
            answer(SymptomCategory::Fever, "fv_2", true),
            answer(SymptomCategory::Fever, "fv_3", false),
        ];
        let result = evaluate(&responses, SymptomCategory::Fever);
        assert!(!result.is_emergency);
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.answered_count, 3);
    }

    #[test]
    fn one_plain_positive_is_low() {
        let responses = vec![answer(SymptomCategory::Fever, "fv_2", true)];
        let result = evaluate(&responses, SymptomCategory::Fever);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.positive_count, 1);
    }

    #[test]
    fn indicator_answered_no_is_not_emergency() {
        let responses: Vec<_> = questions_for(SymptomCategory::ChestPain)
            .iter()
            .map(|q| q.respond(false))
            .collect();
        let result = evaluate(&responses, SymptomCategory::ChestPain);
        assert!(!result.is_emergency);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.answered_count, 4);
    }

    #[test]
    fn no_indicator_questions_never_emergency() {
        // Every non-indicator question in every bank answered yes.
        for category in SymptomCategory::all() {
            let responses: Vec<_> = questions_for(*category)
                .iter()
                .filter(|q| !q.is_emergency_indicator)
                .map(|q| q.respond(true))
                .collect();
            assert!(!evaluate(&responses, *category).is_emergency, "{category}");
        }
    }

    #[test]
    fn two_indicators_critical_in_every_category_that_has_them() {
        for category in SymptomCategory::all() {
            let indicators: Vec<_> = questions_for(*category)
                .iter()
                .filter(|q| q.is_emergency_indicator)
                .collect();
            if indicators.len() < 2 {
                continue;
            }
            let two = vec![indicators[0].respond(true), indicators[1].respond(true)];
            assert_eq!(evaluate(&two, *category).severity, Severity::Critical);

            let one = vec![indicators[0].respond(true)];
            assert_eq!(evaluate(&one, *category).severity, Severity::High);
        }
    }

    // =================================================================
    // DEFENSIVE SCOPING
    // =================================================================

    #[test]
    fn other_category_responses_ignored() {
        let responses = vec![
            answer(SymptomCategory::ChestPain, "cp_1", true),
            answer(SymptomCategory::ChestPain, "cp_2", true),
            answer(SymptomCategory::Fever, "fv_1", true),
        ];
        let result = evaluate(&responses, SymptomCategory::Fever);
        assert!(!result.is_emergency);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.answered_count, 1);
    }

    #[test]
    fn mislabelled_question_id_is_not_an_indicator() {
        // Tagged headache but pointing at a chest pain id.
        let response = TriageResponse {
            question_id: "cp_1".into(),
            answer: true,
            category: SymptomCategory::Headache,
            key: "severe_pain".into(),
        };
        let result = evaluate(&[response], SymptomCategory::Headache);
        assert!(!result.is_emergency);
        assert_eq!(result.positive_count, 1);
    }

    #[test]
    fn category_without_bank_is_never_emergency() {
        let response = TriageResponse {
            question_id: "anything".into(),
            answer: true,
            category: SymptomCategory::Stroke,
            key: "anything".into(),
        };
        let result = evaluate(&[response], SymptomCategory::Stroke);
        assert!(!result.is_emergency);
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let responses = vec![
            answer(SymptomCategory::Injury, "in_4", true),
            answer(SymptomCategory::Injury, "in_3", true),
        ];
        let first = evaluate(&responses, SymptomCategory::Injury);
        let second = evaluate(&responses, SymptomCategory::Injury);
        assert_eq!(first, second);
        assert_eq!(responses.len(), 2);
    }
}
