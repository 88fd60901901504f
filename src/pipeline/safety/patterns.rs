use std::sync::LazyLock;

use regex::Regex;

use super::types::{ContentCategory, DangerousMatch, PatternSet};

/// A compiled pattern with its match metadata.
struct SafetyPattern {
    regex: Regex,
    category: ContentCategory,
    description: &'static str,
}

/// Explicit, syntactically recognizable violations only. Each dosage
/// pattern needs a number (or range) plus a drug unit, plus a frequency
/// word for instructions, so general drug information passes untouched.
/// Grams are not a drug unit here: "take 25 g of fiber daily" is diet advice.
static DANGEROUS_PATTERNS: LazyLock<Vec<SafetyPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)\btake\s+\d+(?:\.\d+)?(?:\s*[-–]\s*\d+(?:\.\d+)?)?\s*(?:mg|mcg|ml|tablets?|pills?|capsules?)\b[^.!?\n]*?\b(?:once|twice|three\s+times|daily|every|a\s+day|per\s+day)\b",
            ContentCategory::DosageInstruction,
            "Dosage instruction: 'take N mg ... daily'",
        ),
        pattern(
            r"(?i)\b(?:dosage|dose)\s*(?:is|:)\s*\d+(?:\.\d+)?\s*(?:mg|mcg|ml)\b",
            ContentCategory::DosageAssignment,
            "Dosage assignment: 'dosage is N mg'",
        ),
        pattern(
            r"(?i)\bI\s+diagnose\s+you\s+with\b",
            ContentCategory::DiagnosticAssertion,
            "First-person diagnosis: 'I diagnose you with'",
        ),
    ]
});

/// Stricter list for callers that want to flag any prescriptive or
/// diagnostic phrasing, not just explicit dosages.
static BLOCKED_PATTERNS: LazyLock<Vec<SafetyPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)\bprescri(?:be|ption)\s+(?:you|the\s+patient)\b",
            ContentCategory::Prescription,
            "Prescription: 'prescribe you'",
        ),
        pattern(
            r"(?i)\btake\s+\d+\s*(?:mg|ml|tablet|pill|capsule)",
            ContentCategory::DosageInstruction,
            "Dosage instruction: 'take N mg'",
        ),
        pattern(
            r"(?i)\bdosage\s*(?:is|:|\s)\s*\d+",
            ContentCategory::DosageAssignment,
            "Dosage assignment: 'dosage N'",
        ),
        pattern(
            r"(?i)\d+\s*(?:mg|ml)\s+(?:once|twice|three\s+times|daily)\b",
            ContentCategory::DosageInstruction,
            "Dose frequency: 'N mg twice'",
        ),
        pattern(
            r"(?i)\byou\s+(?:have|are\s+(?:suffering|diagnosed))\s+(?:with\s+)?[a-z]",
            ContentCategory::DiagnosticAssertion,
            "Direct diagnosis: 'you have [condition]'",
        ),
        pattern(
            r"(?i)\b(?:my|your)\s+diagnosis\s+is\b",
            ContentCategory::DiagnosticAssertion,
            "Diagnosis statement: 'your diagnosis is'",
        ),
        pattern(
            r"(?i)\bI\s+diagnose\s+(?:you|this)\b",
            ContentCategory::DiagnosticAssertion,
            "First-person diagnosis: 'I diagnose'",
        ),
    ]
});

fn pattern(regex_str: &str, category: ContentCategory, description: &'static str) -> SafetyPattern {
    SafetyPattern {
        regex: Regex::new(regex_str).expect("Invalid safety regex pattern"),
        category,
        description,
    }
}

fn scan(text: &str, patterns: &[SafetyPattern], set: PatternSet) -> Vec<DangerousMatch> {
    let mut matches = Vec::new();

    for sp in patterns {
        for mat in sp.regex.find_iter(text) {
            matches.push(DangerousMatch {
                set,
                category: sp.category,
                matched_text: mat.as_str().to_string(),
                offset: mat.start(),
                length: mat.len(),
                reason: sp.description.to_string(),
            });
        }
    }

    deduplicate_matches(&mut matches);
    matches
}

/// Scan model output against the dangerous-content list.
pub fn scan_dangerous_content(text: &str) -> Vec<DangerousMatch> {
    scan(text, &DANGEROUS_PATTERNS, PatternSet::Dangerous)
}

/// Scan model output against the broader blocked-content list.
pub fn scan_blocked_content(text: &str) -> Vec<DangerousMatch> {
    scan(text, &BLOCKED_PATTERNS, PatternSet::Blocked)
}

pub fn contains_dangerous_content(text: &str) -> bool {
    DANGEROUS_PATTERNS.iter().any(|sp| sp.regex.is_match(text))
}

pub fn contains_blocked_content(text: &str) -> bool {
    BLOCKED_PATTERNS.iter().any(|sp| sp.regex.is_match(text))
}

/// Drop matches whose span lies inside an earlier, longer match, so each
/// flagged phrase is reported once. Partial overlaps are kept.
pub fn deduplicate_matches(matches: &mut Vec<DangerousMatch>) {
    matches.sort_by_key(|m| (m.offset, std::cmp::Reverse(m.length)));

    let mut covered_until: Option<usize> = None;
    matches.retain(|m| {
        let end = m.offset + m.length;
        match covered_until {
            Some(limit) if end <= limit => false,
            _ => {
                covered_until = Some(covered_until.map_or(end, |limit| limit.max(end)));
                true
            }
        }
    });
}
