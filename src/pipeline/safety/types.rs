use serde::{Deserialize, Serialize};

/// Which pattern list a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSet {
    /// Narrow list: a hit makes the sanitizer append the safety note.
    Dangerous,
    /// Broader list behind `contains_blocked_content`.
    Blocked,
}

/// Classification of what kind of unsafe content was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// "take 500mg ... twice daily"
    DosageInstruction,
    /// "dosage is 10 mg"
    DosageAssignment,
    /// "I diagnose you with ..." / "you have <condition>"
    DiagnosticAssertion,
    /// "prescribe you ..."
    Prescription,
}

/// A span of model output that matched a safety pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerousMatch {
    pub set: PatternSet,
    pub category: ContentCategory,
    /// The specific text span that triggered the match.
    pub matched_text: String,
    /// Byte offset in the scanned text where the match starts.
    pub offset: usize,
    /// Length of the matched span in bytes.
    pub length: usize,
    /// Human-readable explanation for audit log.
    pub reason: String,
}
