use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TriageError;
use crate::config::Lang;

// ═══════════════════════════════════════════
// Symptom categories
// ═══════════════════════════════════════════

/// Closed set of symptom categories, in corpus-declaration order.
///
/// The first six are emergency categories: their keywords trigger the
/// emergency branch directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    ChestPain,
    Breathing,
    Stroke,
    Bleeding,
    FeverChild,
    Consciousness,
    Headache,
    Abdominal,
    Injury,
    Fever,
}

impl SymptomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChestPain => "chest_pain",
            Self::Breathing => "breathing",
            Self::Stroke => "stroke",
            Self::Bleeding => "bleeding",
            Self::FeverChild => "fever_child",
            Self::Consciousness => "consciousness",
            Self::Headache => "headache",
            Self::Abdominal => "abdominal",
            Self::Injury => "injury",
            Self::Fever => "fever",
        }
    }

    pub fn all() -> &'static [SymptomCategory] {
        &[
            Self::ChestPain,
            Self::Breathing,
            Self::Stroke,
            Self::Bleeding,
            Self::FeverChild,
            Self::Consciousness,
            Self::Headache,
            Self::Abdominal,
            Self::Injury,
            Self::Fever,
        ]
    }

    /// Whether keywords of this category appear in the emergency corpus.
    pub fn is_emergency_category(&self) -> bool {
        matches!(
            self,
            Self::ChestPain
                | Self::Breathing
                | Self::Stroke
                | Self::Bleeding
                | Self::FeverChild
                | Self::Consciousness
        )
    }
}

impl std::fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SymptomCategory {
    type Err = TriageError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TriageError::UnknownCategory(s.to_string()))
    }
}

// ═══════════════════════════════════════════
// Questions and answers
// ═══════════════════════════════════════════

/// A yes/no triage question. Static data owned by the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageQuestion {
    pub id: &'static str,
    pub category: SymptomCategory,
    /// Burmese prompt.
    pub prompt_primary: &'static str,
    /// English prompt.
    pub prompt_secondary: &'static str,
    /// Semantic answer slot name.
    pub key: &'static str,
    pub is_emergency_indicator: bool,
}

impl TriageQuestion {
    pub fn prompt(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::My => self.prompt_primary,
            Lang::En => self.prompt_secondary,
        }
    }

    /// Build the recorded answer for this question.
    pub fn respond(&self, answer: bool) -> TriageResponse {
        TriageResponse {
            question_id: self.id.to_string(),
            answer,
            category: self.category,
            key: self.key.to_string(),
        }
    }
}

/// One answered question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub question_id: String,
    pub answer: bool,
    pub category: SymptomCategory,
    pub key: String,
}

// ═══════════════════════════════════════════
// Verdicts
// ═══════════════════════════════════════════

/// Severity verdict, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of evaluating a response sequence. Computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub is_emergency: bool,
    pub severity: Severity,
    pub category: SymptomCategory,
    pub answered_count: usize,
    pub positive_count: usize,
}

/// Conversational branch chosen for one inbound user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreCheckResult {
    Normal,
    Emergency,
    HospitalSearch,
    Triage { category: SymptomCategory },
}

impl PreCheckResult {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Emergency => "emergency",
            Self::HospitalSearch => "hospital_search",
            Self::Triage { .. } => "triage",
        }
    }

    pub fn category(&self) -> Option<SymptomCategory> {
        match self {
            Self::Triage { category } => Some(*category),
            _ => None,
        }
    }
}

/// Which corpus entry fired, for audit logs. Holds corpus text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub category: SymptomCategory,
    pub keyword: &'static str,
}
