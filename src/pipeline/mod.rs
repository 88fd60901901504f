pub mod triage; // Keyword pre-checks, questionnaires, severity
pub mod safety; // Model reply sanitization and fixed safety text
