//! Post-model reply sanitization.
//!
//! Best-effort heuristic: only explicit, syntactically recognizable dosage
//! instructions and first-person diagnoses are caught. Flagged replies keep
//! their text; the safety note is appended rather than replacing anything.

use super::messages::SAFETY_NOTE;
use super::patterns::{
    contains_blocked_content, contains_dangerous_content, scan_blocked_content,
    scan_dangerous_content,
};
use super::types::DangerousMatch;

/// Append the bilingual safety note when the reply contains dangerous
/// content. Clean text is returned unchanged.
///
/// Idempotent: a reply already ending with the note is not noted twice.
pub fn sanitize_ai_response(text: &str) -> String {
    if text.ends_with(SAFETY_NOTE) {
        return text.to_string();
    }

    if !contains_dangerous_content(text) {
        return text.to_string();
    }

    let matches = scan_dangerous_content(text);

    for m in &matches {
        tracing::debug!(
            category = ?m.category,
            reason = %m.reason,
            "Dangerous content in model reply"
        );
    }
    tracing::warn!(
        match_count = matches.len(),
        "Sanitizer: safety note appended"
    );

    format!("{text}\n\n{SAFETY_NOTE}")
}

/// Log-only pass over the broader blocked list. Never alters the reply;
/// returns the distinct flagged spans so callers can count them.
pub fn audit_blocked_content(text: &str) -> Vec<DangerousMatch> {
    if !contains_blocked_content(text) {
        return Vec::new();
    }

    let matches = scan_blocked_content(text);
    for m in &matches {
        tracing::info!(
            category = ?m.category,
            offset = m.offset,
            reason = %m.reason,
            "Blocked phrasing in model reply (audit only)"
        );
    }
    matches
}
