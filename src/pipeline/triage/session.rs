//! Caller-owned triage session.
//!
//! The engine keeps no session state of its own. The conversation layer
//! holds a `TriageSession`, feeds answers into it, and drops it once a
//! terminal step (emergency or completion) comes back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::evaluate::evaluate;
use super::questions::questions_for;
use super::types::{SymptomCategory, TriageQuestion, TriageResponse, TriageResult};
use super::TriageError;

/// What happens after an answer is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    /// Ask this question next.
    Next(&'static TriageQuestion),
    /// An emergency indicator was answered yes. Session is over.
    Emergency(TriageResult),
    /// Question bank exhausted without an emergency. Session is over.
    Complete(TriageResult),
}

impl SessionStep {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Next(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageSession {
    pub id: Uuid,
    pub category: SymptomCategory,
    pub started_at: DateTime<Utc>,
    responses: Vec<TriageResponse>,
    cursor: usize,
    finished: bool,
}

impl TriageSession {
    /// Open a session, or `None` if the category has no questionnaire.
    pub fn start(category: SymptomCategory) -> Option<Self> {
        if questions_for(category).is_empty() {
            tracing::debug!(%category, "No question set, triage not started");
            return None;
        }

        let session = Self {
            id: Uuid::new_v4(),
            category,
            started_at: Utc::now(),
            responses: Vec::new(),
            cursor: 0,
            finished: false,
        };
        tracing::info!(session_id = %session.id, %category, "Triage session started");
        Some(session)
    }

    pub fn questions(&self) -> &'static [TriageQuestion] {
        questions_for(self.category)
    }

    /// The question awaiting an answer, if the session is still running.
    pub fn current_question(&self) -> Option<&'static TriageQuestion> {
        if self.finished {
            return None;
        }
        self.questions().get(self.cursor)
    }

    pub fn responses(&self) -> &[TriageResponse] {
        &self.responses
    }

    /// `(answered, total)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.responses.len(), self.questions().len())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Verdict over the answers so far.
    pub fn result(&self) -> TriageResult {
        evaluate(&self.responses, self.category)
    }

    /// Record an answer to the current question.
    ///
    /// Re-evaluates after every answer so an emergency ends the session
    /// early instead of waiting for the remaining questions.
    pub fn answer(&mut self, question_id: &str, answer: bool) -> Result<SessionStep, TriageError> {
        let question = self
            .current_question()
            .ok_or(TriageError::SessionFinished(self.id))?;

        if question.id != question_id {
            return Err(TriageError::UnexpectedQuestion {
                expected: question.id.to_string(),
                got: question_id.to_string(),
            });
        }

        self.responses.push(question.respond(answer));
        self.cursor += 1;

        let result = self.result();

        if result.is_emergency {
            self.finished = true;
            tracing::warn!(
                session_id = %self.id,
                category = %self.category,
                severity = %result.severity,
                answered = result.answered_count,
                "Triage ended early: emergency indicator"
            );
            return Ok(SessionStep::Emergency(result));
        }

        match self.questions().get(self.cursor) {
            Some(next) => Ok(SessionStep::Next(next)),
            None => {
                self.finished = true;
                tracing::info!(
                    session_id = %self.id,
                    category = %self.category,
                    severity = %result.severity,
                    "Triage complete"
                );
                Ok(SessionStep::Complete(result))
            }
        }
    }
}
