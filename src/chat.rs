//! Conversation controller: wires the triage engine and the reply sanitizer
//! around an opaque language-model client.
//!
//! All conversation state lives in a caller-owned [`ChatState`]; the
//! controller itself only borrows the model client and config.
//!
//! Flow per user message:
//! - pre-checks (emergency, hospital search, symptom triage)
//! - crisis guard, also ahead of any questionnaire
//! - offline check
//! - model call, audit, sanitize, disclaimer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ChatConfig, Lang};
use crate::pipeline::safety::messages::{with_disclaimer, SYSTEM_PROMPT};
use crate::pipeline::safety::output_sanitize::{audit_blocked_content, sanitize_ai_response};
use crate::pipeline::triage::matcher::is_crisis_text;
use crate::pipeline::triage::precheck::run_pre_checks;
use crate::pipeline::triage::session::{SessionStep, TriageSession};
use crate::pipeline::triage::types::{PreCheckResult, Severity, SymptomCategory, TriageQuestion};
use crate::pipeline::triage::TriageError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Model request failed: {0}")]
    Model(String),

    #[error("A triage questionnaire is in progress; answer it before sending text")]
    TriageInProgress,

    #[error("No triage questionnaire is active")]
    NoActiveTriage,

    #[error(transparent)]
    Triage(#[from] TriageError),
}

/// Language-model client seam. Transport, provider and retries are the
/// implementor's business.
pub trait ChatGenerate {
    fn generate(&self, system: &str, history: &[ChatTurn], message: &str) -> Result<String, ChatError>;
}

// ═══════════════════════════════════════════
// State
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatTurn {
    fn now(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Everything the controller needs between messages. Owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub session: Option<TriageSession>,
    pub history: Vec<ChatTurn>,
    /// Set once an emergency is detected; the UI shows its emergency surface.
    pub emergency_mode: bool,
    pub offline: bool,
}

impl ChatState {
    pub fn active_category(&self) -> Option<SymptomCategory> {
        self.session.as_ref().map(|s| s.category)
    }
}

// ═══════════════════════════════════════════
// Replies
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatReply {
    /// Blank input; nothing to do.
    Ignored,
    Emergency { message: String },
    HospitalSearch { message: String },
    Question {
        intro: Option<String>,
        question: &'static TriageQuestion,
        number: usize,
        total: usize,
    },
    TriageSummary { severity: Severity, message: String },
    Offline { message: String },
    Answer { text: String },
    ModelUnavailable { message: String },
}

impl ChatReply {
    /// Text as shown in the conversation, if any.
    pub fn display_text(&self, lang: Lang) -> Option<String> {
        match self {
            Self::Ignored => None,
            Self::Emergency { message }
            | Self::HospitalSearch { message }
            | Self::TriageSummary { message, .. }
            | Self::Offline { message }
            | Self::ModelUnavailable { message } => Some(message.clone()),
            Self::Answer { text } => Some(text.clone()),
            Self::Question { intro, question, .. } => Some(match intro {
                Some(intro) => format!("{intro}\n\n{}", question.prompt(lang)),
                None => question.prompt(lang).to_string(),
            }),
        }
    }
}

// ═══════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════

pub struct ChatController<'a, G: ChatGenerate> {
    generator: &'a G,
    config: ChatConfig,
}

impl<'a, G: ChatGenerate> ChatController<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self {
            generator,
            config: ChatConfig::default(),
        }
    }

    pub fn with_config(generator: &'a G, config: ChatConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Handle one submitted user message.
    pub fn handle_message(&self, state: &mut ChatState, text: &str) -> Result<ChatReply, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(ChatReply::Ignored);
        }
        if state.session.is_some() {
            return Err(ChatError::TriageInProgress);
        }

        state.history.push(ChatTurn::now(Speaker::User, text));

        let reply = match run_pre_checks(text) {
            PreCheckResult::Emergency => self.emergency(state, EmergencySource::Message),
            PreCheckResult::HospitalSearch => ChatReply::HospitalSearch {
                message: localized(
                    self.config.lang,
                    "အနီးဆုံး ဆေးရုံများကို ရှာဖွေပေးပါမည်...",
                    "Searching for nearby hospitals...",
                ),
            },
            PreCheckResult::Triage { category } => {
                if let Some(reply) = self.crisis_guard(state, text) {
                    reply
                } else if let Some(reply) = self.start_triage(state, category) {
                    reply
                } else {
                    self.model_reply(state, text)
                }
            }
            PreCheckResult::Normal => self.model_reply(state, text),
        };

        self.record(state, &reply);
        Ok(reply)
    }

    /// Record a yes/no answer for the active triage question.
    pub fn handle_answer(
        &self,
        state: &mut ChatState,
        question_id: &str,
        answer: bool,
    ) -> Result<ChatReply, ChatError> {
        let session = state.session.as_mut().ok_or(ChatError::NoActiveTriage)?;
        let step = session.answer(question_id, answer)?;
        let (answered, total) = session.progress();

        let reply = match step {
            SessionStep::Next(question) => ChatReply::Question {
                intro: None,
                question,
                number: answered + 1,
                total,
            },
            SessionStep::Emergency(_) => {
                state.session = None;
                self.emergency(state, EmergencySource::TriageAnswers)
            }
            SessionStep::Complete(result) => {
                state.session = None;
                ChatReply::TriageSummary {
                    severity: result.severity,
                    message: severity_advice(result.severity, self.config.lang),
                }
            }
        };

        self.record(state, &reply);
        Ok(reply)
    }

    fn start_triage(&self, state: &mut ChatState, category: SymptomCategory) -> Option<ChatReply> {
        let session = TriageSession::start(category)?;
        let question = session.current_question()?;
        let total = session.questions().len();
        state.session = Some(session);

        Some(ChatReply::Question {
            intro: Some(localized(
                self.config.lang,
                "သင့်ရောဂါလက္ခဏာကို ပိုမိုနားလည်ရန် မေးခွန်းအချို့ မေးပါရစေ။",
                "Let me ask you a few questions to better understand your symptoms.",
            )),
            question,
            number: 1,
            total,
        })
    }

    fn emergency(&self, state: &mut ChatState, source: EmergencySource) -> ChatReply {
        state.emergency_mode = true;
        let number = &self.config.emergency_number;
        let message = match source {
            EmergencySource::Message => localized(
                self.config.lang,
                &format!(
                    "အရေးပေါ် အခြေအနေ ဖြစ်နိုင်ပါသည်။ ကျေးဇူးပြု၍ {number} သို့ ချက်ချင်းဖုန်းခေါ်ပါ သို့မဟုတ် အနီးဆုံးဆေးရုံသို့ သွားပါ။"
                ),
                &format!(
                    "This may be an emergency. Please call {number} immediately or go to the nearest hospital."
                ),
            ),
            EmergencySource::TriageAnswers => localized(
                self.config.lang,
                &format!(
                    "သင့်ဖြေဆိုချက်များအရ အရေးပေါ် ဆေးကုသမှု လိုအပ်နိုင်ပါသည်။ {number} သို့ ဖုန်းခေါ်ပါ။"
                ),
                &format!(
                    "Based on your answers, you may need emergency medical care. Please call {number}."
                ),
            ),
        };
        ChatReply::Emergency { message }
    }

    /// Self-harm or poisoning phrasing goes straight to the emergency reply,
    /// even when the message also names a symptom.
    fn crisis_guard(&self, state: &mut ChatState, text: &str) -> Option<ChatReply> {
        if !is_crisis_text(text) {
            return None;
        }
        tracing::warn!("Crisis phrasing caught before triage or model call");
        Some(self.emergency(state, EmergencySource::Message))
    }

    fn model_reply(&self, state: &mut ChatState, text: &str) -> ChatReply {
        let lang = self.config.lang;

        if let Some(reply) = self.crisis_guard(state, text) {
            return reply;
        }

        if state.offline {
            return ChatReply::Offline {
                message: localized(
                    lang,
                    "Internet ချိတ်ဆက်မှု မရှိပါ။ AI chat ကို အသုံးပြုရန် Internet လိုအပ်ပါသည်။",
                    "No internet connection. AI chat requires internet.",
                ),
            };
        }

        // The current user turn is the last history entry; send it separately.
        let prior = &state.history[..state.history.len().saturating_sub(1)];

        match self.generator.generate(SYSTEM_PROMPT, prior, text) {
            Ok(raw) => {
                let body = if raw.trim().is_empty() {
                    tracing::warn!("Model returned an empty reply");
                    localized(
                        lang,
                        "ဤမေးခွန်းကို ဖြေကြားရန် မသင့်လျော်ပါ။ ဆရာဝန်နှင့် တိုက်ရိုက် တိုင်ပင်ပါ။",
                        "I cannot answer this question. Please consult a doctor directly.",
                    )
                } else {
                    let raw = raw.trim();
                    audit_blocked_content(raw);
                    sanitize_ai_response(raw)
                };
                ChatReply::Answer {
                    text: with_disclaimer(&body, lang),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Model request failed");
                ChatReply::ModelUnavailable {
                    message: with_disclaimer(
                        &localized(
                            lang,
                            "တောင်းပန်ပါသည်။ အမှားတစ်ခု ဖြစ်ပွားခဲ့ပါသည်။ ထပ်မံကြိုးစားပါ။",
                            "Sorry, something went wrong. Please check your connection and try again.",
                        ),
                        lang,
                    ),
                }
            }
        }
    }

    fn record(&self, state: &mut ChatState, reply: &ChatReply) {
        if let Some(text) = reply.display_text(self.config.lang) {
            state.history.push(ChatTurn::now(Speaker::Assistant, text));
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EmergencySource {
    Message,
    TriageAnswers,
}

fn localized(lang: Lang, my: &str, en: &str) -> String {
    match lang {
        Lang::My => format!("{my}\n{en}"),
        Lang::En => en.to_string(),
    }
}

/// Advice shown when a questionnaire completes without an emergency.
/// Critical never reaches here in practice; it shares the high advice.
pub fn severity_advice(severity: Severity, lang: Lang) -> String {
    match severity {
        Severity::Low => localized(
            lang,
            "သင့်ရောဂါလက္ခဏာများသည် ပြင်းထန်မှု နည်းပါးနေပါသည်။ အိမ်တွင် အနားယူ၍ စောင့်ကြည့်ပါ။",
            "Your symptoms appear to be mild. Rest at home and monitor.",
        ),
        Severity::Medium => localized(
            lang,
            "သင့်ရောဂါလက္ခဏာများသည် အလယ်အလတ် ပြင်းထန်ပါသည်။ ဆရာဝန်နှင့် တိုင်ပင်ပါ။",
            "Your symptoms are moderate. Please consult a doctor.",
        ),
        Severity::High | Severity::Critical => localized(
            lang,
            "သင့်ရောဂါလက္ခဏာများသည် ပြင်းထန်ပါသည်။ ချက်ချင်း ဆေးရုံသို့ သွားပါ။",
            "Your symptoms are concerning. Please visit a hospital soon.",
        ),
    }
}
