use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "MyanHealth";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Myanmar ambulance line.
pub const EMERGENCY_NUMBER: &str = "192";

/// Env override for the reply language ("my" or "en").
pub const LANG_ENV: &str = "MYANHEALTH_LANG";

/// Env override for the emergency number shown in emergency replies.
pub const EMERGENCY_NUMBER_ENV: &str = "MYANHEALTH_EMERGENCY_NUMBER";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,myanhealth_lib=debug"
}

/// Reply language. Burmese is the primary language of the user base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    #[default]
    My,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::My => "my",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "my" | "mm" | "burmese" => Ok(Self::My),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("Invalid language: {other}")),
        }
    }
}

/// Settings the chat controller needs from the host app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub lang: Lang,
    pub emergency_number: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            emergency_number: EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl ChatConfig {
    /// Build from environment overrides, falling back to defaults.
    ///
    /// An unparseable language is logged and ignored rather than rejected.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(LANG_ENV) {
            match raw.parse::<Lang>() {
                Ok(lang) => config.lang = lang,
                Err(e) => tracing::warn!(error = %e, "Ignoring {LANG_ENV}"),
            }
        }

        if let Ok(number) = std::env::var(EMERGENCY_NUMBER_ENV) {
            let number = number.trim();
            if !number.is_empty() {
                config.emergency_number = number.to_string();
            }
        }

        config
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_myanhealth() {
        assert_eq!(APP_NAME, "MyanHealth");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_config_uses_burmese_and_192() {
        let config = ChatConfig::default();
        assert_eq!(config.lang, Lang::My);
        assert_eq!(config.emergency_number, "192");
    }

    #[test]
    fn lang_parses_aliases() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("English".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!(" my ".parse::<Lang>().unwrap(), Lang::My);
        assert_eq!("burmese".parse::<Lang>().unwrap(), Lang::My);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn lang_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Lang::My).unwrap(), "\"my\"");
        assert_eq!(serde_json::to_string(&Lang::En).unwrap(), "\"en\"");
    }

    #[test]
    fn with_lang_overrides() {
        let config = ChatConfig::default().with_lang(Lang::En);
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.emergency_number, EMERGENCY_NUMBER);
    }

    #[test]
    fn default_log_filter_targets_crate() {
        assert!(default_log_filter().contains("myanhealth_lib"));
    }
}
