use log::{warn, Level};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::scroll_spy::ScrollSpyConfig;
use crate::typing::TypingConfig;

/// Id of the optional `<script type="application/json">` block in
/// index.html carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollSpyConfig,
    pub typing: TypingConfig,
    pub loading_ms: u32,
    pub contact: ContactTiming,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollSpyConfig::default(),
            typing: TypingConfig::default(),
            loading_ms: 2000,
            contact: ContactTiming::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactTiming {
    pub submit_delay_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            reset_delay_ms: 3000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.typing.validate()?;
        Ok(config)
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                warn!("ignoring site config: {}", err);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "scroll": { "offset": 64 }, "typing": { "phrases": ["Red Teamer"] } }"#,
        )
        .unwrap();

        assert_eq!(config.scroll.offset, 64.0);
        assert_eq!(config.scroll.default_id, "home");
        assert_eq!(config.typing.phrases, ["Red Teamer"]);
        assert_eq!(config.typing.type_interval_ms, 80);
        assert_eq!(config.loading_ms, 2000);
        assert_eq!(config.contact, ContactTiming::default());
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn rejects_empty_phrase_list() {
        assert_matches!(
            SiteConfig::from_json(r#"{ "typing": { "phrases": [] } }"#),
            Err(ConfigError::EmptyPhrases)
        );
    }

    #[test]
    fn reports_malformed_json() {
        assert_matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_)));
    }

    #[test]
    fn default_delete_interval_is_half_the_type_interval() {
        assert_eq!(SiteConfig::default().typing.delete_interval(), 40);
    }
}
