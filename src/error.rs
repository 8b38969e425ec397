use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("typing sequencer needs at least one phrase")]
    EmptyPhrases,
    #[error("typing interval must be greater than zero")]
    ZeroInterval,
    #[error("invalid site config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
