use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("no such factory: '{selector}' (known: {known})")]
    FactoryNotFound { selector: String, known: String },

    #[error("unknown transport kind: '{kind}'")]
    UnknownTransport { kind: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {message}")]
    Config { message: String },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PatternError {
    pub fn factory_not_found(selector: impl Into<String>, known: &[&str]) -> Self {
        Self::FactoryNotFound {
            selector: selector.into(),
            known: known.join(", "),
        }
    }

    pub fn unknown_transport(kind: impl Into<String>) -> Self {
        Self::UnknownTransport { kind: kind.into() }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::config(err.to_string())
    }
}
