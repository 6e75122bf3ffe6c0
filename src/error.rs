use std::path::PathBuf;
use thiserror::Error;

// The snippets themselves are total; only the runner around them can fail.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown demo '{name}' (expected one of: {expected})")]
    UnknownDemo { name: String, expected: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl PatternError {
    pub fn unknown_demo(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownDemo {
            name: name.into(),
            expected: expected.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
