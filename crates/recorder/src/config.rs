use model::env::DYNAMO_TABLE;
use std::fmt::{Display, Formatter};

/// Values resolved once at process start and shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    pub table_name: String,
}

impl RecorderConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name: String = lookup(DYNAMO_TABLE).ok_or(ConfigError::Missing(DYNAMO_TABLE))?;

        if table_name.trim().is_empty() {
            return Err(ConfigError::Empty(DYNAMO_TABLE));
        }

        Ok(RecorderConfig { table_name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Empty(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "Missing {} environment variable", name),
            ConfigError::Empty(name) => write!(f, "Empty {} environment variable", name),
        }
    }
}

impl std::error::Error for ConfigError {}
