//! Runner configuration, read from TOML.
//!
//! Every field is optional:
//!
//! ```toml
//! demos = ["strategy", "builder"]
//! headers = false
//! color = false
//! ```

use crate::demo::Demo;
use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub demos: Vec<Demo>,
    pub headers: bool,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            demos: Demo::ALL.to_vec(),
            headers: true,
            color: true,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
