use std::env::{self, VarError};
use std::path::PathBuf;

use design_cost::FormCopy;

/// Settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where log output goes; the terminal itself is taken by the form.
    pub log_file: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `design_cost=debug`.
    pub log_filter: String,
    /// Overrides the form title.
    pub title: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let optional = |name: &str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("{name}: {err}")),
        };

        Ok(Self {
            log_file: optional("DESIGN_COST_LOG_FILE")?
                .unwrap_or_else(|| "design-cost.log".to_string())
                .into(),
            log_filter: optional("DESIGN_COST_LOG")?.unwrap_or_else(|| "info".to_string()),
            title: optional("DESIGN_COST_TITLE")?.filter(|title| !title.trim().is_empty()),
        })
    }

    pub fn copy(&self) -> FormCopy {
        match &self.title {
            Some(title) => FormCopy::new().with_title(title.clone()),
            None => FormCopy::new(),
        }
    }
}
