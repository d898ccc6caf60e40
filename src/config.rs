// File: ./src/config.rs
// Settings file: persisted mode and suggestion tunables.
use crate::context::AppContext;
use crate::model::Mode;
use crate::model::suggest::{DEFAULT_SUGGESTION_LIMIT, SuggestOptions};
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

fn default_max_suggestions() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Tag words (no `#`) offered in create mode after the built-in ones.
    #[serde(default)]
    pub extra_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_suggestions: DEFAULT_SUGGESTION_LIMIT,
            extra_tags: Vec::new(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        let contents = LocalStorage::read_locked(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?
            .ok_or_else(|| anyhow::anyhow!("Config file not found"))?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults. Parse errors are
    /// still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file yet, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        })
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Persists a new mode and returns it.
    pub fn set_mode(ctx: &dyn AppContext, mode: Mode) -> Result<Mode> {
        let mut config = Self::load_or_default(ctx)?;
        config.mode = mode;
        config.save(ctx)?;
        Ok(mode)
    }

    pub fn toggle_mode(ctx: &dyn AppContext) -> Result<Mode> {
        let current = Self::load_or_default(ctx)?.mode;
        Self::set_mode(ctx, current.toggled())
    }

    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            limit: self.max_suggestions,
            extra_tags: self.extra_tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_file_means_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn test_mode_roundtrip() {
        let ctx = TestContext::new();
        assert_eq!(Config::toggle_mode(&ctx).unwrap(), Mode::Create);
        assert_eq!(Config::load(&ctx).unwrap().mode, Mode::Create);
        assert_eq!(Config::toggle_mode(&ctx).unwrap(), Mode::Search);
    }

    #[test]
    fn test_partial_file_uses_serde_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        std::fs::write(&path, "mode = \"create\"\nextra_tags = [\"garden\"]\n").unwrap();
        let config = Config::load(&ctx).unwrap();
        assert_eq!(config.mode, Mode::Create);
        assert_eq!(config.max_suggestions, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(config.suggest_options().extra_tags, vec!["garden".to_string()]);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        std::fs::write(&path, "mode = [").unwrap();
        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
