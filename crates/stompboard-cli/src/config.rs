//! Directory configuration.
//!
//! Each directory resolves from, in order: the command-line flag, an
//! environment variable, and a built-in default relative to the working
//! directory.

use std::path::PathBuf;

/// Environment variable overriding the pedal record directory.
pub const PEDALS_DIR_ENV: &str = "STOMPBOARD_PEDALS_DIR";

/// Environment variable overriding the model output directory.
pub const MODELS_DIR_ENV: &str = "STOMPBOARD_MODELS_DIR";

/// Default pedal record directory.
pub const DEFAULT_PEDALS_DIR: &str = "./pedals";

/// Default model output directory.
pub const DEFAULT_MODELS_DIR: &str = "./src/models/pedals";

/// Resolved directories for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding one `*.json` pedal record per pedal.
    pub pedals_dir: PathBuf,
    /// Directory receiving one `<slug>.json` model per pedal.
    pub models_dir: PathBuf,
}

impl GeneratorConfig {
    /// Resolves both directories from flags, then the environment, then
    /// defaults.
    pub fn resolve(pedals_dir: Option<&str>, models_dir: Option<&str>) -> Self {
        Self::resolve_with(pedals_dir, models_dir, |key| std::env::var(key).ok())
    }

    /// Like [`GeneratorConfig::resolve`], reading variables through `lookup`.
    pub fn resolve_with<F>(pedals_dir: Option<&str>, models_dir: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            pedals_dir: pick(pedals_dir, PEDALS_DIR_ENV, DEFAULT_PEDALS_DIR, &lookup),
            models_dir: pick(models_dir, MODELS_DIR_ENV, DEFAULT_MODELS_DIR, &lookup),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pedals_dir: PathBuf::from(DEFAULT_PEDALS_DIR),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
        }
    }
}

fn pick<F>(flag: Option<&str>, env_key: &str, default: &str, lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(flag) = flag {
        return PathBuf::from(flag);
    }
    match lookup(env_key) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
