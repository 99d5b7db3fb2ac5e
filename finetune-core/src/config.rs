//! Configuration file support for finetune
//!
//! Loads a saved universe and display preferences from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.finetunerc.json` in the working directory
//! 3. `finetune.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::constants::{ConstantKind, ConstantSet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Decimal places used by text output when not configured
pub const DEFAULT_PRECISION: usize = 3;

/// Upper bound on configurable decimal places
const MAX_PRECISION: usize = 10;

/// finetune configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinetuneConfig {
    /// Saved constant values (default: our universe)
    #[serde(default)]
    pub universe: Option<UniverseConfig>,

    /// Include the narrative paragraph in text output (default: false)
    #[serde(default)]
    pub explain: Option<bool>,

    /// Decimal places for text output (default: 3)
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Saved constant values; missing entries fall back to 1.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniverseConfig {
    pub gravity: Option<f64>,
    pub electromagnetic: Option<f64>,
    pub strong: Option<f64>,
    pub cosmological: Option<f64>,
}

impl UniverseConfig {
    fn overrides(&self) -> [(ConstantKind, Option<f64>); 4] {
        [
            (ConstantKind::Gravity, self.gravity),
            (ConstantKind::Electromagnetic, self.electromagnetic),
            (ConstantKind::Strong, self.strong),
            (ConstantKind::Cosmological, self.cosmological),
        ]
    }
}

/// Resolved configuration with defaults filled in
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub constants: ConstantSet,
    pub explain: bool,
    pub precision: usize,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl FinetuneConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref universe) = self.universe {
            for (kind, value) in universe.overrides() {
                if let Some(v) = value {
                    kind.check(v)
                        .with_context(|| format!("invalid universe.{}", kind))?;
                }
            }
        }

        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                anyhow::bail!(
                    "precision must be at most {} (got {})",
                    MAX_PRECISION,
                    precision
                );
            }
        }

        Ok(())
    }

    /// Resolve config into the form used by the CLI
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let mut constants = ConstantSet::reference();
        if let Some(ref universe) = self.universe {
            for (kind, value) in universe.overrides() {
                if let Some(v) = value {
                    constants = constants.with(kind, v)?;
                }
            }
        }

        Ok(ResolvedConfig {
            constants,
            explain: self.explain.unwrap_or(false),
            precision: self.precision.unwrap_or(DEFAULT_PRECISION),
            config_path: None,
        })
    }
}

/// Per-constant values given on the command line
///
/// Field names follow the CLI flags; `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantOverrides {
    pub gravity: Option<f64>,
    pub alpha: Option<f64>,
    pub strong: Option<f64>,
    pub lambda: Option<f64>,
}

impl ConstantOverrides {
    fn entries(&self) -> [(ConstantKind, &'static str, Option<f64>); 4] {
        [
            (ConstantKind::Gravity, "gravity", self.gravity),
            (ConstantKind::Electromagnetic, "alpha", self.alpha),
            (ConstantKind::Strong, "strong", self.strong),
            (ConstantKind::Cosmological, "lambda", self.lambda),
        ]
    }
}

impl ResolvedConfig {
    /// Constants to evaluate: flags win over the config file, which wins over 1.0
    ///
    /// `reset` drops the saved universe; flags still apply on top of it.
    pub fn merge_constants(
        &self,
        overrides: &ConstantOverrides,
        reset: bool,
    ) -> Result<ConstantSet> {
        let base = if reset {
            ConstantSet::reference()
        } else {
            self.constants
        };
        apply_overrides(base, overrides)
    }
}

/// Apply flag values on top of a base set, rejecting out-of-range input
pub fn apply_overrides(base: ConstantSet, overrides: &ConstantOverrides) -> Result<ConstantSet> {
    let mut constants = base;
    for (kind, flag, value) in overrides.entries() {
        if let Some(v) = value {
            constants = constants
                .with(kind, v)
                .with_context(|| format!("invalid --{} value", flag))?;
        }
    }
    Ok(constants)
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.finetunerc.json`
/// 2. `finetune.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(FinetuneConfig, PathBuf)>> {
    for name in [".finetunerc.json", "finetune.config.json"] {
        let path = dir.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<FinetuneConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: FinetuneConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in `dir`.
/// Returns default config if nothing is found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (FinetuneConfig::default(), None),
        }
    };

    match &source_path {
        Some(path) => log::info!("using config: {}", path.display()),
        None => log::debug!("no config file found, using defaults"),
    }

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
