//! Game configuration loaded from `escape.toml`.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use tracing::{info, warn};

use crate::error::{Result, RulesError};
use crate::mechanics::{MAX_DAYS, RELATIONSHIP_MAX, RELATIONSHIP_MIN};

/// Scene the story starts in.
pub const DEFAULT_SCENE: &str = "intro";

/// How display lookups react to ids missing from the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Unknown ids are errors.
    Strict,
    /// Unknown ids fall back to defaults.
    Lenient,
}

impl LookupPolicy {
    /// `Strict` in debug builds, `Lenient` in release builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            LookupPolicy::Strict
        } else {
            LookupPolicy::Lenient
        }
    }
}

/// How relationship deltas are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipPolicy {
    pub clamp: bool,
    pub min: i32,
    pub max: i32,
}

impl Default for RelationshipPolicy {
    fn default() -> Self {
        Self {
            clamp: true,
            min: RELATIONSHIP_MIN,
            max: RELATIONSHIP_MAX,
        }
    }
}

impl RelationshipPolicy {
    /// The clamp range with its ends ordered, so a swapped pair still clamps.
    pub fn bounds(&self) -> (i32, i32) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    /// Apply a delta to a score. Saturates instead of overflowing.
    pub fn apply(&self, current: i32, delta: i32) -> i32 {
        let raw = current.saturating_add(delta);
        if self.clamp {
            let (low, high) = self.bounds();
            raw.clamp(low, high)
        } else {
            raw
        }
    }
}

/// Presentation tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Delay between revealed characters in the typewriter effect.
    pub typewriter_speed_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            typewriter_speed_ms: 30,
        }
    }
}

impl PresentationConfig {
    pub fn typewriter_speed(&self) -> Duration {
        Duration::from_millis(self.typewriter_speed_ms)
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_scene: String,
    pub max_days: u8,
    /// None = build default, see [`LookupPolicy::build_default`].
    pub lookup: Option<LookupPolicy>,
    pub relationships: RelationshipPolicy,
    pub presentation: PresentationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_scene: DEFAULT_SCENE.to_string(),
            max_days: MAX_DAYS,
            lookup: None,
            relationships: RelationshipPolicy::default(),
            presentation: PresentationConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| RulesError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&data)?;
        info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    "Failed to load {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.initial_scene.trim().is_empty() {
            return Err(RulesError::InvalidConfig(
                "initial_scene must not be empty".to_string(),
            ));
        }
        if self.max_days == 0 {
            return Err(RulesError::InvalidConfig(
                "max_days must be at least 1".to_string(),
            ));
        }
        if self.relationships.min >= self.relationships.max {
            return Err(RulesError::InvalidConfig(format!(
                "relationship min ({}) must be below max ({})",
                self.relationships.min, self.relationships.max
            )));
        }
        Ok(())
    }

    /// Resolved lookup policy.
    pub fn lookup_policy(&self) -> LookupPolicy {
        self.lookup.unwrap_or_else(LookupPolicy::build_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_scene, "intro");
        assert_eq!(config.max_days, 6);
        assert!(config.relationships.clamp);
        assert_eq!(config.presentation.typewriter_speed(), Duration::from_millis(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            initial_scene = "cell_block"
            lookup = "lenient"

            [relationships]
            clamp = false
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_scene, "cell_block");
        assert_eq!(config.max_days, 6);
        assert_eq!(config.lookup_policy(), LookupPolicy::Lenient);
        assert!(!config.relationships.clamp);
        assert_eq!(config.relationships.max, 100);
        assert_eq!(config.presentation.typewriter_speed_ms, 30);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("max_days = 0"),
            Err(RulesError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("initial_scene = \"  \""),
            Err(RulesError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("[relationships]\nmin = 10\nmax = 10"),
            Err(RulesError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("max_days = \"six\""),
            Err(RulesError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("la-fuga-missing-config.toml");
        assert!(matches!(
            GameConfig::load(&path),
            Err(RulesError::ConfigIo { .. })
        ));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_relationship_policy_apply() {
        let clamped = RelationshipPolicy::default();
        assert_eq!(clamped.apply(90, 30), 100);
        assert_eq!(clamped.apply(-90, -30), -100);
        assert_eq!(clamped.apply(10, 10), 20);

        let open = RelationshipPolicy {
            clamp: false,
            ..Default::default()
        };
        assert_eq!(open.apply(90, 30), 120);
        assert_eq!(open.apply(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn test_relationship_policy_swapped_bounds() {
        let swapped = RelationshipPolicy {
            clamp: true,
            min: 10,
            max: -10,
        };
        assert_eq!(swapped.bounds(), (-10, 10));
        assert_eq!(swapped.apply(0, 1), 1);
        assert_eq!(swapped.apply(0, 50), 10);
        assert_eq!(swapped.apply(0, -50), -10);
    }
}
