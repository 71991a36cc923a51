//! Resolves the roster and layout seed before the grove plugin starts.
//!
//! Failures never stop the banner: a bad config file or seed is logged and
//! the built-in defaults are used instead.

use std::path::PathBuf;

use bevy::prelude::*;

use grove::hero_config::{HeroConfig, CONFIG_PATH_ENV, SEED_ENV};
use grove::layout_rng::LayoutSeed;
use grove::roster::CityRoster;

/// Where the startup values came from, read from the environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeroSources {
    pub config_path: Option<PathBuf>,
    pub seed_override: Option<String>,
}

impl HeroSources {
    pub fn from_env() -> Self {
        Self {
            config_path: std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            seed_override: std::env::var(SEED_ENV).ok(),
        }
    }
}

pub fn resolve(sources: &HeroSources) -> (CityRoster, LayoutSeed) {
    let config = match &sources.config_path {
        Some(path) => match HeroConfig::load(path) {
            Ok(config) => {
                info!("Loaded hero config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {e}", path.display());
                HeroConfig::default()
            }
        },
        None => HeroConfig::default(),
    };

    let roster = config.roster().unwrap_or_else(|e| {
        warn!("Invalid city roster, using built-in cities: {e}");
        CityRoster::default()
    });

    let seed = match sources.seed_override.as_deref() {
        Some(raw) => HeroConfig::parse_seed(raw).map(LayoutSeed).unwrap_or_else(|| {
            warn!("{SEED_ENV}={raw:?} is not an unsigned integer; ignoring");
            config.layout_seed()
        }),
        None => config.layout_seed(),
    };

    (roster, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove::config::DEFAULT_LAYOUT_SEED;

    #[test]
    fn test_no_sources_gives_defaults() {
        let (roster, seed) = resolve(&HeroSources::default());
        assert_eq!(roster, CityRoster::default());
        assert_eq!(seed, LayoutSeed(DEFAULT_LAYOUT_SEED));
    }

    #[test]
    fn test_seed_override_applies() {
        let sources = HeroSources {
            config_path: None,
            seed_override: Some(" 7 ".to_string()),
        };
        assert_eq!(resolve(&sources).1, LayoutSeed(7));
    }

    #[test]
    fn test_bad_seed_falls_back() {
        let sources = HeroSources {
            config_path: None,
            seed_override: Some("seven".to_string()),
        };
        assert_eq!(resolve(&sources).1, LayoutSeed(DEFAULT_LAYOUT_SEED));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let sources = HeroSources {
            config_path: Some(PathBuf::from("/nonexistent/date-palm.json")),
            seed_override: None,
        };
        let (roster, seed) = resolve(&sources);
        assert_eq!(roster, CityRoster::default());
        assert_eq!(seed, LayoutSeed(DEFAULT_LAYOUT_SEED));
    }
}
