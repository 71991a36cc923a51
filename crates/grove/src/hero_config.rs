//! Optional JSON config that overrides the built-in roster and layout seed.
//!
//! ```json
//! { "seed": 7, "cities": [ { "name": "Tunis", "purchased": 75, "color": "#ff6b6b" } ] }
//! ```
//!
//! Both keys are optional; anything missing keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::city::CityRecord;
use crate::layout_rng::LayoutSeed;
use crate::roster::CityRoster;
use crate::roster_error::RosterError;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "DATE_PALM_CONFIG";
/// Environment variable overriding the layout seed (wins over the file).
pub const SEED_ENV: &str = "DATE_PALM_SEED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub cities: Option<Vec<CityRecord>>,
}

impl HeroConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a seed override such as the value of [`SEED_ENV`].
    pub fn parse_seed(raw: &str) -> Option<u64> {
        raw.trim().parse().ok()
    }

    pub fn layout_seed(&self) -> LayoutSeed {
        self.seed.map(LayoutSeed).unwrap_or_default()
    }

    /// Build the roster, validating any cities the file supplied.
    pub fn roster(&self) -> Result<CityRoster, RosterError> {
        match &self.cities {
            Some(cities) => CityRoster::new(cities.clone()),
            None => Ok(CityRoster::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LAYOUT_SEED;

    #[test]
    fn test_empty_object_keeps_defaults() {
        let cfg = HeroConfig::from_json_str("{}").expect("valid");
        assert_eq!(cfg.layout_seed(), LayoutSeed(DEFAULT_LAYOUT_SEED));
        assert_eq!(cfg.roster().expect("default roster"), CityRoster::default());
    }

    #[test]
    fn test_seed_and_cities_override() {
        let json = r##"{
            "seed": 7,
            "cities": [
                {"name": "Tozeur", "purchased": 45, "color": "#fdcb6e"},
                {"name": "Nabeul", "purchased": 50, "color": "#e84393"}
            ]
        }"##;
        let cfg = HeroConfig::from_json_str(json).expect("valid");
        assert_eq!(cfg.layout_seed(), LayoutSeed(7));
        let roster = cfg.roster().expect("valid roster");
        assert_eq!(roster.branch_count(), 2);
        assert_eq!(roster.index_of("Nabeul"), Some(1));
    }

    #[test]
    fn test_invalid_roster_surfaces_error() {
        let json = r##"{"cities": [{"name": "A", "purchased": 101, "color": "#000000"}]}"##;
        let cfg = HeroConfig::from_json_str(json).expect("json itself is fine");
        assert!(matches!(
            cfg.roster(),
            Err(RosterError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = HeroConfig::from_json_str(r#"{"sede": 3}"#).unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = HeroConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(HeroConfig::parse_seed(" 1234 "), Some(1234));
        assert_eq!(HeroConfig::parse_seed("-1"), None);
        assert_eq!(HeroConfig::parse_seed("abc"), None);
    }
}
