//! The validated, read-only list of cities. Branch index == roster index.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::city::{default_cities, CityRecord};
use crate::config::MAX_BRANCHES;
use crate::roster_error::RosterError;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CityRoster {
    cities: Vec<CityRecord>,
}

impl Default for CityRoster {
    fn default() -> Self {
        Self {
            cities: default_cities(),
        }
    }
}

impl CityRoster {
    /// Validate and wrap a list of cities.
    pub fn new(cities: Vec<CityRecord>) -> Result<Self, RosterError> {
        if cities.is_empty() {
            return Err(RosterError::Empty);
        }
        if cities.len() > MAX_BRANCHES {
            return Err(RosterError::TooManyCities {
                max: MAX_BRANCHES,
                found: cities.len(),
            });
        }

        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.name.as_str()) {
                return Err(RosterError::DuplicateName(city.name.clone()));
            }
            if !city.purchased.is_finite() || !(0.0..=100.0).contains(&city.purchased) {
                return Err(RosterError::InvalidPercentage {
                    name: city.name.clone(),
                    value: city.purchased,
                });
            }
        }

        Ok(Self { cities })
    }

    /// Number of fronds on the tree.
    pub fn branch_count(&self) -> usize {
        self.cities.len()
    }

    pub fn get(&self, index: usize) -> Option<&CityRecord> {
        self.cities.get(index)
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.cities.iter().position(|c| c.name == name)
    }
}
