//! Planet categories and their per-category probabilities

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Broad planet archetype
///
/// Variant order is the model's class order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetCategory {
    #[serde(rename = "Rocky")]
    Rocky,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Ice Giant")]
    IceGiant,
    #[serde(rename = "Super-Earth")]
    SuperEarth,
}

impl PlanetCategory {
    /// Every category in class order
    pub const ALL: [PlanetCategory; 4] = [
        PlanetCategory::Rocky,
        PlanetCategory::GasGiant,
        PlanetCategory::IceGiant,
        PlanetCategory::SuperEarth,
    ];

    /// Model class index
    pub fn index(&self) -> usize {
        match self {
            PlanetCategory::Rocky => 0,
            PlanetCategory::GasGiant => 1,
            PlanetCategory::IceGiant => 2,
            PlanetCategory::SuperEarth => 3,
        }
    }

    /// Category for a model class index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetCategory::Rocky => "Rocky",
            PlanetCategory::GasGiant => "Gas Giant",
            PlanetCategory::IceGiant => "Ice Giant",
            PlanetCategory::SuperEarth => "Super-Earth",
        }
    }
}

impl fmt::Display for PlanetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Probability of every category, kept in class order
///
/// Serializes as a map from category name to probability, Rocky first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProbabilities([f64; 4]);

impl CategoryProbabilities {
    /// Build from a model probability vector in class order
    ///
    /// Classes missing from `values` get probability 0.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut probabilities = [0.0; 4];
        for (slot, value) in probabilities.iter_mut().zip(values) {
            *slot = *value;
        }
        Self(probabilities)
    }

    /// Probability of one category
    pub fn get(&self, category: PlanetCategory) -> f64 {
        self.0[category.index()]
    }

    /// `(category, probability)` pairs in class order
    pub fn iter(&self) -> impl Iterator<Item = (PlanetCategory, f64)> + '_ {
        PlanetCategory::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Serialize for CategoryProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PlanetCategory::ALL.len()))?;
        for (category, probability) in self.iter() {
            map.serialize_entry(category.name(), &probability)?;
        }
        map.end()
    }
}
