//! Load patterns - the base tier of the pattern/case/combination hierarchy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadCategory {
    Dead,
    Live,
    Rain,
    Wind,
    Earthquake,
}

/// A named collection of raw loads (point loads, distributed frame loads, area loads)
/// that share a category and an optional self-weight contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPattern {
    pub name: String,
    pub category: LoadCategory,
    /// If true, every sub-member contributes w = rho*A*g in global -Y when this
    /// pattern is included in a case.
    pub self_weight: bool,
}

impl LoadPattern {
    pub fn new(name: &str, category: LoadCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
            self_weight: false,
        }
    }

    pub fn with_self_weight(mut self) -> Self {
        self.self_weight = true;
        self
    }

    pub fn dead() -> Self {
        Self::new("Dead", LoadCategory::Dead).with_self_weight()
    }

    pub fn live() -> Self {
        Self::new("Live", LoadCategory::Live)
    }

    pub fn wind() -> Self {
        Self::new("Wind", LoadCategory::Wind)
    }
}
