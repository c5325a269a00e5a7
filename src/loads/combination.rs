//! Load combinations - scaled linear sums of load cases.

use serde::{Deserialize, Serialize};

/// One (case id, scale) entry of a load combination.
///
/// Stored as an ordered list rather than a `HashMap<String, f64>` factor map, because
/// duplicate case ids within one combination must sum linearly — a map would silently
/// collapse duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseScale {
    pub case: String,
    pub scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    pub name: String,
    pub cases: Vec<CaseScale>,
}

impl LoadCombination {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn with_case(mut self, case: &str, scale: f64) -> Self {
        self.cases.push(CaseScale {
            case: case.to_string(),
            scale,
        });
        self
    }
}
