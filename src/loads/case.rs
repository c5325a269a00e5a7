//! Load cases - scaled linear sums of load patterns.

use serde::{Deserialize, Serialize};

/// One (pattern id, scale) entry of a load case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternScale {
    pub pattern: String,
    pub scale: f64,
}

/// A load case: a scaled combination of load patterns, analyzed as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    pub name: String,
    pub patterns: Vec<PatternScale>,
}

impl LoadCase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            patterns: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, pattern: &str, scale: f64) -> Self {
        self.patterns.push(PatternScale {
            pattern: pattern.to_string(),
            scale,
        });
        self
    }
}
