//! Shell (plate) section properties.
//!
//! Shells are never assembled into the 3D system; a `ShellSection` only
//! needs enough to drive the CST plane-stress kernel (`crate::math::cst`) and area-load
//! bookkeeping — thickness and the material it references.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellSection {
    pub thickness: f64,
    pub material: String,
}

impl ShellSection {
    pub fn new(thickness: f64, material: &str) -> Self {
        Self {
            thickness,
            material: material.to_string(),
        }
    }
}
