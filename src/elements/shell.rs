//! Shell element - a planar surface bounded by >= 3 joints.
//!
//! Shells are stored and loadable (area loads, CST plane-stress) but are never
//! assembled into the 3D global stiffness system.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub joints: Vec<UserId>,
    pub section: String,
    #[serde(default)]
    pub normal_offset: f64,
}

impl Shell {
    pub fn new(joints: Vec<UserId>, section: &str) -> Self {
        Self {
            joints,
            section: section.to_string(),
            normal_offset: 0.0,
        }
    }
}
