//! Frame (member) element - a prismatic 3D beam between two joints.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A 3D frame member connecting joint `i` to joint `j`.
///
/// `offset_i`/`offset_j` are carried through but unused by the solver core,
/// ("two local offsets (unused in solver core, passed through)").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub i: UserId,
    pub j: UserId,
    pub section: String,
    /// Member orientation about its longitudinal axis, in degrees.
    #[serde(default)]
    pub beta_deg: f64,
    #[serde(default)]
    pub offset_i: [f64; 3],
    #[serde(default)]
    pub offset_j: [f64; 3],
}

impl Frame {
    pub fn new(i: UserId, j: UserId, section: &str) -> Self {
        Self {
            i,
            j,
            section: section.to_string(),
            beta_deg: 0.0,
            offset_i: [0.0; 3],
            offset_j: [0.0; 3],
        }
    }

    pub fn with_beta(mut self, beta_deg: f64) -> Self {
        self.beta_deg = beta_deg;
        self
    }
}
