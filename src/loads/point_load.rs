//! Point loads applied directly to a joint.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A concentrated force/moment applied to a joint under one load pattern.
///
/// Components are in kN / kN*m at the model boundary; the load assembler
/// converts them to N / N*m (see `crate::assembly`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoad {
    pub joint: UserId,
    pub pattern: String,
    pub fx: f64,
    pub fy: f64,
    pub fz: f64,
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
}

impl PointLoad {
    pub fn new(joint: UserId, pattern: &str, fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self {
            joint,
            pattern: pattern.to_string(),
            fx,
            fy,
            fz,
            mx,
            my,
            mz,
        }
    }

    pub fn force(joint: UserId, pattern: &str, fx: f64, fy: f64, fz: f64) -> Self {
        Self::new(joint, pattern, fx, fy, fz, 0.0, 0.0, 0.0)
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }
}
