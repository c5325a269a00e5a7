//! Result types produced by the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ids::{FrameId, UserId};

/// Displacement at a joint: three translations (metres) and three rotations
/// (radians).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JointDisplacement {
    pub ux: f64,
    pub uy: f64,
    pub uz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl JointDisplacement {
    pub fn magnitude(&self) -> f64 {
        (self.ux * self.ux + self.uy * self.uy + self.uz * self.uz).sqrt()
    }

    pub fn scale(&self, s: f64) -> Self {
        Self {
            ux: self.ux * s,
            uy: self.uy * s,
            uz: self.uz * s,
            rx: self.rx * s,
            ry: self.ry * s,
            rz: self.rz * s,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            ux: self.ux + other.ux,
            uy: self.uy + other.uy,
            uz: self.uz + other.uz,
            rx: self.rx + other.rx,
            ry: self.ry + other.ry,
            rz: self.rz + other.rz,
        }
    }
}

/// Internal forces at one station of a frame, local-axis convention: axial tension
/// positive, shear by the right-hand rule, moments about local Y/Z.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameStationForces {
    pub p: f64,
    pub v2: f64,
    pub v3: f64,
    pub t: f64,
    pub m2: f64,
    pub m3: f64,
}

impl FrameStationForces {
    pub fn scale(&self, s: f64) -> Self {
        Self {
            p: self.p * s,
            v2: self.v2 * s,
            v3: self.v3 * s,
            t: self.t * s,
            m2: self.m2 * s,
            m3: self.m3 * s,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            p: self.p + other.p,
            v2: self.v2 + other.v2,
            v3: self.v3 + other.v3,
            t: self.t + other.t,
            m2: self.m2 + other.m2,
            m3: self.m3 + other.m3,
        }
    }
}

/// Per-station results for one original frame; station count equals the refinement
/// segment count plus one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameDetailedResult {
    /// Relative position along the member, 0..1.
    pub stations: Vec<f64>,
    pub displacements: Vec<JointDisplacement>,
    pub forces: Vec<FrameStationForces>,
}

/// Reaction at a restrained joint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reaction {
    pub joint: UserId,
    pub fx: f64,
    pub fy: f64,
    pub fz: f64,
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
}

impl Reaction {
    pub fn scale(&self, s: f64) -> Self {
        Self {
            joint: self.joint,
            fx: self.fx * s,
            fy: self.fy * s,
            fz: self.fz * s,
            mx: self.mx * s,
            my: self.my * s,
            mz: self.mz * s,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.joint, other.joint);
        Self {
            joint: self.joint,
            fx: self.fx + other.fx,
            fy: self.fy + other.fy,
            fz: self.fz + other.fz,
            mx: self.mx + other.mx,
            my: self.my + other.my,
            mz: self.mz + other.mz,
        }
    }
}

/// The output of one `analyze_case`/`analyze_combination` call. Always a valid
/// record: on analysis failure, `is_valid` is false and `log` carries the reason,
/// rather than surfacing an error across the public boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub load_case_id: String,
    pub displacements: HashMap<UserId, JointDisplacement>,
    pub frame_detailed_results: HashMap<FrameId, FrameDetailedResult>,
    pub reactions: Vec<Reaction>,
    pub max_displacement: f64,
    pub is_valid: bool,
    pub timestamp: u64,
    pub log: Vec<String>,
}

impl AnalysisResults {
    /// An invalid placeholder result, used when analysis fails before or during
    /// assembly/solve.
    pub fn invalid(load_case_id: &str, timestamp: u64, log: Vec<String>) -> Self {
        Self {
            load_case_id: load_case_id.to_string(),
            displacements: HashMap::new(),
            frame_detailed_results: HashMap::new(),
            reactions: Vec::new(),
            max_displacement: 0.0,
            is_valid: false,
            timestamp,
            log,
        }
    }
}
