//! Distributed (line) loads on frame members.

use serde::{Deserialize, Serialize};

use crate::ids::FrameId;

/// Direction a distributed frame load acts in.
///
/// `GlobalX/Y/Z` and `LocalX/Y/Z` are plain axis tags: a positive `start_mag`/`end_mag`
/// produces force along that axis's positive sense. `Gravity` is the one exception,
/// always meaning global -Y regardless of magnitude sign, matching self-weight's own
/// fixed direction. The `Local*` variants are resolved per sub-member at assembly
/// time since each sub-member has its own local axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LoadDirection {
    GlobalX,
    GlobalY,
    GlobalZ,
    LocalX,
    LocalY,
    LocalZ,
    Gravity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DistributedLoadType {
    Uniform,
    Trapezoidal,
}

/// A distributed load on a frame, expressed in kN/m at the model boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedFrameLoad {
    pub frame: FrameId,
    pub pattern: String,
    pub direction: LoadDirection,
    pub load_type: DistributedLoadType,
    pub start_mag: f64,
    pub end_mag: f64,
    pub start_distance: f64,
    pub end_distance: f64,
}

impl DistributedFrameLoad {
    pub fn uniform(
        frame: FrameId,
        pattern: &str,
        direction: LoadDirection,
        magnitude: f64,
        length: f64,
    ) -> Self {
        Self {
            frame,
            pattern: pattern.to_string(),
            direction,
            load_type: DistributedLoadType::Uniform,
            start_mag: magnitude,
            end_mag: magnitude,
            start_distance: 0.0,
            end_distance: length,
        }
    }

    pub fn trapezoidal(
        frame: FrameId,
        pattern: &str,
        direction: LoadDirection,
        start_mag: f64,
        end_mag: f64,
        start_distance: f64,
        end_distance: f64,
    ) -> Self {
        Self {
            frame,
            pattern: pattern.to_string(),
            direction,
            load_type: DistributedLoadType::Trapezoidal,
            start_mag,
            end_mag,
            start_distance,
            end_distance,
        }
    }

    /// Clamp the load's span into [0, length].
    pub fn clamped_span(&self, length: f64) -> (f64, f64) {
        let x1 = self.start_distance.clamp(0.0, length);
        let x2 = self.end_distance.clamp(0.0, length);
        if x1 <= x2 {
            (x1, x2)
        } else {
            (x2, x1)
        }
    }
}
