//! Joint (node) definitions.

use serde::{Deserialize, Serialize};

use super::restraint::Restraint;

/// A point in 3D space, with an optional restraint mask (defaults to fully free).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Joint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub restraint: Restraint,
}

impl Joint {
    /// A free joint at the given coordinates (metres).
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            restraint: Restraint::FREE,
        }
    }

    /// Attach a restraint mask.
    pub fn with_restraint(mut self, restraint: Restraint) -> Self {
        self.restraint = restraint;
        self
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn distance_to(&self, other: &Joint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Joint::new(0.0, 0.0, 0.0);
        let b = Joint::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }
}
