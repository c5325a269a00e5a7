//! Area loads on shell elements.
//!
//! Shells are never assembled into the 3D global stiffness system, so
//! area loads are stored for bookkeeping/serialization but are not consumed by the
//! frame load assembler (`crate::assembly`).

use serde::{Deserialize, Serialize};

use crate::ids::ShellId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaLoad {
    pub shell: ShellId,
    pub pattern: String,
    /// Pressure, kN/m^2, positive = outward along the shell normal.
    pub pressure: f64,
}

impl AreaLoad {
    pub fn new(shell: ShellId, pattern: &str, pressure: f64) -> Self {
        Self {
            shell,
            pattern: pattern.to_string(),
            pressure,
        }
    }
}
