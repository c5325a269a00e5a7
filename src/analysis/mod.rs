//! Analysis options for a linear-static run.
//!
//! Linear-only: there is no `AnalysisType::{PDelta, Nonlinear, Modal}` or associated
//! iteration/tolerance fields here, since P-Delta, nonlinear, and modal analysis are all
//! out of scope for this engine.

use serde::{Deserialize, Serialize};

/// Options controlling how a case or combination is analyzed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Recompute even if the result store already holds a cached entry for this id.
    pub force_recompute: bool,
}

impl AnalysisOptions {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn with_force_recompute(mut self) -> Self {
        self.force_recompute = true;
        self
    }
}
