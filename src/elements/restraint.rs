//! Joint restraint masks.

use serde::{Deserialize, Serialize};

/// A 6-DOF restraint mask, always present (never nullable), defaulting to fully free.
///
/// DOF order matches the beam element kernel: [ux, uy, uz, rx, ry, rz].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restraint(pub [bool; 6]);

impl Restraint {
    /// No restraint on any DOF.
    pub const FREE: Restraint = Restraint([false; 6]);

    /// All six DOFs restrained.
    pub const FIXED: Restraint = Restraint([true; 6]);

    /// Translations restrained, rotations free.
    pub const PINNED: Restraint = Restraint([true, true, true, false, false, false]);

    /// Create a restraint from explicit flags [ux, uy, uz, rx, ry, rz].
    pub fn new(ux: bool, uy: bool, uz: bool, rx: bool, ry: bool, rz: bool) -> Self {
        Self([ux, uy, uz, rx, ry, rz])
    }

    /// Is DOF `d` (0..6) restrained?
    pub fn is_restrained(&self, d: usize) -> bool {
        self.0[d]
    }

    /// True if every DOF is free.
    pub fn is_free(&self) -> bool {
        self.0 == Self::FREE.0
    }

    /// Number of restrained DOFs.
    pub fn count_restrained(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

impl Default for Restraint {
    fn default() -> Self {
        Self::FREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_by_default() {
        assert!(Restraint::default().is_free());
    }

    #[test]
    fn pinned_restrains_translations_only() {
        let r = Restraint::PINNED;
        assert_eq!(r.count_restrained(), 3);
        assert!(!r.is_restrained(3));
    }
}
