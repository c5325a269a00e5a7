//! Structural model container - the caller-supplied, read-only description of the
//! structure, loads, and analysis requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::{Frame, FrameSection, Joint, Material, Shell, ShellSection};
use crate::error::{FeaError, FeaResult};
use crate::ids::{FrameId, ShellId, UserId};
use crate::loads::{AreaLoad, DistributedFrameLoad, LoadCase, LoadCombination, LoadPattern, PointLoad};

/// Caller-enforced capacity limit on joints.
pub const MAX_JOINTS: usize = 2000;
/// Caller-enforced capacity limit on frames.
pub const MAX_FRAMES: usize = 2000;

/// The structural model: all geometry, section/material catalogs, load hierarchy,
/// and raw loads. Immutable once handed to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuralModel {
    pub materials: HashMap<String, Material>,
    pub frame_sections: HashMap<String, FrameSection>,
    pub shell_sections: HashMap<String, ShellSection>,
    pub load_patterns: HashMap<String, LoadPattern>,
    pub load_cases: HashMap<String, LoadCase>,
    pub load_combinations: HashMap<String, LoadCombination>,
    pub joints: HashMap<UserId, Joint>,
    pub frames: HashMap<FrameId, Frame>,
    pub shells: HashMap<ShellId, Shell>,
    pub point_loads: Vec<PointLoad>,
    pub distributed_frame_loads: Vec<DistributedFrameLoad>,
    pub area_loads: Vec<AreaLoad>,
}

impl StructuralModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, id: &str, material: Material) -> &mut Self {
        self.materials.insert(id.to_string(), material);
        self
    }

    pub fn add_frame_section(&mut self, id: &str, section: FrameSection) -> &mut Self {
        self.frame_sections.insert(id.to_string(), section);
        self
    }

    pub fn add_shell_section(&mut self, id: &str, section: ShellSection) -> &mut Self {
        self.shell_sections.insert(id.to_string(), section);
        self
    }

    pub fn add_load_pattern(&mut self, pattern: LoadPattern) -> &mut Self {
        self.load_patterns.insert(pattern.name.clone(), pattern);
        self
    }

    pub fn add_load_case(&mut self, case: LoadCase) -> &mut Self {
        self.load_cases.insert(case.name.clone(), case);
        self
    }

    pub fn add_load_combination(&mut self, combo: LoadCombination) -> &mut Self {
        self.load_combinations.insert(combo.name.clone(), combo);
        self
    }

    pub fn add_joint(&mut self, id: UserId, joint: Joint) -> &mut Self {
        self.joints.insert(id, joint);
        self
    }

    pub fn add_frame(&mut self, id: FrameId, frame: Frame) -> &mut Self {
        self.frames.insert(id, frame);
        self
    }

    pub fn add_shell(&mut self, id: ShellId, shell: Shell) -> &mut Self {
        self.shells.insert(id, shell);
        self
    }

    pub fn add_point_load(&mut self, load: PointLoad) -> &mut Self {
        self.point_loads.push(load);
        self
    }

    pub fn add_distributed_frame_load(&mut self, load: DistributedFrameLoad) -> &mut Self {
        self.distributed_frame_loads.push(load);
        self
    }

    pub fn add_area_load(&mut self, load: AreaLoad) -> &mut Self {
        self.area_loads.push(load);
        self
    }

    /// Enforce the hard capacity limits before the engine attempts an
    /// infeasible dense assembly.
    pub fn validate(&self) -> FeaResult<()> {
        if self.joints.len() > MAX_JOINTS {
            return Err(FeaError::ModelTooLargeJoints(self.joints.len()));
        }
        if self.frames.len() > MAX_FRAMES {
            return Err(FeaError::ModelTooLargeFrames(self.frames.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{FrameSectionShape, Restraint};

    fn sample_model() -> StructuralModel {
        let mut model = StructuralModel::new();
        model.add_material("Steel", Material::steel());
        model.add_frame_section(
            "W1",
            FrameSection::new(FrameSectionShape::Rectangular { b: 0.3, h: 0.5 }, "Steel"),
        );
        model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
        model.add_joint(UserId(2), Joint::new(5.0, 0.0, 0.0));
        model.add_frame(1, Frame::new(UserId(1), UserId(2), "W1"));
        model
    }

    #[test]
    fn validate_accepts_small_model() {
        assert!(sample_model().validate().is_ok());
    }

    #[test]
    fn validate_rejects_too_many_joints() {
        let mut model = StructuralModel::new();
        for i in 0..(MAX_JOINTS + 1) as u32 {
            model.add_joint(UserId(i), Joint::new(i as f64, 0.0, 0.0));
        }
        assert!(matches!(model.validate(), Err(FeaError::ModelTooLargeJoints(_))));
    }
}
