//! Mesh refiner: splits each input frame into `SEGMENTS` equal sub-members,
//! introducing internal joints so per-station results can be recovered.

use std::collections::HashMap;

use log::warn;

use crate::elements::Restraint;
use crate::error::FeaError;
use crate::ids::{FrameId, InternalId, JointId, UserId};
use crate::model::StructuralModel;

/// Number of equal sub-members each input frame is split into.
pub const SEGMENTS: usize = 10;

/// Below this member length (metres) a frame is treated as degenerate and skipped.
pub const MIN_MEMBER_LENGTH: f64 = 1e-6;

/// A joint in the refined mesh: a dense index, its position, and its restraint mask.
/// Internal joints introduced by refinement are always fully free.
#[derive(Debug, Clone, Copy)]
pub struct RefinedJoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub restraint: Restraint,
    pub origin: JointId,
}

impl RefinedJoint {
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// One prismatic sub-member produced by refinement, inheriting its parent frame's
/// section and orientation.
#[derive(Debug, Clone)]
pub struct SubMember {
    pub frame_id: FrameId,
    pub i_idx: usize,
    pub j_idx: usize,
    pub section: String,
    pub beta_deg: f64,
}

/// The refined mesh produced from a `StructuralModel`: a dense joint table, the
/// ordered polyline of joint indices for each surviving input frame, and the
/// sub-members to assemble.
#[derive(Debug, Clone)]
pub struct RefinedMesh {
    pub joints: Vec<RefinedJoint>,
    /// Dense index of every original user joint (present even if unused by any frame).
    pub user_joint_index: HashMap<UserId, usize>,
    /// Ordered joint indices from I to J for each frame that survived refinement.
    pub frame_polylines: HashMap<FrameId, Vec<usize>>,
    pub sub_members: Vec<SubMember>,
}

impl RefinedMesh {
    pub fn dof_count(&self) -> usize {
        self.joints.len() * 6
    }
}

/// Refine `model` into sub-members and internal joints, logging a `DegenerateMember`
/// entry (and skipping the frame) for any member whose length is below the minimum.
pub fn refine(model: &StructuralModel, log: &mut Vec<String>) -> RefinedMesh {
    let mut joints = Vec::with_capacity(model.joints.len());
    let mut user_joint_index = HashMap::with_capacity(model.joints.len());

    // Stable ordering keeps refinement (and therefore DOF numbering) deterministic
    // across repeated calls with the same model.
    let mut ordered_user_ids: Vec<UserId> = model.joints.keys().copied().collect();
    ordered_user_ids.sort();

    for id in &ordered_user_ids {
        let joint = &model.joints[id];
        let idx = joints.len();
        joints.push(RefinedJoint {
            x: joint.x,
            y: joint.y,
            z: joint.z,
            restraint: joint.restraint,
            origin: JointId::User(*id),
        });
        user_joint_index.insert(*id, idx);
    }

    let mut frame_polylines = HashMap::new();
    let mut sub_members = Vec::new();
    let mut next_internal = 0u32;

    let mut ordered_frame_ids: Vec<FrameId> = model.frames.keys().copied().collect();
    ordered_frame_ids.sort();

    for frame_id in ordered_frame_ids {
        let frame = &model.frames[&frame_id];
        let (Some(&i_idx), Some(&j_idx)) = (
            user_joint_index.get(&frame.i),
            user_joint_index.get(&frame.j),
        ) else {
            warn!("frame {frame_id} references an unknown joint; skipped");
            log.push(format!("frame {frame_id} references an unknown joint; skipped"));
            continue;
        };

        let i_joint = joints[i_idx];
        let j_joint = joints[j_idx];
        let dx = j_joint.x - i_joint.x;
        let dy = j_joint.y - i_joint.y;
        let dz = j_joint.z - i_joint.z;
        let length = (dx * dx + dy * dy + dz * dz).sqrt();

        if length <= MIN_MEMBER_LENGTH {
            let msg = FeaError::DegenerateMember(frame_id.to_string()).to_string();
            warn!("{msg}");
            log.push(msg);
            continue;
        }

        let mut polyline = Vec::with_capacity(SEGMENTS + 1);
        polyline.push(i_idx);
        for step in 1..SEGMENTS {
            let t = step as f64 / SEGMENTS as f64;
            let idx = joints.len();
            joints.push(RefinedJoint {
                x: i_joint.x + dx * t,
                y: i_joint.y + dy * t,
                z: i_joint.z + dz * t,
                restraint: Restraint::FREE,
                origin: JointId::Internal(InternalId(next_internal)),
            });
            next_internal += 1;
            polyline.push(idx);
        }
        polyline.push(j_idx);

        for k in 0..SEGMENTS {
            sub_members.push(SubMember {
                frame_id,
                i_idx: polyline[k],
                j_idx: polyline[k + 1],
                section: frame.section.clone(),
                beta_deg: frame.beta_deg,
            });
        }

        frame_polylines.insert(frame_id, polyline);
    }

    RefinedMesh {
        joints,
        user_joint_index,
        frame_polylines,
        sub_members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Frame, FrameSection, FrameSectionShape, Joint, Material};

    fn one_member_model() -> StructuralModel {
        let mut model = StructuralModel::new();
        model.add_material("Steel", Material::steel());
        model.add_frame_section(
            "Sec",
            FrameSection::new(FrameSectionShape::Rectangular { b: 0.2, h: 0.3 }, "Steel"),
        );
        model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0));
        model.add_joint(UserId(2), Joint::new(10.0, 0.0, 0.0));
        model.add_frame(1, Frame::new(UserId(1), UserId(2), "Sec"));
        model
    }

    #[test]
    fn refines_into_segments_sub_members() {
        let model = one_member_model();
        let mut log = Vec::new();
        let mesh = refine(&model, &mut log);
        assert_eq!(mesh.sub_members.len(), SEGMENTS);
        assert_eq!(mesh.joints.len(), 2 + (SEGMENTS - 1));
        let polyline = &mesh.frame_polylines[&1];
        assert_eq!(polyline.len(), SEGMENTS + 1);
        assert!(log.is_empty());
    }

    #[test]
    fn degenerate_frame_is_skipped_with_log_entry() {
        let mut model = StructuralModel::new();
        model.add_material("Steel", Material::steel());
        model.add_frame_section(
            "Sec",
            FrameSection::new(FrameSectionShape::Rectangular { b: 0.2, h: 0.3 }, "Steel"),
        );
        model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0));
        model.add_joint(UserId(2), Joint::new(0.0, 0.0, 1e-9));
        model.add_frame(1, Frame::new(UserId(1), UserId(2), "Sec"));

        let mut log = Vec::new();
        let mesh = refine(&model, &mut log);
        assert!(mesh.sub_members.is_empty());
        assert!(mesh.frame_polylines.is_empty());
        assert_eq!(log.len(), 1);
    }
}
