//! Global stiffness/load assembly over a refined mesh.

use log::warn;
use nalgebra::{DMatrix, DVector};

use crate::elements::FrameSectionShape;
use crate::error::FeaError;
use crate::loads::{LoadCase, LoadDirection};
use crate::math::{
    expand_transformation, fer_trapezoidal, member_local_stiffness, member_rotation_matrix, solve,
    Mat3, Mat12,
};
use crate::mesh::RefinedMesh;
use crate::model::StructuralModel;

const GRAVITY: f64 = 9.81;
/// kN/kN*m -> N/N*m, per the engine's internal unit convention.
const FORCE_UNIT_FACTOR: f64 = 1000.0;

/// Per-sub-member data retained after assembly, reused by result recovery.
pub struct AssembledSubMember {
    pub i_idx: usize,
    pub j_idx: usize,
    pub k_local: Mat12,
    pub r3: Mat3,
}

/// The product of assembling one load case: global K, global F, the per-sub-member
/// stiffness/rotation data needed for recovery, and a log of skipped entities.
pub struct Assembly {
    pub k: DMatrix<f64>,
    pub f: DVector<f64>,
    pub sub_member_data: Vec<AssembledSubMember>,
    pub log: Vec<String>,
}

/// Assemble global K and F for `case` over `mesh`.
///
/// Per-member problems (unresolved section/material, invalid section dimensions) are
/// logged and the offending sub-member's stiffness contribution is skipped rather than
/// aborting the whole assembly.
pub fn assemble(model: &StructuralModel, mesh: &RefinedMesh, case: &LoadCase) -> Assembly {
    let n = mesh.joints.len();
    let ndof = n * 6;
    let mut k = DMatrix::<f64>::zeros(ndof, ndof);
    let mut f = DVector::<f64>::zeros(ndof);
    let mut log = Vec::new();
    let mut sub_member_data = Vec::with_capacity(mesh.sub_members.len());

    for sm in &mesh.sub_members {
        let i_joint = mesh.joints[sm.i_idx];
        let j_joint = mesh.joints[sm.j_idx];
        let length = {
            let d = [
                j_joint.x - i_joint.x,
                j_joint.y - i_joint.y,
                j_joint.z - i_joint.z,
            ];
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
        };

        let Some(section) = model.frame_sections.get(&sm.section) else {
            let msg = FeaError::UnresolvedSection(sm.frame_id.to_string(), sm.section.clone()).to_string();
            warn!("{msg}");
            log.push(msg);
            continue;
        };
        let Some(material) = model.materials.get(&section.material) else {
            let msg =
                FeaError::UnresolvedMaterial(sm.frame_id.to_string(), section.material.clone()).to_string();
            warn!("{msg}");
            log.push(msg);
            continue;
        };

        let props = match section.properties() {
            Ok(p) => p,
            Err(e) => {
                warn!("{e}");
                log.push(e.to_string());
                continue;
            }
        };

        let k_local = member_local_stiffness(
            material.e_pa(),
            material.g_pa(),
            props.a,
            props.iy,
            props.iz,
            props.j,
            length,
        );
        let r3 = member_rotation_matrix(&i_joint.coords(), &j_joint.coords(), sm.beta_deg);
        let t = expand_transformation(&r3);
        let k_global = t.transpose() * k_local * t;

        scatter_stiffness(&mut k, &k_global, sm.i_idx, sm.j_idx);
        sub_member_data.push(AssembledSubMember {
            i_idx: sm.i_idx,
            j_idx: sm.j_idx,
            k_local,
            r3,
        });
    }

    assemble_loads(model, mesh, case, &mut f, &mut log);

    Assembly { k, f, sub_member_data, log }
}

fn scatter_stiffness(k: &mut DMatrix<f64>, k_global: &Mat12, i_idx: usize, j_idx: usize) {
    let blocks = [(0usize, i_idx), (6, j_idx)];
    for &(row_off, row_idx) in &blocks {
        for &(col_off, col_idx) in &blocks {
            for r in 0..6 {
                for c in 0..6 {
                    k[(row_idx * 6 + r, col_idx * 6 + c)] += k_global[(row_off + r, col_off + c)];
                }
            }
        }
    }
}

fn assemble_loads(
    model: &StructuralModel,
    mesh: &RefinedMesh,
    case: &LoadCase,
    f: &mut DVector<f64>,
    log: &mut Vec<String>,
) {
    for pattern_scale in &case.patterns {
        let Some(pattern) = model.load_patterns.get(&pattern_scale.pattern) else {
            log.push(format!("load case references unknown pattern '{}'", pattern_scale.pattern));
            continue;
        };
        let scale = pattern_scale.scale;

        if pattern.self_weight {
            apply_self_weight(model, mesh, scale, f);
        }

        for point_load in model.point_loads.iter().filter(|p| p.pattern == pattern.name) {
            let Some(&idx) = mesh.user_joint_index.get(&point_load.joint) else {
                log.push(format!("point load references unknown joint {:?}", point_load.joint));
                continue;
            };
            let components = point_load.as_array();
            for d in 0..6 {
                f[idx * 6 + d] += components[d] * scale * FORCE_UNIT_FACTOR;
            }
        }

        for dist_load in model
            .distributed_frame_loads
            .iter()
            .filter(|d| d.pattern == pattern.name)
        {
            apply_distributed_load(model, mesh, dist_load, scale, f, log);
        }
    }
}

fn apply_self_weight(model: &StructuralModel, mesh: &RefinedMesh, scale: f64, f: &mut DVector<f64>) {
    for (frame_id, polyline) in &mesh.frame_polylines {
        let frame = &model.frames[frame_id];
        let Some(section) = model.frame_sections.get(&frame.section) else {
            continue;
        };
        let Some(material) = model.materials.get(&section.material) else {
            continue;
        };
        let Ok(props) = section.properties() else {
            continue;
        };
        let w = material.rho() * props.a * GRAVITY;

        for k in 0..polyline.len() - 1 {
            let i_idx = polyline[k];
            let j_idx = polyline[k + 1];
            let i_joint = mesh.joints[i_idx];
            let j_joint = mesh.joints[j_idx];
            let length = {
                let d = [j_joint.x - i_joint.x, j_joint.y - i_joint.y, j_joint.z - i_joint.z];
                (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
            };
            let half = w * length / 2.0 * scale;
            f[i_idx * 6 + 1] -= half;
            f[j_idx * 6 + 1] -= half;
        }
    }
}

fn apply_distributed_load(
    model: &StructuralModel,
    mesh: &RefinedMesh,
    dist_load: &crate::loads::DistributedFrameLoad,
    scale: f64,
    f: &mut DVector<f64>,
    log: &mut Vec<String>,
) {
    let Some(polyline) = mesh.frame_polylines.get(&dist_load.frame) else {
        log.push(format!(
            "distributed load references unresolved or degenerate frame {}",
            dist_load.frame
        ));
        return;
    };
    let frame = &model.frames[&dist_load.frame];

    let total_length: f64 = (0..polyline.len() - 1)
        .map(|k| {
            let a = mesh.joints[polyline[k]];
            let b = mesh.joints[polyline[k + 1]];
            let d = [b.x - a.x, b.y - a.y, b.z - a.z];
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
        })
        .sum();

    let (clamp_start, clamp_end) = dist_load.clamped_span(total_length);
    if clamp_end <= clamp_start {
        return;
    }

    let magnitude_at = |s: f64| -> f64 {
        if (clamp_end - clamp_start).abs() < 1e-12 {
            dist_load.start_mag
        } else {
            dist_load.start_mag
                + (dist_load.end_mag - dist_load.start_mag) * (s - clamp_start) / (clamp_end - clamp_start)
        }
    };

    let mut seg_start = 0.0;
    for k in 0..polyline.len() - 1 {
        let i_idx = polyline[k];
        let j_idx = polyline[k + 1];
        let i_joint = mesh.joints[i_idx];
        let j_joint = mesh.joints[j_idx];
        let seg_len = {
            let d = [j_joint.x - i_joint.x, j_joint.y - i_joint.y, j_joint.z - i_joint.z];
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
        };
        let seg_end = seg_start + seg_len;

        let overlap_start = clamp_start.max(seg_start);
        let overlap_end = clamp_end.min(seg_end);
        if overlap_end > overlap_start {
            let w1 = magnitude_at(overlap_start);
            let w2 = magnitude_at(overlap_end);
            let sub_len = overlap_end - overlap_start;

            let r3 = member_rotation_matrix(&i_joint.coords(), &j_joint.coords(), frame.beta_deg);
            let components = direction_components(dist_load.direction, &r3);

            let mut local_fer = crate::math::Vec12::zeros();
            for axis in 0..3 {
                let comp = components[axis];
                if comp.abs() < 1e-15 {
                    continue;
                }
                local_fer += fer_trapezoidal(w1 * comp, w2 * comp, sub_len, axis);
            }
            // kN/m -> N/m conversion applied once via the same FORCE_UNIT_FACTOR used
            // for point loads.
            local_fer *= scale * FORCE_UNIT_FACTOR;

            let t = expand_transformation(&r3);
            let global_fer = t.transpose() * local_fer;

            for d in 0..6 {
                f[i_idx * 6 + d] += global_fer[d];
                f[j_idx * 6 + d] += global_fer[6 + d];
            }
        }

        seg_start = seg_end;
    }
}

/// Resolve a load direction into (local X, local Y, local Z) unit components.
///
/// `GlobalX/Y/Z` and `LocalX/Y/Z` resolve to their named positive axis: a positive
/// magnitude on any of them produces force along that axis's positive sense (see
/// `math::fer`). `Gravity` is the one fixed-direction exception, always projecting
/// onto global -Y regardless of magnitude sign, independent of the other six tags.
fn direction_components(direction: LoadDirection, r3: &Mat3) -> [f64; 3] {
    let global_unit: [f64; 3] = match direction {
        LoadDirection::GlobalX => [1.0, 0.0, 0.0],
        LoadDirection::GlobalY => [0.0, 1.0, 0.0],
        LoadDirection::GlobalZ => [0.0, 0.0, 1.0],
        LoadDirection::Gravity => [0.0, -1.0, 0.0],
        LoadDirection::LocalX => return [1.0, 0.0, 0.0],
        LoadDirection::LocalY => return [0.0, 1.0, 0.0],
        LoadDirection::LocalZ => return [0.0, 0.0, 1.0],
    };
    let mut out = [0.0; 3];
    for row in 0..3 {
        out[row] = r3[(row, 0)] * global_unit[0] + r3[(row, 1)] * global_unit[1] + r3[(row, 2)] * global_unit[2];
    }
    out
}

/// The set of free (unrestrained) global DOF indices, in ascending order.
pub fn free_dofs(mesh: &RefinedMesh) -> Vec<usize> {
    let mut free = Vec::with_capacity(mesh.dof_count());
    for (idx, joint) in mesh.joints.iter().enumerate() {
        for d in 0..6 {
            if !joint.restraint.is_restrained(d) {
                free.push(idx * 6 + d);
            }
        }
    }
    free
}

/// Gather the reduced system for the free DOFs, solve it, and scatter the result back
/// into a full-length displacement vector (restrained DOFs remain zero).
pub fn solve_displacements(
    k: &DMatrix<f64>,
    f: &DVector<f64>,
    free: &[usize],
) -> Result<DVector<f64>, FeaError> {
    let nf = free.len();
    let mut k_free = DMatrix::<f64>::zeros(nf, nf);
    let mut f_free = DVector::<f64>::zeros(nf);

    for (row, &gi) in free.iter().enumerate() {
        f_free[row] = f[gi];
        for (col, &gj) in free.iter().enumerate() {
            k_free[(row, col)] = k[(gi, gj)];
        }
    }

    let x_free = solve(&k_free, &f_free)?;

    let mut full = DVector::<f64>::zeros(k.nrows());
    for (row, &gi) in free.iter().enumerate() {
        full[gi] = x_free[row];
    }
    Ok(full)
}
