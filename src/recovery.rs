//! Result recovery: joint displacements, per-station frame forces, and reactions.

use std::collections::HashMap;

use nalgebra::DVector;

use crate::assembly::{Assembly, AssembledSubMember};
use crate::ids::{FrameId, UserId};
use crate::mesh::RefinedMesh;
use crate::model::StructuralModel;
use crate::results::{FrameDetailedResult, FrameStationForces, JointDisplacement, Reaction};

/// Displacement (ux..rz) at every original joint, keyed by its caller-supplied id.
pub fn joint_displacements(mesh: &RefinedMesh, u: &DVector<f64>) -> HashMap<UserId, JointDisplacement> {
    mesh.user_joint_index
        .iter()
        .map(|(&id, &idx)| (id, displacement_at(u, idx)))
        .collect()
}

fn displacement_at(u: &DVector<f64>, idx: usize) -> JointDisplacement {
    JointDisplacement {
        ux: u[idx * 6],
        uy: u[idx * 6 + 1],
        uz: u[idx * 6 + 2],
        rx: u[idx * 6 + 3],
        ry: u[idx * 6 + 4],
        rz: u[idx * 6 + 5],
    }
}

/// Per-station displacement/force results for every original frame that survived
/// refinement.
pub fn frame_detailed_results(
    model: &StructuralModel,
    mesh: &RefinedMesh,
    assembly: &Assembly,
    u: &DVector<f64>,
) -> HashMap<FrameId, FrameDetailedResult> {
    // Index sub-member stiffness data by its (i_idx, j_idx) endpoints for station
    // force recovery; the refiner's SEGMENTS-per-frame ordering guarantees a 1:1
    // correspondence with consecutive polyline pairs.
    let mut by_endpoints: HashMap<(usize, usize), &AssembledSubMember> = HashMap::new();
    for sm in &assembly.sub_member_data {
        by_endpoints.insert((sm.i_idx, sm.j_idx), sm);
    }

    let mut results = HashMap::new();
    for (&frame_id, polyline) in &mesh.frame_polylines {
        let segments = polyline.len() - 1;
        let mut stations = Vec::with_capacity(segments + 1);
        let mut displacements = Vec::with_capacity(segments + 1);
        let mut forces = Vec::with_capacity(segments + 1);

        for k in 0..segments {
            let t = k as f64 / segments as f64;
            stations.push(t);
            let i_idx = polyline[k];
            displacements.push(displacement_at(u, i_idx));

            if let Some(sm) = by_endpoints.get(&(i_idx, polyline[k + 1])) {
                forces.push(station_forces(sm, u, false));
            } else {
                forces.push(FrameStationForces::default());
            }
        }

        // Final station: the j-end of the last sub-member.
        stations.push(1.0);
        let last_j = polyline[segments];
        displacements.push(displacement_at(u, last_j));
        if let Some(sm) = by_endpoints.get(&(polyline[segments - 1], last_j)) {
            forces.push(station_forces(sm, u, true));
        } else {
            forces.push(FrameStationForces::default());
        }

        results.insert(
            frame_id,
            FrameDetailedResult {
                stations,
                displacements,
                forces,
            },
        );
    }

    let _ = model;
    results
}

fn station_forces(sm: &AssembledSubMember, u: &DVector<f64>, j_end: bool) -> FrameStationForces {
    let mut u_global = crate::math::Vec12::zeros();
    for d in 0..6 {
        u_global[d] = u[sm.i_idx * 6 + d];
        u_global[6 + d] = u[sm.j_idx * 6 + d];
    }
    let t = crate::math::expand_transformation(&sm.r3);
    let u_local = t * u_global;
    let f_local = sm.k_local * u_local;

    let base = if j_end { 6 } else { 0 };
    FrameStationForces {
        p: f_local[base],
        v2: f_local[base + 1],
        v3: f_local[base + 2],
        t: f_local[base + 3],
        m2: f_local[base + 4],
        m3: f_local[base + 5],
    }
}

/// Joint reactions: F_rxn = K*u at every restrained DOF, aggregated per joint.
/// Only joints with at least one restrained DOF are returned.
pub fn reactions(
    model: &StructuralModel,
    mesh: &RefinedMesh,
    assembly: &Assembly,
    u: &DVector<f64>,
) -> Vec<Reaction> {
    let f_full = &assembly.k * u;
    let mut out = Vec::new();

    for &id in model.joints.keys() {
        let Some(&idx) = mesh.user_joint_index.get(&id) else {
            continue;
        };
        let joint = mesh.joints[idx];
        if joint.restraint.is_free() {
            continue;
        }
        out.push(Reaction {
            joint: id,
            fx: if joint.restraint.is_restrained(0) { f_full[idx * 6] } else { 0.0 },
            fy: if joint.restraint.is_restrained(1) { f_full[idx * 6 + 1] } else { 0.0 },
            fz: if joint.restraint.is_restrained(2) { f_full[idx * 6 + 2] } else { 0.0 },
            mx: if joint.restraint.is_restrained(3) { f_full[idx * 6 + 3] } else { 0.0 },
            my: if joint.restraint.is_restrained(4) { f_full[idx * 6 + 4] } else { 0.0 },
            mz: if joint.restraint.is_restrained(5) { f_full[idx * 6 + 5] } else { 0.0 },
        });
    }

    out.sort_by_key(|r| r.joint.0);
    out
}

/// Maximum translational displacement magnitude over all original joints.
pub fn max_displacement(displacements: &HashMap<UserId, JointDisplacement>) -> f64 {
    displacements
        .values()
        .map(|d| (d.ux * d.ux + d.uy * d.uy + d.uz * d.uz).sqrt())
        .fold(0.0, f64::max)
}
