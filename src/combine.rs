//! Combination engine: linear superposition of per-case results.

use std::collections::HashMap;

use crate::results::{AnalysisResults, FrameDetailedResult, JointDisplacement};

/// Superpose `cases` (each already-computed result, paired with its scale factor) into
/// one combined result. Duplicate case ids are expected to appear twice in `cases`
/// already (the caller iterates the combination's ordered `(case, scale)` list), and
/// this function simply sums every entry, so duplicates sum linearly.
///
/// If any input case is invalid, the combination itself is invalid and absorbs that
/// case's log entries.
pub fn combine(combo_id: &str, timestamp: u64, cases: &[(f64, &AnalysisResults)]) -> AnalysisResults {
    let mut log = Vec::new();
    let mut any_invalid = false;
    for (_, result) in cases {
        if !result.is_valid {
            any_invalid = true;
            log.extend(result.log.iter().cloned());
        }
    }

    if any_invalid || cases.is_empty() {
        if cases.is_empty() {
            log.push("combination references no cases".to_string());
        }
        return AnalysisResults::invalid(combo_id, timestamp, log);
    }

    let mut displacements: HashMap<_, JointDisplacement> = HashMap::new();
    for (scale, result) in cases {
        for (&joint, d) in &result.displacements {
            let scaled = d.scale(*scale);
            displacements
                .entry(joint)
                .and_modify(|acc| *acc = acc.add(&scaled))
                .or_insert(scaled);
        }
    }

    let mut frame_detailed_results: HashMap<_, FrameDetailedResult> = HashMap::new();
    for (scale, result) in cases {
        for (&frame_id, detail) in &result.frame_detailed_results {
            let entry = frame_detailed_results
                .entry(frame_id)
                .or_insert_with(|| FrameDetailedResult {
                    stations: detail.stations.clone(),
                    displacements: vec![JointDisplacement::default(); detail.displacements.len()],
                    forces: vec![Default::default(); detail.forces.len()],
                });
            for i in 0..detail.displacements.len() {
                entry.displacements[i] = entry.displacements[i].add(&detail.displacements[i].scale(*scale));
            }
            for i in 0..detail.forces.len() {
                entry.forces[i] = entry.forces[i].add(&detail.forces[i].scale(*scale));
            }
        }
    }

    let mut reactions_by_joint = HashMap::new();
    for (scale, result) in cases {
        for r in &result.reactions {
            let scaled = r.scale(*scale);
            reactions_by_joint
                .entry(r.joint)
                .and_modify(|acc: &mut crate::results::Reaction| *acc = acc.add(&scaled))
                .or_insert(scaled);
        }
    }
    let mut reactions: Vec<_> = reactions_by_joint.into_values().collect();
    reactions.sort_by_key(|r| r.joint.0);

    let max_displacement = displacements.values().map(|d| d.magnitude()).fold(0.0, f64::max);

    AnalysisResults {
        load_case_id: combo_id.to_string(),
        displacements,
        frame_detailed_results,
        reactions,
        max_displacement,
        is_valid: true,
        timestamp,
        log,
    }
}
