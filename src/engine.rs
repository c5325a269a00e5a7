//! The `Engine`: a result-store cache over `StructuralModel` analyses.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use log::error;

use crate::analysis::AnalysisOptions;
use crate::assembly::{assemble, free_dofs, solve_displacements};
use crate::combine::combine;
use crate::error::FeaError;
use crate::mesh;
use crate::model::StructuralModel;
use crate::recovery::{frame_detailed_results, joint_displacements, max_displacement, reactions};
use crate::results::AnalysisResults;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Keyed result store: re-requesting an already-computed case or combination id
/// returns the cached record rather than re-solving, unless the
/// caller calls `invalidate`/`invalidate_all`.
#[derive(Debug, Default)]
pub struct Engine {
    store: HashMap<String, AnalysisResults>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a single cached result so it is recomputed on next request.
    pub fn invalidate(&mut self, id: &str) {
        self.store.remove(id);
    }

    /// Drop every cached result.
    pub fn invalidate_all(&mut self) {
        self.store.clear();
    }

    /// Analyze `case_id` against `model`, returning an always-valid result. The
    /// result is cached under `case_id` for subsequent calls and for combinations that
    /// reference it.
    pub fn analyze_case(&mut self, model: &StructuralModel, case_id: &str) -> &AnalysisResults {
        self.analyze_case_with_options(model, case_id, &AnalysisOptions::default())
    }

    /// As `analyze_case`, but honoring `options.force_recompute` to bypass the cache.
    pub fn analyze_case_with_options(
        &mut self,
        model: &StructuralModel,
        case_id: &str,
        options: &AnalysisOptions,
    ) -> &AnalysisResults {
        if options.force_recompute || !self.store.contains_key(case_id) {
            let result = self.run_case(model, case_id);
            self.store.insert(case_id.to_string(), result);
        }
        &self.store[case_id]
    }

    /// Analyze `combo_id`, ensuring every referenced case is computed first
    /// (consulting the store before recomputing), and caching the combined
    /// result.
    pub fn analyze_combination(&mut self, model: &StructuralModel, combo_id: &str) -> &AnalysisResults {
        if !self.store.contains_key(combo_id) {
            let result = self.run_combination(model, combo_id);
            self.store.insert(combo_id.to_string(), result);
        }
        &self.store[combo_id]
    }

    fn run_case(&mut self, model: &StructuralModel, case_id: &str) -> AnalysisResults {
        let timestamp = now_millis();

        if let Err(e) = model.validate() {
            error!("{e}");
            return AnalysisResults::invalid(case_id, timestamp, vec![e.to_string()]);
        }

        let Some(case) = model.load_cases.get(case_id) else {
            let e = FeaError::UnknownCase(case_id.to_string());
            error!("{e}");
            return AnalysisResults::invalid(case_id, timestamp, vec![e.to_string()]);
        };

        let mut log = Vec::new();
        let refined = mesh::refine(model, &mut log);

        let assembly = assemble(model, &refined, case);
        log.extend(assembly.log.iter().cloned());

        let free = free_dofs(&refined);
        let u = match solve_displacements(&assembly.k, &assembly.f, &free) {
            Ok(u) => u,
            Err(e) => {
                error!("{e}");
                log.push(e.to_string());
                return AnalysisResults::invalid(case_id, timestamp, log);
            }
        };

        let displacements = joint_displacements(&refined, &u);
        let frame_results = frame_detailed_results(model, &refined, &assembly, &u);
        let joint_reactions = reactions(model, &refined, &assembly, &u);
        let max_disp = max_displacement(&displacements);

        AnalysisResults {
            load_case_id: case_id.to_string(),
            displacements,
            frame_detailed_results: frame_results,
            reactions: joint_reactions,
            max_displacement: max_disp,
            is_valid: true,
            timestamp,
            log,
        }
    }

    fn run_combination(&mut self, model: &StructuralModel, combo_id: &str) -> AnalysisResults {
        let timestamp = now_millis();

        let Some(combo) = model.load_combinations.get(combo_id).cloned() else {
            let e = FeaError::UnknownCombination(combo_id.to_string());
            error!("{e}");
            return AnalysisResults::invalid(combo_id, timestamp, vec![e.to_string()]);
        };

        for case_scale in &combo.cases {
            self.analyze_case(model, &case_scale.case);
        }

        let cases: Vec<(f64, &AnalysisResults)> = combo
            .cases
            .iter()
            .map(|cs| (cs.scale, &self.store[&cs.case]))
            .collect();

        combine(combo_id, timestamp, &cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Frame, FrameSection, FrameSectionShape, Joint, Material, Restraint};
    use crate::ids::UserId;
    use crate::loads::{LoadCase, LoadCategory, LoadPattern, PointLoad};

    fn cantilever_model() -> StructuralModel {
        let mut model = StructuralModel::new();
        model.add_material("Steel", Material::steel());
        model.add_frame_section(
            "Beam",
            FrameSection::new(FrameSectionShape::Rectangular { b: 0.1, h: 0.2 }, "Steel"),
        );
        model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
        model.add_joint(UserId(2), Joint::new(5.0, 0.0, 0.0));
        model.add_frame(1, Frame::new(UserId(1), UserId(2), "Beam"));
        model.add_load_pattern(LoadPattern::new("Live", LoadCategory::Live));
        model.add_point_load(PointLoad::force(UserId(2), "Live", 0.0, -10.0, 0.0));
        model.add_load_case(LoadCase::new("C1").with_pattern("Live", 1.0));
        model
    }

    #[test]
    fn analyze_case_returns_valid_result_for_known_case() {
        let model = cantilever_model();
        let mut engine = Engine::new();
        let result = engine.analyze_case(&model, "C1");
        assert!(result.is_valid);
        assert!(result.displacements.contains_key(&UserId(2)));
    }

    #[test]
    fn unknown_case_returns_invalid_result_without_panicking() {
        let model = cantilever_model();
        let mut engine = Engine::new();
        let result = engine.analyze_case(&model, "NoSuchCase");
        assert!(!result.is_valid);
        assert!(!result.log.is_empty());
    }

    #[test]
    fn repeated_analysis_is_idempotent() {
        let model = cantilever_model();
        let mut engine = Engine::new();
        let first = engine.analyze_case(&model, "C1").displacements.clone();
        let second = engine.analyze_case(&model, "C1").displacements.clone();
        for (id, d1) in &first {
            let d2 = &second[id];
            assert!((d1.uy - d2.uy).abs() < 1e-15);
        }
    }
}
