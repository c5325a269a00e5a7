//! End-to-end scenarios exercising the full refine -> assemble -> solve -> recover
//! pipeline against closed-form structural mechanics results (§8).

use fea_solver::prelude::*;

fn rectangular_section(model: &mut StructuralModel, id: &str, material: &str, b: f64, h: f64) {
    model.add_frame_section(id, FrameSection::new(FrameSectionShape::Rectangular { b, h }, material));
}

#[test]
fn s1_cantilever_tip_deflection() {
    let mut model = StructuralModel::new();
    model.add_material("Steel", Material::isotropic(210_000.0, 0.3, 7850.0));
    rectangular_section(&mut model, "Beam", "Steel", 0.2, 0.3);
    let iz = FrameSectionShape::Rectangular { b: 0.2, h: 0.3 }.properties().unwrap().iz;

    let length = 5.0;
    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(2), Joint::new(length, 0.0, 0.0));
    model.add_frame(1, Frame::new(UserId(1), UserId(2), "Beam"));

    model.add_load_pattern(LoadPattern::new("Tip", LoadCategory::Live));
    model.add_point_load(PointLoad::force(UserId(2), "Tip", 0.0, -10_000.0, 0.0));
    model.add_load_case(LoadCase::new("Tip").with_pattern("Tip", 1.0));

    let mut engine = Engine::new();
    let result = engine.analyze_case(&model, "Tip");
    assert!(result.is_valid, "analysis failed: {:?}", result.log);

    let e_pa = 210_000.0e6;
    let expected = -10_000.0 * length.powi(3) / (3.0 * e_pa * iz);
    let actual = result.displacements[&UserId(2)].uy;

    assert!(
        (actual - expected).abs() / expected.abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn s2_simply_supported_udl_midspan_deflection() {
    let mut model = StructuralModel::new();
    model.add_material("Concrete", Material::isotropic(30_000.0, 0.2, 2400.0));
    rectangular_section(&mut model, "Beam", "Concrete", 0.2, 0.3);
    let iz = FrameSectionShape::Rectangular { b: 0.2, h: 0.3 }.properties().unwrap().iz;

    let span = 6.0;
    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::PINNED));
    model.add_joint(UserId(2), Joint::new(span, 0.0, 0.0).with_restraint(Restraint::PINNED));
    model.add_frame(1, Frame::new(UserId(1), UserId(2), "Beam"));

    model.add_load_pattern(LoadPattern::new("UDL", LoadCategory::Live));
    model.add_distributed_frame_load(DistributedFrameLoad::uniform(1, "UDL", LoadDirection::GlobalY, -10.0, span));
    model.add_load_case(LoadCase::new("UDL").with_pattern("UDL", 1.0));

    let mut engine = Engine::new();
    let result = engine.analyze_case(&model, "UDL");
    assert!(result.is_valid, "analysis failed: {:?}", result.log);

    let e_pa = 30_000.0e6;
    let w = 10_000.0; // N/m
    let expected = 5.0 * w * span.powi(4) / (384.0 * e_pa * iz);

    let detail = &result.frame_detailed_results[&1];
    let mid_idx = detail.stations.iter().position(|&t| (t - 0.5).abs() < 1e-9).unwrap();
    let actual = detail.displacements[mid_idx].uy.abs();

    assert!(
        (actual - expected).abs() / expected < 0.02,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn s3_axial_rod_elongation() {
    let mut model = StructuralModel::new();
    model.add_material("Steel", Material::isotropic(200_000.0, 0.3, 7850.0));
    rectangular_section(&mut model, "Rod", "Steel", 0.1, 0.1);

    let length = 2.0;
    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(2), Joint::new(length, 0.0, 0.0));
    model.add_frame(1, Frame::new(UserId(1), UserId(2), "Rod"));

    model.add_load_pattern(LoadPattern::new("Axial", LoadCategory::Live));
    model.add_point_load(PointLoad::force(UserId(2), "Axial", 100.0, 0.0, 0.0));
    model.add_load_case(LoadCase::new("Axial").with_pattern("Axial", 1.0));

    let mut engine = Engine::new();
    let result = engine.analyze_case(&model, "Axial");
    assert!(result.is_valid, "analysis failed: {:?}", result.log);

    let e_pa = 200_000.0e6;
    let a = 0.1 * 0.1;
    let expected = 100_000.0 * length / (e_pa * a);
    let actual = result.displacements[&UserId(2)].ux;

    assert!(
        (actual - expected).abs() / expected < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn s4_combination_linearity() {
    let mut model = StructuralModel::new();
    model.add_material("Steel", Material::steel());
    rectangular_section(&mut model, "Beam", "Steel", 0.2, 0.3);

    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(2), Joint::new(4.0, 0.0, 0.0));
    model.add_frame(1, Frame::new(UserId(1), UserId(2), "Beam"));

    model.add_load_pattern(LoadPattern::new("Unit", LoadCategory::Live));
    model.add_point_load(PointLoad::force(UserId(2), "Unit", 0.0, -1_000.0, 0.0));
    model.add_load_case(LoadCase::new("A").with_pattern("Unit", 1.0));
    model.add_load_case(LoadCase::new("B").with_pattern("Unit", 1.0));
    model.add_load_combination(LoadCombination::new("Combo").with_case("A", 2.0).with_case("B", 3.0));

    let mut engine = Engine::new();
    let base = engine.analyze_case(&model, "A").displacements[&UserId(2)];
    let combo = engine.analyze_combination(&model, "Combo");
    assert!(combo.is_valid);
    let combo_disp = combo.displacements[&UserId(2)];

    assert!(
        (combo_disp.uy - 5.0 * base.uy).abs() / (5.0 * base.uy).abs() < 1e-9,
        "expected 5x base displacement, got base={:?} combo={:?}",
        base,
        combo_disp
    );
}

#[test]
fn s5_portal_frame_reaction_equilibrium() {
    let mut model = StructuralModel::new();
    model.add_material("Steel", Material::steel());
    rectangular_section(&mut model, "Frame", "Steel", 0.3, 0.3);

    let height = 3.0;
    let span = 5.0;
    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(2), Joint::new(span, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(3), Joint::new(0.0, height, 0.0));
    model.add_joint(UserId(4), Joint::new(span, height, 0.0));

    model.add_frame(1, Frame::new(UserId(1), UserId(3), "Frame"));
    model.add_frame(2, Frame::new(UserId(2), UserId(4), "Frame"));
    model.add_frame(3, Frame::new(UserId(3), UserId(4), "Frame"));

    model.add_load_pattern(LoadPattern::new("Lateral", LoadCategory::Wind));
    model.add_point_load(PointLoad::force(UserId(3), "Lateral", 50.0, 0.0, 0.0));
    model.add_load_case(LoadCase::new("Lateral").with_pattern("Lateral", 1.0));

    let mut engine = Engine::new();
    let result = engine.analyze_case(&model, "Lateral");
    assert!(result.is_valid, "analysis failed: {:?}", result.log);

    let sum_fx: f64 = result.reactions.iter().map(|r| r.fx).sum();
    assert!((sum_fx - (-50_000.0)).abs() < 1e-3, "sum Fx = {sum_fx}");
}

#[test]
fn s6_cst_patch_test_uniform_edge_traction() {
    use fea_solver::math::{cst_centroidal_stress, cst_stiffness, solve};
    use nalgebra::{DMatrix, DVector, Vector6};

    let e = 200.0e9;
    let nu = 0.3;
    let thickness = 1.0;
    let traction = 1.0e6; // Pa, applied normal to the x=1 edge

    // Unit square, nodes n1..n4 at (0,0),(1,0),(1,1),(0,1), split along the n1-n3
    // diagonal into two constant-strain triangles.
    let n1 = [0.0, 0.0];
    let n2 = [1.0, 0.0];
    let n3 = [1.0, 1.0];
    let n4 = [0.0, 1.0];

    // Global DOF layout: node k occupies dofs 2k (ux), 2k+1 (uy).
    let t1_nodes = [0usize, 1, 2]; // n1, n2, n3
    let t2_nodes = [0usize, 2, 3]; // n1, n3, n4

    let k1 = cst_stiffness(n1, n2, n3, e, nu, thickness).unwrap();
    let k2 = cst_stiffness(n1, n3, n4, e, nu, thickness).unwrap();

    let ndof = 8;
    let mut k = DMatrix::<f64>::zeros(ndof, ndof);
    for (local_elem, nodes) in [(&k1, &t1_nodes), (&k2, &t2_nodes)] {
        for a in 0..3 {
            for b in 0..3 {
                for r in 0..2 {
                    for c in 0..2 {
                        k[(nodes[a] * 2 + r, nodes[b] * 2 + c)] += local_elem[(a * 2 + r, b * 2 + c)];
                    }
                }
            }
        }
    }

    // Pin/roller on the left edge: n1 fully fixed, n4 restrained against ux only,
    // enough to remove the three rigid-body modes without over-constraining the patch.
    // Uniform traction on the opposite (x=1) edge, converted to consistent nodal
    // forces: traction * edge_length * thickness split evenly between the two edge
    // nodes (n2, n3).
    let mut f = DVector::<f64>::zeros(ndof);
    let nodal_force = traction * 1.0 * thickness / 2.0;
    f[2 * 1] += nodal_force; // n2 ux
    f[2 * 2] += nodal_force; // n3 ux

    let free: Vec<usize> = vec![2, 3, 4, 5, 7]; // n2x,n2y,n3x,n3y,n4y (n1x,n1y,n4x fixed)
    let nf = free.len();
    let mut k_free = DMatrix::<f64>::zeros(nf, nf);
    let mut f_free = DVector::<f64>::zeros(nf);
    for (row, &gi) in free.iter().enumerate() {
        f_free[row] = f[gi];
        for (col, &gj) in free.iter().enumerate() {
            k_free[(row, col)] = k[(gi, gj)];
        }
    }
    let x_free = solve(&k_free, &f_free).unwrap();
    let mut u = DVector::<f64>::zeros(ndof);
    for (row, &gi) in free.iter().enumerate() {
        u[gi] = x_free[row];
    }

    let u1 = Vector6::new(u[0], u[1], u[2], u[3], u[4], u[5]);
    let u2 = Vector6::new(u[0], u[1], u[4], u[5], u[6], u[7]);

    let stress1 = cst_centroidal_stress(n1, n2, n3, e, nu, &u1);
    let stress2 = cst_centroidal_stress(n1, n3, n4, e, nu, &u2);

    for stress in [stress1, stress2] {
        assert!(
            (stress[0] - traction).abs() / traction < 1e-8,
            "expected sigma_x = {traction}, got {}",
            stress[0]
        );
        assert!(stress[1].abs() < 1e-3, "expected sigma_y = 0, got {}", stress[1]);
        assert!(stress[2].abs() < 1e-3, "expected tau_xy = 0, got {}", stress[2]);
    }
}
