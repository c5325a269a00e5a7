//! fea-solver example: a simple portal frame under dead and wind load.

use fea_solver::prelude::*;

fn main() {
    env_logger::init();

    println!("=== FEA Solver Example: Portal Frame ===\n");

    let mut model = StructuralModel::new();

    model.add_material("Steel", Material::steel());

    // Approximate W12x26 properties, expressed as an I-section.
    model.add_frame_section(
        "W12x26",
        FrameSection::new(
            FrameSectionShape::ISection {
                d: 0.31,
                bf: 0.165,
                tw: 0.006,
                tf: 0.0096,
            },
            "Steel",
        ),
    );

    //     N3 -------- N4
    //     |           |
    //     |           |
    //     N1          N2
    //     ^           ^
    //   Fixed       Fixed

    let height = 4.0;
    let span = 6.0;

    model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(2), Joint::new(span, 0.0, 0.0).with_restraint(Restraint::FIXED));
    model.add_joint(UserId(3), Joint::new(0.0, height, 0.0));
    model.add_joint(UserId(4), Joint::new(span, height, 0.0));

    model.add_frame(1, Frame::new(UserId(1), UserId(3), "W12x26"));
    model.add_frame(2, Frame::new(UserId(2), UserId(4), "W12x26"));
    model.add_frame(3, Frame::new(UserId(3), UserId(4), "W12x26"));

    model.add_load_pattern(LoadPattern::new("Dead", LoadCategory::Dead));
    model.add_load_pattern(LoadPattern::new("Wind", LoadCategory::Wind));

    // 20 kN/m uniform on the beam, dead pattern.
    model.add_distributed_frame_load(DistributedFrameLoad::uniform(3, "Dead", LoadDirection::Gravity, 20.0, span));

    // 10 kN lateral at roof level, wind pattern.
    model.add_point_load(PointLoad::force(UserId(3), "Wind", 10.0, 0.0, 0.0));

    model.add_load_case(LoadCase::new("Dead").with_pattern("Dead", 1.0));
    model.add_load_case(LoadCase::new("Wind").with_pattern("Wind", 1.0));

    model.add_load_combination(LoadCombination::new("1.4D").with_case("Dead", 1.4));
    model.add_load_combination(
        LoadCombination::new("1.2D + 1.0W")
            .with_case("Dead", 1.2)
            .with_case("Wind", 1.0),
    );

    let mut engine = Engine::new();

    for combo_name in ["1.4D", "1.2D + 1.0W"] {
        println!("=== Results for {combo_name} ===\n");
        let result = engine.analyze_combination(&model, combo_name);

        if !result.is_valid {
            println!("  analysis invalid: {:?}\n", result.log);
            continue;
        }

        println!("Joint displacements:");
        for id in [UserId(1), UserId(2), UserId(3), UserId(4)] {
            if let Some(d) = result.displacements.get(&id) {
                println!(
                    "  J{}: ux={:.4}mm uy={:.4}mm rz={:.6}rad",
                    id.0,
                    d.ux * 1000.0,
                    d.uy * 1000.0,
                    d.rz
                );
            }
        }

        println!("\nReactions:");
        for r in &result.reactions {
            println!(
                "  J{}: fx={:.2}kN fy={:.2}kN mz={:.2}kN*m",
                r.joint.0,
                r.fx / 1000.0,
                r.fy / 1000.0,
                r.mz / 1000.0
            );
        }

        println!("\nMax displacement: {:.4}mm\n", result.max_displacement * 1000.0);
    }

    println!("=== Analysis Complete ===");
}
