//! Constant-strain-triangle plane-stress kernel. Free-standing: shells are
//! never assembled into the 3D frame system, so this module has no `StructuralModel`
//! plumbing of its own.

use nalgebra::{Matrix3, Matrix3x6, Matrix6, Vector3, Vector6};

use crate::error::{FeaError, FeaResult};

/// Signed area of the triangle (i, j, k) via the shoelace formula, in the triangle's
/// own 2D plane coordinates.
pub fn triangle_area(xi: [f64; 2], xj: [f64; 2], xk: [f64; 2]) -> f64 {
    0.5 * ((xj[0] - xi[0]) * (xk[1] - xi[1]) - (xk[0] - xi[0]) * (xj[1] - xi[1]))
}

/// Strain-displacement matrix B (3x6) for a constant-strain triangle.
fn strain_displacement(xi: [f64; 2], xj: [f64; 2], xk: [f64; 2], area: f64) -> Matrix3x6<f64> {
    let bi = xj[1] - xk[1];
    let bj = xk[1] - xi[1];
    let bk = xi[1] - xj[1];
    let ci = xk[0] - xj[0];
    let cj = xi[0] - xk[0];
    let ck = xj[0] - xi[0];

    let two_a = 2.0 * area;

    #[rustfmt::skip]
    let b = Matrix3x6::new(
        bi, 0.0, bj, 0.0, bk, 0.0,
        0.0, ci, 0.0, cj, 0.0, ck,
        ci, bi, cj, bj, ck, bk,
    );
    b / two_a
}

/// Plane-stress constitutive matrix D (3x3) for isotropic material.
pub fn plane_stress_constitutive(e: f64, nu: f64) -> Matrix3<f64> {
    let factor = e / (1.0 - nu * nu);
    Matrix3::new(
        factor,
        factor * nu,
        0.0,
        factor * nu,
        factor,
        0.0,
        0.0,
        0.0,
        factor * (1.0 - nu) / 2.0,
    )
}

/// Element stiffness k = B^T D B * A * t for a constant-strain triangle.
///
/// `xi`/`xj`/`xk` are the triangle's vertex coordinates projected into its own plane;
/// `thickness` is the shell thickness. Returns `InvalidInput` if the triangle is
/// degenerate (near-zero area).
pub fn cst_stiffness(
    xi: [f64; 2],
    xj: [f64; 2],
    xk: [f64; 2],
    e: f64,
    nu: f64,
    thickness: f64,
) -> FeaResult<Matrix6<f64>> {
    let area = triangle_area(xi, xj, xk);
    if area.abs() < 1e-12 {
        return Err(FeaError::InvalidInput(
            "degenerate CST triangle: near-zero area".to_string(),
        ));
    }
    let b = strain_displacement(xi, xj, xk, area);
    let d = plane_stress_constitutive(e, nu);
    Ok(b.transpose() * d * b * area.abs() * thickness)
}

/// Centroidal stress (sigma_x, sigma_y, tau_xy) from nodal displacements `u` (6,
/// ux_i,uy_i,ux_j,uy_j,ux_k,uy_k) — constant over the element by construction.
pub fn cst_centroidal_stress(
    xi: [f64; 2],
    xj: [f64; 2],
    xk: [f64; 2],
    e: f64,
    nu: f64,
    u: &Vector6<f64>,
) -> Vector3<f64> {
    let area = triangle_area(xi, xj, xk);
    let b = strain_displacement(xi, xj, xk, area);
    let d = plane_stress_constitutive(e, nu);
    d * (b * u)
}

/// Von Mises stress from a plane-stress state (sigma_x, sigma_y, tau_xy).
pub fn von_mises_plane_stress(stress: &Vector3<f64>) -> f64 {
    let (sx, sy, txy) = (stress[0], stress[1], stress[2]);
    (sx * sx - sx * sy + sy * sy + 3.0 * txy * txy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_of_unit_right_triangle() {
        let area = triangle_area([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
        assert_relative_eq!(area, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn stiffness_is_symmetric() {
        let k = cst_stiffness([0.0, 0.0], [2.0, 0.0], [0.0, 3.0], 200e9, 0.3, 0.01).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn degenerate_triangle_is_invalid() {
        let result = cst_stiffness([0.0, 0.0], [1.0, 0.0], [2.0, 0.0], 200e9, 0.3, 0.01);
        assert!(matches!(result, Err(FeaError::InvalidInput(_))));
    }

    #[test]
    fn rigid_translation_gives_zero_stress() {
        let u = Vector6::new(0.002, 0.002, 0.002, 0.002, 0.002, 0.002);
        let stress = cst_centroidal_stress([0.0, 0.0], [2.0, 0.0], [0.0, 3.0], 200e9, 0.3, &u);
        for i in 0..3 {
            assert_relative_eq!(stress[i], 0.0, epsilon = 1e-6);
        }
    }
}
