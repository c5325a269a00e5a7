//! Local stiffness and coordinate transformation for the 12-DOF prismatic beam element.

use super::{Mat12, Mat3};

/// Local 12x12 stiffness matrix for a prismatic Euler-Bernoulli beam.
///
/// DOF order: (ux_I, uy_I, uz_I, rx_I, ry_I, rz_I, ux_J, uy_J, uz_J, rx_J, ry_J, rz_J).
/// `e`/`g` are in Pa, `a`/`iy`/`iz`/`j` in m^2/m^4, `length` in m.
pub fn member_local_stiffness(e: f64, g: f64, a: f64, iy: f64, iz: f64, j: f64, length: f64) -> Mat12 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let gj_l = g * j / l;

    let eiy_l3 = e * iy / l3;
    let eiy_l2 = e * iy / l2;
    let eiy_l = e * iy / l;

    let eiz_l3 = e * iz / l3;
    let eiz_l2 = e * iz / l2;
    let eiz_l = e * iz / l;

    #[rustfmt::skip]
    let data = [
        ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,          -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,
        0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           6.0*eiz_l2,   0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           6.0*eiz_l2,
        0.0,       0.0,          12.0*eiy_l3,   0.0,    -6.0*eiy_l2,   0.0,          0.0,       0.0,          -12.0*eiy_l3,  0.0,    -6.0*eiy_l2,   0.0,
        0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,          0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    4.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    2.0*eiy_l,     0.0,
        0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           4.0*eiz_l,    0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           2.0*eiz_l,
        -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,          ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,
        0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           -6.0*eiz_l2,  0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           -6.0*eiz_l2,
        0.0,       0.0,          -12.0*eiy_l3,  0.0,    6.0*eiy_l2,    0.0,          0.0,       0.0,          12.0*eiy_l3,   0.0,    6.0*eiy_l2,    0.0,
        0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,          0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    2.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    4.0*eiy_l,     0.0,
        0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           2.0*eiz_l,    0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           4.0*eiz_l,
    ];

    Mat12::from_row_slice(&data)
}

/// The 3x3 direction-cosine rotation (rows = local X, Y, Z in global components),
/// per the beam element's coordinate transformation convention.
pub fn member_rotation_matrix(i_coords: &[f64; 3], j_coords: &[f64; 3], beta_deg: f64) -> Mat3 {
    let dx = j_coords[0] - i_coords[0];
    let dy = j_coords[1] - i_coords[1];
    let dz = j_coords[2] - i_coords[2];
    let length = (dx * dx + dy * dy + dz * dz).sqrt();

    let cx = dx / length;
    let cy = dy / length;
    let cz = dz / length;

    let (lyx, lyy, lyz) = if cy.abs() > 0.99 {
        (1.0, 0.0, 0.0)
    } else {
        let t = (cx * cx + cz * cz).sqrt();
        (-cx * cy / t, t, -cz * cy / t)
    };

    // local Z = local X cross local Y
    let lzx = cy * lyz - cz * lyy;
    let lzy = cz * lyx - cx * lyz;
    let lzz = cx * lyy - cy * lyx;

    let beta = beta_deg.to_radians();
    let (sin_b, cos_b) = beta.sin_cos();

    let (ry_x, ry_y, ry_z);
    let (rz_x, rz_y, rz_z);
    if beta.abs() > 1e-12 {
        ry_x = lyx * cos_b + lzx * sin_b;
        ry_y = lyy * cos_b + lzy * sin_b;
        ry_z = lyz * cos_b + lzz * sin_b;
        rz_x = -lyx * sin_b + lzx * cos_b;
        rz_y = -lyy * sin_b + lzy * cos_b;
        rz_z = -lyz * sin_b + lzz * cos_b;
    } else {
        ry_x = lyx;
        ry_y = lyy;
        ry_z = lyz;
        rz_x = lzx;
        rz_y = lzy;
        rz_z = lzz;
    }

    Mat3::new(cx, cy, cz, ry_x, ry_y, ry_z, rz_x, rz_y, rz_z)
}

/// Expand a 3x3 rotation into the block-diagonal 12x12 transform (repeated 4x).
pub fn expand_transformation(r3: &Mat3) -> Mat12 {
    let mut t = Mat12::zeros();
    for block in 0..4 {
        let offset = block * 3;
        for row in 0..3 {
            for col in 0..3 {
                t[(offset + row, offset + col)] = r3[(row, col)];
            }
        }
    }
    t
}
