//! Dense numerical kernels: the linear solver, the beam element, fixed-end
//! reactions, and the CST plane-stress kernel.

mod beam;
mod cst;
mod dense;
mod fer;

use nalgebra::{SMatrix, SVector};

/// 3x3 direction-cosine matrix.
pub type Mat3 = SMatrix<f64, 3, 3>;
/// 12x12 element stiffness/transformation matrix.
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-component element force/displacement vector.
pub type Vec12 = SVector<f64, 12>;

pub use beam::{expand_transformation, member_local_stiffness, member_rotation_matrix};
pub use cst::{
    cst_centroidal_stress, cst_stiffness, plane_stress_constitutive, triangle_area,
    von_mises_plane_stress,
};
pub use dense::{solve, LuFactorization};
pub use fer::{fer_trapezoidal, fer_uniform};
