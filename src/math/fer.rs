//! Fixed-end-reaction (equivalent nodal force) formulas for distributed loads on a
//! single sub-member.
//!
//! A positive magnitude acts in the positive sense of the given local axis (`w` and
//! the returned translational entries always share a sign); the alternating sign on
//! the two end moments is the usual fixed-end-moment asymmetry, not a direction
//! convention, and its relative sign differs between axis 1 (local Y, couples to rz)
//! and axis 2 (local Z, couples to ry) because the two bending planes have opposite
//! handedness under the right-hand rule.

use super::Vec12;

/// Equivalent nodal forces for a load uniform over the full sub-member length
/// (half-length times magnitude at each end). `direction` is 0=axial(local X),
/// 1=local Y, 2=local Z.
pub fn fer_uniform(w: f64, length: f64, direction: usize) -> Vec12 {
    let l = length;
    let l2 = l * l;
    let mut fer = Vec12::zeros();

    match direction {
        0 => {
            fer[0] = w * l / 2.0;
            fer[6] = w * l / 2.0;
        }
        1 => {
            fer[1] = w * l / 2.0;
            fer[5] = -w * l2 / 12.0;
            fer[7] = w * l / 2.0;
            fer[11] = w * l2 / 12.0;
        }
        2 => {
            fer[2] = w * l / 2.0;
            fer[4] = w * l2 / 12.0;
            fer[8] = w * l / 2.0;
            fer[10] = -w * l2 / 12.0;
        }
        _ => {}
    }

    fer
}

/// Equivalent nodal forces for a trapezoidal load varying linearly from `w1` (at the
/// i-end) to `w2` (at the j-end) over the sub-member's full length:
///
/// End forces: (2w1+w2)/6 * L at i, (w1+2w2)/6 * L at j.
/// End moments (transverse directions only): (3w1+2w2)/60 * L^2 at i,
/// -(2w1+3w2)/60 * L^2 at j.
pub fn fer_trapezoidal(w1: f64, w2: f64, length: f64, direction: usize) -> Vec12 {
    let l = length;
    let l2 = l * l;
    let f_i = (2.0 * w1 + w2) / 6.0 * l;
    let f_j = (w1 + 2.0 * w2) / 6.0 * l;
    let m_i = (3.0 * w1 + 2.0 * w2) / 60.0 * l2;
    let m_j = -(2.0 * w1 + 3.0 * w2) / 60.0 * l2;

    let mut fer = Vec12::zeros();
    match direction {
        0 => {
            fer[0] = f_i;
            fer[6] = f_j;
        }
        1 => {
            fer[1] = f_i;
            fer[5] = -m_i;
            fer[7] = f_j;
            fer[11] = -m_j;
        }
        2 => {
            fer[2] = f_i;
            fer[4] = m_i;
            fer[8] = f_j;
            fer[10] = m_j;
        }
        _ => {}
    }

    fer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_is_special_case_of_trapezoidal() {
        let w = 5.0;
        let l = 4.0;
        let uniform = fer_uniform(w, l, 1);
        let trap = fer_trapezoidal(w, w, l, 1);
        // total end shear must match; the uniform formula (wL/2 each end) is the
        // w1 == w2 limit of the consistent trapezoidal distribution.
        assert_relative_eq!(uniform[1], trap[1], epsilon = 1e-9);
        assert_relative_eq!(uniform[7], trap[7], epsilon = 1e-9);
    }

    #[test]
    fn total_force_matches_trapezoid_area() {
        let (w1, w2, l) = (2.0, 8.0, 3.0);
        let trap = fer_trapezoidal(w1, w2, l, 1);
        let total = trap[1] + trap[7];
        let expected = (w1 + w2) / 2.0 * l;
        assert_relative_eq!(total, expected, epsilon = 1e-9);
    }
}
