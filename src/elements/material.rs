//! Material properties.
//!
//! Modeled as a tagged sum type: the solver core only ever reads `e()`, `g()`, `rho()`
//! off a `Material`; variant-specific strength properties
//! (fy/fu for steel, fc/ft for concrete) live on the variant body and are never touched
//! by the stiffness assembly.

use serde::{Deserialize, Serialize};

/// Modulus E and shear modulus G are both expressed in MPa at the model boundary, per
/// the input units callers supply; callers of the solver core get them converted to Pa.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Material {
    Steel {
        e: f64,
        g: f64,
        nu: f64,
        rho: f64,
        fy: f64,
        fu: f64,
    },
    Concrete {
        e: f64,
        g: f64,
        nu: f64,
        rho: f64,
        fc: f64,
        ft: f64,
    },
    LinearElastic {
        e: f64,
        g: f64,
        nu: f64,
        rho: f64,
    },
}

impl Material {
    /// Modulus of elasticity, MPa.
    pub fn e(&self) -> f64 {
        match *self {
            Material::Steel { e, .. } => e,
            Material::Concrete { e, .. } => e,
            Material::LinearElastic { e, .. } => e,
        }
    }

    /// Shear modulus, MPa.
    pub fn g(&self) -> f64 {
        match *self {
            Material::Steel { g, .. } => g,
            Material::Concrete { g, .. } => g,
            Material::LinearElastic { g, .. } => g,
        }
    }

    pub fn nu(&self) -> f64 {
        match *self {
            Material::Steel { nu, .. } => nu,
            Material::Concrete { nu, .. } => nu,
            Material::LinearElastic { nu, .. } => nu,
        }
    }

    /// Density, kg/m^3.
    pub fn rho(&self) -> f64 {
        match *self {
            Material::Steel { rho, .. } => rho,
            Material::Concrete { rho, .. } => rho,
            Material::LinearElastic { rho, .. } => rho,
        }
    }

    /// Modulus of elasticity converted to Pa, for stiffness assembly.
    pub fn e_pa(&self) -> f64 {
        self.e() * 1.0e6
    }

    /// Shear modulus converted to Pa, for stiffness assembly.
    pub fn g_pa(&self) -> f64 {
        self.g() * 1.0e6
    }

    /// Structural steel, G derived from E and nu (G = E / (2(1+nu))).
    pub fn steel() -> Self {
        let e = 200_000.0; // MPa
        let nu = 0.3;
        Material::Steel {
            e,
            g: e / (2.0 * (1.0 + nu)),
            nu,
            rho: 7850.0,
            fy: 250.0,
            fu: 400.0,
        }
    }

    /// Normal-weight concrete; E estimated from f'c via the ACI formula.
    pub fn concrete(fc_mpa: f64) -> Self {
        let e = 4700.0 * fc_mpa.sqrt();
        let nu = 0.2;
        Material::Concrete {
            e,
            g: e / (2.0 * (1.0 + nu)),
            nu,
            rho: 2400.0,
            fc: fc_mpa,
            ft: 0.62 * fc_mpa.sqrt(),
        }
    }

    /// A generic isotropic material from E, nu, rho (E in MPa, rho in kg/m^3).
    pub fn isotropic(e: f64, nu: f64, rho: f64) -> Self {
        Material::LinearElastic {
            e,
            g: e / (2.0 * (1.0 + nu)),
            nu,
            rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steel_shear_modulus_consistent() {
        let steel = Material::steel();
        let expected_g = steel.e() / (2.0 * (1.0 + steel.nu()));
        assert!((steel.g() - expected_g).abs() < 1e-9);
    }

    #[test]
    fn pa_conversion() {
        let m = Material::isotropic(200_000.0, 0.3, 7850.0);
        assert!((m.e_pa() - 200e9).abs() < 1.0);
    }
}
