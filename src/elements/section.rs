//! Section properties for frame elements.
//!
//! Each shape is a variant of `FrameSectionShape`; `properties()` derives
//! {A, Iy, Iz, J, Sy, Sz} per closed-form literal formulas rather than the closer
//! Saint-Venant torsion approximations a production section library would use.

use serde::{Deserialize, Serialize};

use crate::error::{FeaError, FeaResult};

/// Derived section properties, all in SI metres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectionProperties {
    pub a: f64,
    /// Moment of inertia about the local Y axis; drives uz/ry bending.
    pub iy: f64,
    /// Moment of inertia about the local Z axis; drives uy/rz bending.
    pub iz: f64,
    pub j: f64,
    pub sy: f64,
    pub sz: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FrameSectionShape {
    Rectangular { b: f64, h: f64 },
    Circular { d: f64 },
    Tube { d_outer: f64, t: f64 },
    Hollow { b: f64, h: f64, t: f64 },
    ISection { d: f64, bf: f64, tw: f64, tf: f64 },
}

fn require_positive(name: &str, value: f64) -> FeaResult<()> {
    if value <= 0.0 {
        return Err(FeaError::InvalidSection(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

impl FrameSectionShape {
    /// Derive {A, Iy, Iz, J, Sy, Sz} per the shape's literal formula, or
    /// `InvalidSection` if any governing dimension is non-positive.
    pub fn properties(&self) -> FeaResult<SectionProperties> {
        match *self {
            FrameSectionShape::Rectangular { b, h } => {
                require_positive("b", b)?;
                require_positive("h", h)?;
                let a = b * h;
                let iy = b * h.powi(3) / 12.0;
                let iz = h * b.powi(3) / 12.0;
                let j = b * h * b.min(h).powi(2) / 12.0;
                Ok(SectionProperties {
                    a,
                    iy,
                    iz,
                    j,
                    sy: iy / (h / 2.0),
                    sz: iz / (b / 2.0),
                })
            }
            FrameSectionShape::Circular { d } => {
                require_positive("d", d)?;
                let r = d / 2.0;
                let a = std::f64::consts::PI * r.powi(2);
                let i = std::f64::consts::PI * r.powi(4) / 4.0;
                let j = std::f64::consts::PI * r.powi(4) / 2.0;
                Ok(SectionProperties {
                    a,
                    iy: i,
                    iz: i,
                    j,
                    sy: i / r,
                    sz: i / r,
                })
            }
            FrameSectionShape::Tube { d_outer, t } => {
                require_positive("d_outer", d_outer)?;
                require_positive("t", t)?;
                let ro = d_outer / 2.0;
                let ri = ro - t;
                if ri <= 0.0 {
                    return Err(FeaError::InvalidSection(
                        "tube wall thickness exceeds outer radius".into(),
                    ));
                }
                let a = std::f64::consts::PI * (ro.powi(2) - ri.powi(2));
                let i = std::f64::consts::PI * (ro.powi(4) - ri.powi(4)) / 4.0;
                let j = std::f64::consts::PI * (ro.powi(4) - ri.powi(4)) / 2.0;
                Ok(SectionProperties {
                    a,
                    iy: i,
                    iz: i,
                    j,
                    sy: i / ro,
                    sz: i / ro,
                })
            }
            FrameSectionShape::Hollow { b, h, t } => {
                require_positive("b", b)?;
                require_positive("h", h)?;
                require_positive("t", t)?;
                let bi = b - 2.0 * t;
                let hi = h - 2.0 * t;
                if bi <= 0.0 || hi <= 0.0 {
                    return Err(FeaError::InvalidSection(
                        "hollow section wall thickness exceeds half the outer dimension".into(),
                    ));
                }
                let a = b * h - bi * hi;
                let iy = (b * h.powi(3) - bi * hi.powi(3)) / 12.0;
                let iz = (h * b.powi(3) - hi * bi.powi(3)) / 12.0;
                let am = (b - t) * (h - t);
                let perimeter = 2.0 * (b + h) - 4.0 * t;
                let j = 4.0 * am.powi(2) * t / perimeter;
                Ok(SectionProperties {
                    a,
                    iy,
                    iz,
                    j,
                    sy: iy / (h / 2.0),
                    sz: iz / (b / 2.0),
                })
            }
            FrameSectionShape::ISection { d, bf, tw, tf } => {
                require_positive("d", d)?;
                require_positive("bf", bf)?;
                require_positive("tw", tw)?;
                require_positive("tf", tf)?;
                let hw = d - 2.0 * tf;
                if hw <= 0.0 {
                    return Err(FeaError::InvalidSection(
                        "flange thickness exceeds half the section depth".into(),
                    ));
                }
                let a = 2.0 * bf * tf + hw * tw;
                let iy = bf * d.powi(3) / 12.0 - (bf - tw) * hw.powi(3) / 12.0;
                let iz = 2.0 * tf * bf.powi(3) / 12.0 + hw * tw.powi(3) / 12.0;
                let j = (2.0 * bf * tf.powi(3) + hw * tw.powi(3)) / 3.0;
                Ok(SectionProperties {
                    a,
                    iy,
                    iz,
                    j,
                    sy: iy / (d / 2.0),
                    sz: iz / (bf / 2.0),
                })
            }
        }
    }
}

/// A frame (member) cross-section: a shape plus the material it is made of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSection {
    pub shape: FrameSectionShape,
    pub material: String,
}

impl FrameSection {
    pub fn new(shape: FrameSectionShape, material: &str) -> Self {
        Self {
            shape,
            material: material.to_string(),
        }
    }

    pub fn properties(&self) -> FeaResult<SectionProperties> {
        self.shape.properties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_matches_closed_form() {
        let shape = FrameSectionShape::Rectangular { b: 0.3, h: 0.5 };
        let props = shape.properties().unwrap();
        assert!((props.a - 0.15).abs() < 1e-10);
        assert!((props.iy - 0.3 * 0.5_f64.powi(3) / 12.0).abs() < 1e-12);
    }

    #[test]
    fn circular_iy_equals_iz() {
        let shape = FrameSectionShape::Circular { d: 0.5 };
        let props = shape.properties().unwrap();
        assert!((props.iy - props.iz).abs() < 1e-15);
    }

    #[test]
    fn non_positive_dimension_is_invalid() {
        let shape = FrameSectionShape::Rectangular { b: 0.0, h: 0.5 };
        assert!(matches!(shape.properties(), Err(FeaError::InvalidSection(_))));
    }

    #[test]
    fn hollow_wall_thicker_than_half_width_is_invalid() {
        let shape = FrameSectionShape::Hollow {
            b: 0.1,
            h: 0.1,
            t: 0.06,
        };
        assert!(matches!(shape.properties(), Err(FeaError::InvalidSection(_))));
    }
}
