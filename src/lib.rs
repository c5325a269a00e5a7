//! fea-solver - a native Rust 3D structural finite-element analysis engine.
//!
//! Supports:
//! - Frame (beam/column) elements with a 12-DOF prismatic Euler-Bernoulli kernel
//! - A mesh refiner that subdivides each frame for higher-resolution force diagrams
//! - Load patterns, cases, and combinations with linear superposition
//! - A CST plane-stress kernel for standalone 2D connection-plate checks
//!
//! ## Example
//! ```rust
//! use fea_solver::prelude::*;
//!
//! let mut model = StructuralModel::new();
//!
//! model.add_material("Steel", Material::steel());
//! model.add_frame_section(
//!     "W1",
//!     FrameSection::new(FrameSectionShape::Rectangular { b: 0.1, h: 0.2 }, "Steel"),
//! );
//!
//! model.add_joint(UserId(1), Joint::new(0.0, 0.0, 0.0).with_restraint(Restraint::FIXED));
//! model.add_joint(UserId(2), Joint::new(5.0, 0.0, 0.0));
//! model.add_frame(1, Frame::new(UserId(1), UserId(2), "W1"));
//!
//! model.add_load_pattern(LoadPattern::new("Live", LoadCategory::Live));
//! model.add_point_load(PointLoad::force(UserId(2), "Live", 0.0, -10_000.0, 0.0));
//! model.add_load_case(LoadCase::new("C1").with_pattern("Live", 1.0));
//!
//! let mut engine = Engine::new();
//! let result = engine.analyze_case(&model, "C1");
//! assert!(result.is_valid);
//! ```

pub mod analysis;
pub mod assembly;
pub mod combine;
pub mod elements;
pub mod engine;
pub mod error;
pub mod ids;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod recovery;
pub mod results;

pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{
        Frame, FrameSection, FrameSectionShape, Joint, Material, Restraint, Shell, ShellSection,
    };
    pub use crate::engine::Engine;
    pub use crate::error::{FeaError, FeaResult};
    pub use crate::ids::{FrameId, InternalId, JointId, ShellId, UserId};
    pub use crate::loads::{
        AreaLoad, DistributedFrameLoad, DistributedLoadType, LoadCase, LoadCategory, LoadCombination,
        LoadDirection, LoadPattern, PointLoad,
    };
    pub use crate::model::StructuralModel;
    pub use crate::results::{AnalysisResults, FrameDetailedResult, JointDisplacement, Reaction};
}
