//! Load types: patterns, cases, combinations, and the raw loads they group.

mod area_load;
mod case;
mod combination;
mod distributed;
mod pattern;
mod point_load;

pub use area_load::AreaLoad;
pub use case::{LoadCase, PatternScale};
pub use combination::{CaseScale, LoadCombination};
pub use distributed::{DistributedFrameLoad, DistributedLoadType, LoadDirection};
pub use pattern::{LoadCategory, LoadPattern};
pub use point_load::PointLoad;
