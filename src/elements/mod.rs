//! Structural elements module

mod frame;
mod joint;
mod material;
mod restraint;
mod section;
mod shell;
mod shell_section;

pub use frame::Frame;
pub use joint::Joint;
pub use material::Material;
pub use restraint::Restraint;
pub use section::{FrameSection, FrameSectionShape, SectionProperties};
pub use shell::Shell;
pub use shell_section::ShellSection;
