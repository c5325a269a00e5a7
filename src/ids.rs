//! Tagged identifiers for joints.
//!
//! The mesh refiner (`crate::mesh`) introduces internal joints that must never be
//! confused with joints the caller supplied. Rather than the source convention of
//! negative integers sharing one id space, user and internal ids are distinct types;
//! only `JointTable` (see `crate::mesh`) knows how to resolve either to a dense index.

use serde::{Deserialize, Serialize};

/// A joint id supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

/// A joint id allocated internally by the mesh refiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InternalId(pub u32);

/// Either a caller-supplied joint or one introduced by refinement.
///
/// Only the refiner constructs `Internal` variants; everything else in the model
/// (frames, shells, point loads) references joints by `UserId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointId {
    User(UserId),
    Internal(InternalId),
}

impl From<UserId> for JointId {
    fn from(id: UserId) -> Self {
        JointId::User(id)
    }
}

impl From<InternalId> for JointId {
    fn from(id: InternalId) -> Self {
        JointId::Internal(id)
    }
}

/// Frames and shells are never split the way joints are, so a plain integer id
/// (unique within its own collection) is sufficient for them.
pub type FrameId = u32;
pub type ShellId = u32;
