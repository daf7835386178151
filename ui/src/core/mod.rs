//! Platform-agnostic helpers shared by every view.

pub mod format;
pub mod nav;
pub mod timing;
