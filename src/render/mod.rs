//! Frame compilation and the rendering-surface boundary.

pub mod frame;
pub mod surface;
