//! Application services layer: the rendering pipeline and page assembly.

pub mod chrome;
pub mod page;
pub mod render;
