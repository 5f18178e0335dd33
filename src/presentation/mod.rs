//! Presentation layer: askama view structs and template bindings.

pub mod views;
