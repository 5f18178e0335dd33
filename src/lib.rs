//! Vetrina renders marketing and FAQ pages from a headless CMS content tree.
//!
//! The CMS owns the schema. Pages arrive as an ordered list of discriminated
//! content blocks, and rich-text fields arrive as a generic document tree.
//! Two components bridge that content into presentational HTML:
//!
//! - the section dispatcher ([`application::render::dispatch_blocks`]) maps
//!   each block's record type to its block renderer, preserving input order
//!   and silently dropping blocks without an enabled renderer;
//! - the structured-text renderer ([`application::render::render_document`])
//!   walks the document tree bottom-up, consulting an ordered list of
//!   override rules before falling back to per-kind defaults.
//!
//! Everything else is glue around those two: typed CMS payload models in
//! [`domain`], askama views in [`presentation`], the GraphQL client behind
//! the [`infra::cms::ContentSource`] seam, and page assembly services in
//! [`application::page`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
