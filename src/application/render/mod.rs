//! Rendering pipeline: block dispatch and structured-text traversal.
//!
//! Both halves are pure transformations over per-request content. They take
//! an owned tree or list, perform no I/O, and return the same output for the
//! same input; state lives entirely in the caller.

mod sections;
mod structured_text;
pub(crate) mod types;

pub use sections::{dispatch_block, dispatch_blocks};
pub use structured_text::{NodeRule, RuleContext, heading_rule, render_document};
pub use types::{BlockOutcome, RenderError, RenderedBlock};
