use thiserror::Error;

/// One block rendered by the section dispatcher, paired with the record type
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub record_type: String,
    pub html: String,
}

/// Outcome of resolving one content block against the dispatch table.
///
/// Both non-rendered outcomes drop the block from page output without error;
/// they exist as distinct values because a renderer that is switched off is
/// not the same thing as a record type the dispatch table has never heard of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    Rendered(RenderedBlock),
    /// The record type has a renderer, but it is currently switched off.
    Disabled { record_type: String },
    /// The record type has no entry in the dispatch table.
    Unsupported { record_type: String },
}

/// Structured errors surfaced by the rendering pipeline. Skipped blocks and
/// unknown node kinds are not errors; only genuine rendering failures are.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("template rendering failed: {message}")]
    Template { message: String },
    #[error("document processing failed: {message}")]
    Document { message: String },
}
