//! Domain layer: the CMS content model as owned, typed values.

pub mod blocks;
pub mod structured_text;
