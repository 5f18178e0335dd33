//! Infrastructure adapters.

pub mod cms;
