//! Prelude module for date_matrix crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::{Deref, Display};
