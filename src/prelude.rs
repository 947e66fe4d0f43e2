//! Prelude module for calendrica crate.
//!
//! Re-exports the derive_more derive macros used by the value types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
