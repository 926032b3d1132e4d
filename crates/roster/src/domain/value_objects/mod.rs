//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod field_patch;

pub use field_patch::*;
