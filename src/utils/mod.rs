//! Thin wrappers over Unix primitives the standard library does not expose.

pub(crate) mod node;
pub(crate) mod userns;
