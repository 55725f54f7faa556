//! src/graph.rs
//!
//! Top-level `graph` module: building the petgraph structure and laying it out.

pub mod build;
pub mod layout;

/// Re-exports
pub use build::{VertexGraph, build};
pub use layout::ForceLayout;
