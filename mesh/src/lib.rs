#![forbid(unsafe_code)]

//! # `mesh`: 3D mesh interconnect topology
//!
//! Nodes of an on-chip mesh are laid out on an `X * Y * Z` grid and addressed
//! by a single linear index, `x + y*X + z*X*Y`. A set of nodes sharing the same
//! `z` is called a layer. Connectivity is never stored, it is derived from the
//! index arithmetic: a node has a link in a direction unless it sits on the
//! matching edge of the grid.

pub mod direction;
pub mod position;
pub mod topology;

pub use direction::{Axis, Dir};
pub use position::NodePosition;
pub use topology::MeshTopology;
