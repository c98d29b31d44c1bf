//! # voxeltree
//!
//! `voxeltree` is a Rust library that partitions a fixed cubic domain into a static binary tree of
//! voxels and answers "which voxel contains this point?" queries. It is designed to be used in Rust
//! as well as compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Static partition**: The tree is built once from the domain size and a target radius and is
//!   immutable afterwards, so it can be queried from any number of threads.
//! - **Diagonal splits**: Every split cuts all three axes at the same coordinate, producing a binary
//!   tree (not an octree) whose leaves line up along the domain diagonal.
//! - **Parallel**: Large subtrees are built with `rayon`, and batches of queries run in parallel.
//! - **WASM-first**: Built with `wasm-bindgen` for integration with JavaScript and TypeScript.
//!
//! ## Example
//!
//! See the `demos/` directory for a command line driver and an SVG rendering of the voxels.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`VoxelTree`] struct, configured through [`TreeConfig`].

mod bounds;
mod config;
mod error;
pub mod points;
mod tree;
pub mod wasm;

pub use bounds::BoundingBox;
pub use config::TreeConfig;
pub use config::MAX_VOXEL_COUNT;
pub use error::Result;
pub use error::VoxelTreeError;
pub use tree::VoxelNode;
pub use tree::VoxelTree;
pub use tree::PARALLEL_THRESHOLD;
