//! Error types for tree construction and queries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoxelTreeError {
    #[error("Malformed point: expected {expected} coordinates, found {found}")]
    MalformedPoint { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Voxel count {count} exceeds the maximum of {max}")]
    VoxelCountTooLarge { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, VoxelTreeError>;
