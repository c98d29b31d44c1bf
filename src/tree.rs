use crate::bounds::BoundingBox;
use crate::config::TreeConfig;
use crate::error::Result;
use crate::points::{point_from_slice, points_from_flat};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Subtrees covering at least this many voxels are built on separate rayon tasks.
pub const PARALLEL_THRESHOLD: usize = 1 << 12;

/// A node of the voxel tree.
///
/// Every node is either a leaf holding the bounds of one voxel, or an internal node owning
/// exactly two children. Internal nodes store no bounds; they are re-derived during descent.
#[derive(Clone, Debug, PartialEq)]
pub enum VoxelNode {
    Leaf(BoundingBox<3>),
    Internal {
        left: Box<VoxelNode>,
        right: Box<VoxelNode>,
    },
}

impl VoxelNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, VoxelNode::Leaf(_))
    }

    /// Bounds of a leaf, `None` for internal nodes.
    pub fn bounds(&self) -> Option<&BoundingBox<3>> {
        match self {
            VoxelNode::Leaf(bounds) => Some(bounds),
            VoxelNode::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(&VoxelNode, &VoxelNode)> {
        match self {
            VoxelNode::Leaf(_) => None,
            VoxelNode::Internal { left, right } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            VoxelNode::Leaf(_) => 0,
            VoxelNode::Internal { left, right } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            VoxelNode::Leaf(_) => 1,
            VoxelNode::Internal { left, right } => 1 + left.node_count() + right.node_count(),
        }
    }

    fn collect_leaves(&self, out: &mut Vec<BoundingBox<3>>) {
        match self {
            VoxelNode::Leaf(bounds) => out.push(*bounds),
            VoxelNode::Internal { left, right } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

/// A static binary partition of a cubic domain into voxels.
///
/// Each split cuts the current box at a single coordinate shared by all three axes, producing
/// a lower and an upper sub-box. The leaves therefore line up along the main diagonal of the
/// domain. The split coordinate is `min + voxel_side_length * (count / 2)`, so leaves have equal
/// widths only when the voxel count is a power of two.
///
/// The input points only decide whether the tree is empty; they are not stored in it.
#[derive(Clone, Debug)]
pub struct VoxelTree {
    root: Option<VoxelNode>,
    config: TreeConfig,
    voxel_side_length: f64,
    voxel_count: usize,
}

impl VoxelTree {
    /// Builds a tree over the default domain `[-1, 1]^3` with a target radius of 0.1.
    pub fn new(points: &[[f64; 3]]) -> VoxelTree {
        Self::build(!points.is_empty(), TreeConfig::default())
    }

    /// Builds a tree over the cube of side `domain_side` centered at the origin.
    pub fn with_domain_side(points: &[[f64; 3]], domain_side: f64) -> Result<VoxelTree> {
        Self::with_config(points, TreeConfig::default().with_domain_side(domain_side))
    }

    pub fn with_config(points: &[[f64; 3]], config: TreeConfig) -> Result<VoxelTree> {
        config.validate()?;
        Ok(Self::build(!points.is_empty(), config))
    }

    /// Builds a tree from a flat `[x0, y0, z0, x1, ...]` buffer.
    pub fn from_flat(generators: &[f64], config: TreeConfig) -> Result<VoxelTree> {
        let points = points_from_flat(generators)?;
        Self::with_config(&points, config)
    }

    fn build(populated: bool, config: TreeConfig) -> VoxelTree {
        let voxel_side_length = config.voxel_side_length();
        let voxel_count = config.voxel_count();

        let root = if populated {
            let root = partition(config.domain(), voxel_count, voxel_side_length, PARALLEL_THRESHOLD);
            debug!(
                voxel_side_length,
                voxel_count,
                depth = root.depth(),
                "built voxel tree"
            );
            Some(root)
        } else {
            trace!("no input points, voxel tree left empty");
            None
        };

        VoxelTree {
            root,
            config,
            voxel_side_length,
            voxel_count,
        }
    }

    /// Finds the voxel containing `point`.
    ///
    /// The descent re-derives the box of every internal node from the domain with the same
    /// split rule used during construction. A point goes to the lower child only if it is at or
    /// below the split coordinate on all three axes. The leaf reached is returned only if it
    /// actually contains the point; there is no backtracking into the sibling.
    pub fn search(&self, point: [f64; 3]) -> Option<BoundingBox<3>> {
        let mut node = self.root.as_ref()?;
        let mut bounds = self.config.domain();
        let mut count = self.voxel_count;

        loop {
            match node {
                VoxelNode::Leaf(leaf) => {
                    if leaf.contains(&point) {
                        return Some(*leaf);
                    }
                    trace!(?point, ?leaf, "point outside reached voxel");
                    return None;
                }
                VoxelNode::Internal { left, right } => {
                    let left_count = count / 2;
                    let mid = split_point(&bounds.min, self.voxel_side_length, left_count);

                    if (0..3).all(|i| point[i] <= mid[i]) {
                        bounds = BoundingBox::new(bounds.min, mid);
                        count = left_count;
                        node = left.as_ref();
                    } else {
                        bounds = BoundingBox::new(mid, bounds.max);
                        count -= left_count;
                        node = right.as_ref();
                    }
                }
            }
        }
    }

    /// Like [`search`](Self::search), but reads the point from a slice of coordinates.
    pub fn search_slice(&self, coords: &[f64]) -> Result<Option<BoundingBox<3>>> {
        let point = point_from_slice(coords)?;
        Ok(self.search(point))
    }

    /// Searches many points in parallel, preserving their order.
    pub fn search_many(&self, points: &[[f64; 3]]) -> Vec<Option<BoundingBox<3>>> {
        points.par_iter().map(|p| self.search(*p)).collect()
    }

    /// All voxels, ordered from the domain minimum to the domain maximum.
    pub fn leaves(&self) -> Vec<BoundingBox<3>> {
        let mut out = Vec::with_capacity(self.leaf_count());
        if let Some(root) = &self.root {
            root.collect_leaves(&mut out);
        }
        out
    }

    pub fn leaf_count(&self) -> usize {
        if self.root.is_some() { self.voxel_count } else { 0 }
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, VoxelNode::node_count)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, VoxelNode::depth)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&VoxelNode> {
        self.root.as_ref()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn domain(&self) -> BoundingBox<3> {
        self.config.domain()
    }

    pub fn voxel_side_length(&self) -> f64 {
        self.voxel_side_length
    }

    pub fn voxel_count(&self) -> usize {
        self.voxel_count
    }
}

fn split_point(min: &[f64; 3], voxel_side_length: f64, left_count: usize) -> [f64; 3] {
    let offset = voxel_side_length * left_count as f64;
    [min[0] + offset, min[1] + offset, min[2] + offset]
}

fn partition(bounds: BoundingBox<3>, count: usize, voxel_side_length: f64, parallel_threshold: usize) -> VoxelNode {
    if count <= 1 {
        return VoxelNode::Leaf(bounds);
    }

    let left_count = count / 2;
    let right_count = count - left_count;
    let mid = split_point(&bounds.min, voxel_side_length, left_count);
    let lower = BoundingBox::new(bounds.min, mid);
    let upper = BoundingBox::new(mid, bounds.max);

    let (left, right) = if count >= parallel_threshold {
        rayon::join(
            || partition(lower, left_count, voxel_side_length, parallel_threshold),
            || partition(upper, right_count, voxel_side_length, parallel_threshold),
        )
    } else {
        (
            partition(lower, left_count, voxel_side_length, parallel_threshold),
            partition(upper, right_count, voxel_side_length, parallel_threshold),
        )
    };

    VoxelNode::Internal {
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<[f64; 3]> {
        vec![[0.1, 0.2, 0.3], [-0.5, 0.5, 0.0]]
    }

    #[test]
    fn test_default_tree_shape() {
        let tree = VoxelTree::new(&sample());

        assert_eq!(tree.voxel_count(), 15);
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.leaf_count(), 15);
        assert_eq!(tree.leaves().len(), 15);
        assert_eq!(tree.node_count(), 29);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_empty_input_has_no_root() {
        let tree = VoxelTree::new(&[]);

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.node_count(), 0);
        assert!(tree.leaves().is_empty());
        assert_eq!(tree.search([0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_first_split_position() {
        let tree = VoxelTree::new(&sample());
        let (left, right) = tree.root().and_then(VoxelNode::children).expect("root should be internal");

        let side = tree.voxel_side_length();
        let expected_mid = -1.0 + side * 7.0;

        let left_leaves = {
            let mut v = Vec::new();
            left.collect_leaves(&mut v);
            v
        };
        let right_leaves = {
            let mut v = Vec::new();
            right.collect_leaves(&mut v);
            v
        };
        assert_eq!(left_leaves.len(), 7);
        assert_eq!(right_leaves.len(), 8);
        assert_eq!(left_leaves.last().map(|b| b.max), Some([expected_mid; 3]));
        assert_eq!(right_leaves.first().map(|b| b.min), Some([expected_mid; 3]));
    }

    #[test]
    fn test_origin_and_out_of_range() {
        let tree = VoxelTree::new(&sample());

        let found = tree.search([0.0, 0.0, 0.0]).expect("origin should be found");
        assert!(found.contains(&[0.0, 0.0, 0.0]));
        assert!((found.min[0] - (-1.0 + 7.0 * tree.voxel_side_length())).abs() < 1e-12);

        assert_eq!(tree.search([2.0, 2.0, 2.0]), None);
        assert_eq!(tree.search([-2.0, -2.0, -2.0]), None);
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let config = TreeConfig::default().with_target_radius(0.0003);
        let count = config.voxel_count();
        assert!(count > PARALLEL_THRESHOLD);

        let side = config.voxel_side_length();
        let parallel = partition(config.domain(), count, side, PARALLEL_THRESHOLD);
        let sequential = partition(config.domain(), count, side, usize::MAX);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_search_slice_rejects_short_points() {
        let tree = VoxelTree::new(&sample());
        assert!(tree.search_slice(&[0.0, 0.0]).is_err());
        assert_eq!(tree.search_slice(&[0.0, 0.0, 0.0]).ok().flatten(), tree.search([0.0; 3]));
    }
}
