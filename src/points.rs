//! Helpers for working with collections of 3D points.

use crate::bounds::BoundingBox;
use crate::error::{Result, VoxelTreeError};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Returns a copy of `points` sorted by the coordinate along `axis` (0 = x, 1 = y, 2 = z).
pub fn sort_axis(points: &[[f64; 3]], axis: usize) -> Vec<[f64; 3]> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a[axis].total_cmp(&b[axis]));
    sorted
}

pub fn median_index(points: &[[f64; 3]]) -> usize {
    points.len() / 2
}

/// Median element of an already sorted collection, `None` if it is empty.
pub fn median_point(points: &[[f64; 3]]) -> Option<[f64; 3]> {
    points.get(median_index(points)).copied()
}

pub fn distance_squared(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    dx * dx + dy * dy + dz * dz
}

pub fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Reads a point from a coordinate slice, rejecting slices with fewer than three values.
///
/// Extra trailing coordinates are ignored.
pub fn point_from_slice(coords: &[f64]) -> Result<[f64; 3]> {
    match coords {
        [x, y, z, ..] => Ok([*x, *y, *z]),
        _ => Err(VoxelTreeError::MalformedPoint {
            expected: 3,
            found: coords.len(),
        }),
    }
}

/// Splits a flat `[x0, y0, z0, x1, ...]` buffer into points.
pub fn points_from_flat(generators: &[f64]) -> Result<Vec<[f64; 3]>> {
    let chunks = generators.chunks_exact(3);
    let remainder = chunks.remainder().len();
    if remainder != 0 {
        return Err(VoxelTreeError::MalformedPoint {
            expected: 3,
            found: remainder,
        });
    }
    Ok(chunks.map(|c| [c[0], c[1], c[2]]).collect())
}

/// Generates `count` points uniformly distributed inside `bounds`.
pub fn random_points(count: usize, bounds: &BoundingBox<3>) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(get_seed());
    random_points_with(&mut rng, count, bounds)
}

pub fn random_points_with<R: Rng>(rng: &mut R, count: usize, bounds: &BoundingBox<3>) -> Vec<[f64; 3]> {
    let extent = bounds.extent();
    (0..count)
        .map(|_| {
            [
                bounds.min[0] + rng.r#gen::<f64>() * extent[0],
                bounds.min[1] + rng.r#gen::<f64>() * extent[1],
                bounds.min[2] + rng.r#gen::<f64>() * extent[2],
            ]
        })
        .collect()
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}
