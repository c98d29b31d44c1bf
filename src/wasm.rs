use crate::bounds::BoundingBox;
use crate::config::TreeConfig;
use crate::error::VoxelTreeError;
use crate::points::point_from_slice;
use crate::tree::VoxelTree;
use js_sys::Array;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Bounding Box ---

/// Represents an axis-aligned bounding box in 3D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        BoundingBox::<3>::from(*self).contains(&[x, y, z])
    }

    /// The eight corners as a flat `[x, y, z, ...]` array, starting at the minimum corner.
    pub fn corners(&self) -> Vec<f64> {
        BoundingBox::<3>::from(*self).corners().iter().flatten().copied().collect()
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            min: [b.min_x, b.min_y, b.min_z],
            max: [b.max_x, b.max_y, b.max_z],
        }
    }
}

impl From<BoundingBox<3>> for BoundingBox3D {
    fn from(b: BoundingBox<3>) -> Self {
        BoundingBox3D::new(b.min[0], b.min[1], b.min[2], b.max[0], b.max[1], b.max[2])
    }
}

// --- Voxel Tree ---

/// WASM wrapper for [`VoxelTree`].
#[wasm_bindgen]
pub struct VoxelTree3D {
    inner: VoxelTree,
}

#[wasm_bindgen]
impl VoxelTree3D {
    /// Builds the tree from a flat `[x0, y0, z0, ...]` point buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], domain_side: f64, target_radius: f64) -> Result<VoxelTree3D, JsError> {
        let config = TreeConfig::new(domain_side, target_radius);
        let inner = VoxelTree::from_flat(points, config).map_err(JsError::from)?;
        Ok(VoxelTree3D { inner })
    }

    pub fn search(&self, x: f64, y: f64, z: f64) -> Option<BoundingBox3D> {
        self.inner.search([x, y, z]).map(BoundingBox3D::from)
    }

    /// Searches a point given as a JS array `[x, y, z]`.
    #[wasm_bindgen(js_name = searchPoint)]
    pub fn search_point(&self, val: JsValue) -> Result<Option<BoundingBox3D>, JsError> {
        let coords = parse_js_coords(&val).map_err(JsError::from)?;
        let point = point_from_slice(&coords).map_err(JsError::from)?;
        Ok(self.inner.search(point).map(BoundingBox3D::from))
    }

    /// Leaf bounds as a flat array of `[min_x, min_y, min_z, max_x, max_y, max_z]` sextuples.
    pub fn leaves(&self) -> Vec<f64> {
        self.inner
            .leaves()
            .iter()
            .flat_map(|b| b.min.into_iter().chain(b.max))
            .collect()
    }

    #[wasm_bindgen(getter, js_name = leafCount)]
    pub fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }

    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    #[wasm_bindgen(getter, js_name = voxelCount)]
    pub fn voxel_count(&self) -> usize {
        self.inner.voxel_count()
    }

    #[wasm_bindgen(getter, js_name = voxelSideLength)]
    pub fn voxel_side_length(&self) -> f64 {
        self.inner.voxel_side_length()
    }
}

fn parse_js_coords(val: &JsValue) -> Result<Vec<f64>, VoxelTreeError> {
    let arr = val
        .dyn_ref::<Array>()
        .ok_or(VoxelTreeError::MalformedPoint { expected: 3, found: 0 })?;
    let len = arr.length();
    let mut coords = Vec::with_capacity(len as usize);
    for i in 0..len {
        match arr.get(i).as_f64() {
            Some(v) => coords.push(v),
            None => break,
        }
    }
    Ok(coords)
}
