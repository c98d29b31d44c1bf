/// Generic axis-aligned bounding box for N-dimensional space.
///
/// The box is stored as its minimum and maximum corner. Both faces are part of the
/// box, so a point on a shared face belongs to every box that touches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Creates the cube `[-half_extent, half_extent]` along every axis.
    pub fn centered_cube(half_extent: f64) -> Self {
        Self {
            min: [-half_extent; D],
            max: [half_extent; D],
        }
    }

    /// Returns `true` if `min[i] <= point[i] <= max[i]` holds on every axis.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &BoundingBox<D>) -> bool {
        (0..D).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// Returns `true` if the open interiors of the two boxes share volume.
    ///
    /// Boxes that only touch along a face, edge or corner do not overlap.
    pub fn overlaps_interior(&self, other: &BoundingBox<D>) -> bool {
        (0..D).all(|i| self.min[i] < other.max[i] && other.min[i] < self.max[i])
    }

    pub fn center(&self) -> [f64; D] {
        let mut c = [0.0; D];
        for i in 0..D {
            c[i] = 0.5 * (self.min[i] + self.max[i]);
        }
        c
    }

    pub fn extent(&self) -> [f64; D] {
        let mut e = [0.0; D];
        for i in 0..D {
            e[i] = self.max[i] - self.min[i];
        }
        e
    }

    pub fn volume(&self) -> f64 {
        self.extent().iter().product()
    }
}

impl BoundingBox<3> {
    /// Enumerates the eight corners of the box.
    ///
    /// The ordering walks x slowest and z fastest, so index 0 is `min` and index 7 is `max`.
    pub fn corners(&self) -> [[f64; 3]; 8] {
        let [x1, y1, z1] = self.min;
        let [x2, y2, z2] = self.max;
        [
            [x1, y1, z1],
            [x1, y1, z2],
            [x1, y2, z1],
            [x1, y2, z2],
            [x2, y1, z1],
            [x2, y1, z2],
            [x2, y2, z1],
            [x2, y2, z2],
        ]
    }
}
