use crate::bounds::BoundingBox;
use crate::error::{Result, VoxelTreeError};

/// Upper limit on the number of voxels along the domain diagonal.
///
/// A tree over `n` voxels holds `2n - 1` nodes.
pub const MAX_VOXEL_COUNT: usize = 1 << 24;

/// Resolution parameters of a [`VoxelTree`](crate::VoxelTree).
///
/// The domain is the cube `[-domain_side / 2, domain_side / 2]` on every axis. The voxel side
/// length is the side of the square inscribed in a circle of radius `target_radius`,
/// i.e. `sqrt(2 * r^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeConfig {
    pub domain_side: f64,
    pub target_radius: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            domain_side: 2.0,
            target_radius: 0.1,
        }
    }
}

impl TreeConfig {
    pub fn new(domain_side: f64, target_radius: f64) -> Self {
        Self {
            domain_side,
            target_radius,
        }
    }

    pub fn with_domain_side(mut self, domain_side: f64) -> Self {
        self.domain_side = domain_side;
        self
    }

    pub fn with_target_radius(mut self, target_radius: f64) -> Self {
        self.target_radius = target_radius;
        self
    }

    pub fn voxel_side_length(&self) -> f64 {
        (2.0 * self.target_radius * self.target_radius).sqrt()
    }

    /// Number of subdivisions applied to all three axes at once, never less than one.
    pub fn voxel_count(&self) -> usize {
        let count = (self.domain_side / self.voxel_side_length()).ceil();
        (count as usize).max(1)
    }

    pub fn domain(&self) -> BoundingBox<3> {
        BoundingBox::centered_cube(0.5 * self.domain_side)
    }

    /// Checks that the parameters describe a buildable tree.
    pub fn validate(&self) -> Result<()> {
        if !self.domain_side.is_finite() || self.domain_side <= 0.0 {
            return Err(VoxelTreeError::InvalidConfig(format!(
                "domain side must be positive and finite, got {}",
                self.domain_side
            )));
        }
        if !self.target_radius.is_finite() || self.target_radius <= 0.0 {
            return Err(VoxelTreeError::InvalidConfig(format!(
                "target radius must be positive and finite, got {}",
                self.target_radius
            )));
        }

        let count = (self.domain_side / self.voxel_side_length()).ceil();
        if !count.is_finite() || count > MAX_VOXEL_COUNT as f64 {
            return Err(VoxelTreeError::VoxelCountTooLarge {
                count: count as usize,
                max: MAX_VOXEL_COUNT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let config = TreeConfig::default();

        assert!((config.voxel_side_length() - 0.02f64.sqrt()).abs() < 1e-12);
        assert!((config.voxel_side_length() - 0.141421).abs() < 1e-6);
        assert_eq!(config.voxel_count(), 15);

        let domain = config.domain();
        assert_eq!(domain.min, [-1.0, -1.0, -1.0]);
        assert_eq!(domain.max, [1.0, 1.0, 1.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_coarse_radius_gives_single_voxel() {
        let config = TreeConfig::default().with_target_radius(2.0);
        assert_eq!(config.voxel_count(), 1);
    }

    #[test]
    fn test_domain_side_scales_count_and_extent() {
        let config = TreeConfig::default().with_domain_side(4.0);
        assert_eq!(config.voxel_count(), 29);
        assert_eq!(config.domain().min, [-2.0; 3]);
        assert_eq!(config.domain().max, [2.0; 3]);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(matches!(
            TreeConfig::new(0.0, 0.1).validate(),
            Err(VoxelTreeError::InvalidConfig(_))
        ));
        assert!(matches!(
            TreeConfig::new(2.0, -0.1).validate(),
            Err(VoxelTreeError::InvalidConfig(_))
        ));
        assert!(matches!(
            TreeConfig::new(f64::NAN, 0.1).validate(),
            Err(VoxelTreeError::InvalidConfig(_))
        ));
        assert!(matches!(
            TreeConfig::new(2.0, 1e-12).validate(),
            Err(VoxelTreeError::VoxelCountTooLarge { .. })
        ));
    }
}
