//! Fit an arbitrary asset into the canonical viewing volume.

use glam::Vec3;

use crate::bounds::Aabb;
use crate::error::{NormalizeError, NormalizeResult};

/// Target size for a full-body model in the preview.
pub const BODY_TARGET_SIZE: f32 = 1.2;

/// Target size for a gallery piece shown on its own.
pub const PIECE_TARGET_SIZE: f32 = 1.6;

/// Uniform scale plus translation that centers an asset at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeTransform {
    pub scale: f32,
    pub translation: Vec3,
}

impl NormalizeTransform {
    /// Apply the transform to a single point.
    #[must_use]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        point * self.scale + self.translation
    }
}

/// Compute the uniform scale and translation that map `bounds` to a box
/// centered at the origin whose largest dimension is exactly `target_size`.
///
/// Scale is always uniform; aspect ratio is preserved. Fails with
/// [`NormalizeError::DegenerateBounds`] when the box has no positive extent
/// on any axis (empty mesh, inverted box, NaN).
pub fn normalize(bounds: &Aabb, target_size: f32) -> NormalizeResult<NormalizeTransform> {
    let max_dim = bounds.max_dimension();
    if !(max_dim.is_finite() && max_dim > 0.0) {
        return Err(NormalizeError::DegenerateBounds);
    }

    let scale = target_size / max_dim;
    let translation = -bounds.center() * scale;
    Ok(NormalizeTransform { scale, translation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elongated_box_scales_by_largest_axis() {
        // size (4, 2, 2), already centered: translation stays zero.
        let bounds = Aabb::new(Vec3::new(-2.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
        let t = normalize(&bounds, BODY_TARGET_SIZE).unwrap();
        assert!((t.scale - 0.3).abs() < 1e-6);
        assert_eq!(t.translation, Vec3::ZERO);
    }

    #[test]
    fn off_center_box_translates_to_origin() {
        let bounds = Aabb::new(Vec3::new(10.0, 10.0, 10.0), Vec3::new(12.0, 11.0, 10.5));
        let t = normalize(&bounds, 1.2).unwrap();

        let fitted = Aabb::from_points(bounds.corners().map(|c| t.apply(c))).unwrap();
        assert!(fitted.center().length() < 1e-5);
        assert!((fitted.max_dimension() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn zero_volume_is_degenerate() {
        let point = Aabb::new(Vec3::splat(3.0), Vec3::splat(3.0));
        assert_eq!(normalize(&point, 1.2), Err(NormalizeError::DegenerateBounds));
    }

    #[test]
    fn flat_box_is_not_degenerate() {
        // Zero depth but positive width still normalizes.
        let flat = Aabb::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let t = normalize(&flat, PIECE_TARGET_SIZE).unwrap();
        assert!((t.scale - 0.8).abs() < 1e-6);
    }

    #[test]
    fn inverted_box_is_degenerate() {
        let inverted = Aabb::new(Vec3::splat(1.0), Vec3::splat(-1.0));
        assert_eq!(
            normalize(&inverted, 1.2),
            Err(NormalizeError::DegenerateBounds)
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let bounds = Aabb::new(Vec3::new(-0.3, 0.1, -2.5), Vec3::new(4.2, 7.9, 0.0));
        let a = normalize(&bounds, 1.2).unwrap();
        let b = normalize(&bounds, 1.2).unwrap();
        assert_eq!(a, b);
    }
}
