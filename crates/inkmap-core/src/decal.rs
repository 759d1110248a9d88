//! Decal placement on a body zone.

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::zones::ZoneTransform;

/// Bounds for the user's decal scale factor. Matches the UI slider range;
/// values outside it are clamped, never rejected.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.3..=3.0;

/// Final placement of a tattoo decal, ready for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecalSpec {
    /// Position on the body surface, from the zone.
    pub anchor: Vec3,
    /// XYZ Euler angles in radians, from the zone.
    pub rotation: Vec3,
    /// Final half-sizes: the zone's base extents times the clamped scale.
    pub extents: Vec3,
}

/// Compute the decal placement for a zone and user-chosen scale factor.
///
/// The scale is clamped into [`SCALE_RANGE`] first (NaN clamps to the
/// minimum), so the output extents are always positive. Anchor and rotation
/// pass through from the zone unchanged.
#[must_use]
pub fn compute_decal_spec(zone: &ZoneTransform, user_scale: f32) -> DecalSpec {
    let scale = if user_scale.is_nan() {
        *SCALE_RANGE.start()
    } else {
        user_scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end())
    };

    DecalSpec {
        anchor: zone.anchor,
        rotation: zone.rotation,
        extents: zone.base_extents * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::{ZoneId, lookup_zone};

    #[test]
    fn chest_at_double_scale() {
        let chest = lookup_zone(ZoneId::Chest);
        let spec = compute_decal_spec(&chest, 2.0);
        assert_eq!(spec.extents, Vec3::new(0.60, 0.60, 0.60));
        assert_eq!(spec.anchor, chest.anchor);
        assert_eq!(spec.rotation, chest.rotation);
    }

    #[test]
    fn oversized_scale_clamps_to_max() {
        let chest = lookup_zone(ZoneId::Chest);
        let spec = compute_decal_spec(&chest, 5.0);
        assert_eq!(spec.extents, chest.base_extents * 3.0);
    }

    #[test]
    fn undersized_scale_clamps_to_min() {
        let arm = lookup_zone(ZoneId::Arm);
        let spec = compute_decal_spec(&arm, 0.0);
        assert_eq!(spec.extents, arm.base_extents * 0.3);
    }

    #[test]
    fn nan_scale_clamps_to_min() {
        let arm = lookup_zone(ZoneId::Arm);
        let spec = compute_decal_spec(&arm, f32::NAN);
        assert_eq!(spec.extents, arm.base_extents * 0.3);
    }

    #[test]
    fn extents_always_positive() {
        for id in ZoneId::ALL {
            let zone = lookup_zone(id);
            for scale in [-10.0, 0.0, 0.3, 1.0, 3.0, 100.0] {
                let spec = compute_decal_spec(&zone, scale);
                assert!(spec.extents.min_element() > 0.0, "{id:?} at {scale}");
            }
        }
    }
}
