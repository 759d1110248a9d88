//! Body-zone placement table.
//!
//! Each zone carries a fixed anchor, orientation and base extents on the
//! normalized humanoid surface. The table is static data; zones are never
//! mutated at runtime.

use std::f32::consts::PI;

use glam::Vec3;

/// A named region of the body surface that a decal can be placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneId {
    #[default]
    Arm,
    Chest,
    Back,
    Leg,
}

impl ZoneId {
    /// All zones, in UI display order.
    pub const ALL: [Self; 4] = [Self::Arm, Self::Chest, Self::Back, Self::Leg];

    /// Parse a zone name, falling back to [`ZoneId::Arm`] for anything
    /// unrecognized. Lenient on purpose: malformed persisted UI state should
    /// degrade to a sensible zone, never abort the preview.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "chest" => Self::Chest,
            "back" => Self::Back,
            "leg" => Self::Leg,
            _ => Self::Arm,
        }
    }

    /// Human-readable label for UI buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arm => "Arm",
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Leg => "Leg",
        }
    }
}

/// Placement parameters for one body zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneTransform {
    /// Anchor position in normalized body space.
    pub anchor: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Base half-sizes of the decal before user scaling.
    pub base_extents: Vec3,
}

/// Look up the placement transform for a zone. Infallible: the table covers
/// every variant.
#[must_use]
pub const fn lookup_zone(id: ZoneId) -> ZoneTransform {
    match id {
        ZoneId::Arm => ZoneTransform {
            anchor: Vec3::new(0.35, 0.15, 0.08),
            rotation: Vec3::new(0.0, 0.0, -0.2),
            base_extents: Vec3::new(0.22, 0.30, 0.22),
        },
        ZoneId::Chest => ZoneTransform {
            anchor: Vec3::new(0.0, 0.35, 0.16),
            rotation: Vec3::ZERO,
            base_extents: Vec3::new(0.30, 0.30, 0.30),
        },
        ZoneId::Back => ZoneTransform {
            anchor: Vec3::new(0.0, 0.35, -0.16),
            rotation: Vec3::new(0.0, PI, 0.0),
            base_extents: Vec3::new(0.30, 0.30, 0.30),
        },
        ZoneId::Leg => ZoneTransform {
            anchor: Vec3::new(0.12, -0.45, 0.08),
            rotation: Vec3::new(0.0, 0.0, -0.05),
            base_extents: Vec3::new(0.22, 0.30, 0.22),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(ZoneId::parse("arm"), ZoneId::Arm);
        assert_eq!(ZoneId::parse("Chest"), ZoneId::Chest);
        assert_eq!(ZoneId::parse(" BACK "), ZoneId::Back);
        assert_eq!(ZoneId::parse("leg"), ZoneId::Leg);
    }

    #[test]
    fn unknown_name_falls_back_to_arm() {
        assert_eq!(ZoneId::parse("unknown-zone-xyz"), ZoneId::Arm);
        assert_eq!(ZoneId::parse(""), ZoneId::Arm);
        assert_eq!(
            lookup_zone(ZoneId::parse("unknown-zone-xyz")),
            lookup_zone(ZoneId::Arm)
        );
    }

    #[test]
    fn back_zone_faces_away() {
        let back = lookup_zone(ZoneId::Back);
        assert!(back.anchor.z < 0.0);
        assert!((back.rotation.y - PI).abs() < 1e-6);
    }

    #[test]
    fn all_extents_positive() {
        for id in ZoneId::ALL {
            let zone = lookup_zone(id);
            assert!(zone.base_extents.min_element() > 0.0, "{id:?}");
        }
    }
}
