//! Placement parameters encoded in placeholder names
//!
//! Two independent suffix conventions are recognised:
//!
//! - rotation: a trailing `<float>R`, e.g. `Cama_90R`
//! - footprint: `_<float>L_<float>A` anywhere, e.g. `Nevera_2.0L_1.0A` (length, width)
//!
//! Both match case-insensitively and parse numbers with `.` as the decimal
//! separator regardless of locale. A name may carry either, both, or neither.

use std::sync::LazyLock;

use regex::Regex;

static ROTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(\.\d+)?)R$").expect("rotation pattern is valid"));

static FOOTPRINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)_(\d+(\.\d+)?)L_(\d+(\.\d+)?)A").expect("footprint pattern is valid")
});

/// Target dimensions requested by a placeholder, in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFootprint {
    /// Extent along the asset's depth axis (local Z)
    pub length: f32,
    /// Extent along the asset's width axis (local X)
    pub width: f32,
}

/// Raw rotation angle in degrees from a trailing `<float>R`
pub fn parse_rotation(name: &str) -> Option<f32> {
    let caps = ROTATION.captures(name)?;
    caps[1].parse().ok()
}

/// Local yaw for a suffix angle: clockwise in the authoring tool, so negated
pub fn yaw_from_angle(angle: f32) -> f32 {
    -(angle % 360.0)
}

/// First `_<length>L_<width>A` token in the name
pub fn parse_footprint(name: &str) -> Option<TargetFootprint> {
    let caps = FOOTPRINT.captures(name)?;
    Some(TargetFootprint {
        length: caps[1].parse().ok()?,
        width: caps[3].parse().ok()?,
    })
}

/// Everything a placeholder name says about how to place its asset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementName {
    /// Suffix angle as written, before negation
    pub angle: Option<f32>,
    pub footprint: Option<TargetFootprint>,
}

impl PlacementName {
    pub fn parse(name: &str) -> Self {
        Self {
            angle: parse_rotation(name),
            footprint: parse_footprint(name),
        }
    }

    pub fn yaw(&self) -> Option<f32> {
        self.angle.map(yaw_from_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_suffix() {
        assert_eq!(parse_rotation("Cama_45R"), Some(45.0));
        assert_eq!(parse_rotation("Cama_12.5r"), Some(12.5));
        assert_eq!(yaw_from_angle(45.0), -45.0);
    }

    #[test]
    fn test_rotation_must_be_trailing() {
        assert_eq!(parse_rotation("Cama_45R_copy"), None);
        assert_eq!(parse_rotation("Cama"), None);
    }

    #[test]
    fn test_rotation_wraps_full_turns() {
        assert_eq!(yaw_from_angle(450.0), -90.0);
        assert_eq!(yaw_from_angle(360.0), 0.0);
    }

    #[test]
    fn test_footprint_anywhere_in_name() {
        let footprint = parse_footprint("Nevera_2.0L_1.0A_90R").unwrap();
        assert_eq!(footprint.length, 2.0);
        assert_eq!(footprint.width, 1.0);

        let lower = parse_footprint("mesa_1l_0.75a").unwrap();
        assert_eq!(lower.length, 1.0);
        assert_eq!(lower.width, 0.75);
    }

    #[test]
    fn test_partial_footprint_is_ignored() {
        assert_eq!(parse_footprint("Nevera_2.0L"), None);
        assert_eq!(parse_footprint("Nevera_2,0L_1,0A"), None);
    }

    #[test]
    fn test_placement_name_combines_both() {
        let parsed = PlacementName::parse("Lavabo_0.6L_0.45A_180R");
        assert_eq!(parsed.yaw(), Some(-180.0));
        assert_eq!(
            parsed.footprint,
            Some(TargetFootprint {
                length: 0.6,
                width: 0.45
            })
        );

        assert_eq!(PlacementName::parse("Lavabo"), PlacementName::default());
    }
}
