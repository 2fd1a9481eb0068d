use super::catalog::FurnitureCatalog;
use super::name_parser::PlacementName;
use super::scale::{compute_scale, FootprintScale};

/// Engine-independent result of reading a placeholder name
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub asset_key: String,
    pub asset_path: String,
    /// Local yaw in degrees, already negated
    pub rotation_degrees: Option<f32>,
    pub scale: Option<FootprintScale>,
}

/// Resolves what to spawn for a placeholder and how to orient and size it
///
/// `None` when no catalog key occurs in the name. Missing suffixes only leave the
/// matching field empty.
pub fn resolve_placement(name: &str, catalog: &FurnitureCatalog) -> Option<Placement> {
    let entry = catalog.resolve(name)?;
    let parsed = PlacementName::parse(name);

    Some(Placement {
        asset_key: entry.key.clone(),
        asset_path: entry.asset_path.clone(),
        rotation_degrees: parsed.yaw(),
        scale: parsed
            .footprint
            .map(|target| compute_scale(target, entry.footprint)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let catalog = FurnitureCatalog::standard();
        let placement = resolve_placement("Nevera_2.0L_1.0A_45R", &catalog).unwrap();

        assert_eq!(placement.asset_key, "Nevera");
        assert_eq!(placement.rotation_degrees, Some(-45.0));
        let scale = placement.scale.unwrap();
        assert!((scale.x - 1.0911).abs() < 1e-3);
        assert!((scale.z - 1.8304).abs() < 1e-3);
    }

    #[test]
    fn test_bare_key() {
        let catalog = FurnitureCatalog::standard();
        let placement = resolve_placement("Armario", &catalog).unwrap();
        assert_eq!(placement.rotation_degrees, None);
        assert_eq!(placement.scale, None);
    }

    #[test]
    fn test_no_entry() {
        let catalog = FurnitureCatalog::standard();
        assert_eq!(resolve_placement("Chimenea_1L_1A_90R", &catalog), None);
    }
}
