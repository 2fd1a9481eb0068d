use cgmath::{Deg, Vector3};
use log::{debug, info, warn};

use crate::error::{Result, SceneError};
use crate::gfx::resources::AssetSource;
use crate::gfx::scene::{NodeId, Scene};

use super::catalog::FurnitureCatalog;
use super::resolver::resolve_placement;

/// Replaces furniture placeholders with catalog prefabs
pub struct FurniturePlacer {
    catalog: FurnitureCatalog,
}

impl Default for FurniturePlacer {
    fn default() -> Self {
        Self::new(FurnitureCatalog::standard())
    }
}

impl FurniturePlacer {
    pub fn new(catalog: FurnitureCatalog) -> Self {
        Self { catalog }
    }

    /// Spawns the furniture a placeholder asks for and hides the placeholder
    ///
    /// The instance lands on the placeholder's world position under the same
    /// parent, named `<prefab>_Instance`, and stretched per the footprint suffix.
    /// It starts aligned with the world axes; a rotation suffix replaces that
    /// with a local yaw relative to the parent. On error nothing is spawned and
    /// the placeholder stays active.
    pub fn place(
        &self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        placeholder: NodeId,
    ) -> Result<NodeId> {
        let (name, parent) = {
            let object = scene.require(placeholder)?;
            (object.name.clone(), object.parent())
        };

        let placement = resolve_placement(&name, &self.catalog)
            .ok_or_else(|| SceneError::NoCatalogEntry(name.clone()))?;
        let prefab = assets.load_prefab(&placement.asset_path)?;

        let position = scene
            .world_position(placeholder)
            .unwrap_or(Vector3::new(0.0, 0.0, 0.0));
        let world_aligned = Vector3::new(0.0, 0.0, 0.0);
        let instance = scene.instantiate(&prefab, position, world_aligned, parent);

        let object = scene.require_mut(instance)?;
        object.set_name(format!("{}_Instance", prefab.name));

        match placement.rotation_degrees {
            Some(yaw) => {
                object.set_rotation_y(Deg(yaw));
                debug!("Rotated '{}' to {}° from suffix in '{}'", object.name, yaw, name);
            }
            None => warn!("No angle with 'R' suffix found in name: '{}'", name),
        }

        if let Some(scale) = placement.scale {
            let scaled = scale.apply(object.transform.scale);
            object.set_scale_xyz(scaled);
            debug!(
                "'{}': scale.x={:.3}, scale.z={:.3} for catalog key {}",
                name, scaled.x, scaled.z, placement.asset_key
            );
        }

        info!("Instantiated '{}' for '{}'", object.name, name);
        scene.set_active(placeholder, false)?;
        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::AssetLibrary;
    use crate::gfx::scene::{PrefabNode, Transform};
    use cgmath::InnerSpace;

    fn furnished_assets() -> AssetLibrary {
        let mut assets = AssetLibrary::new();
        assets
            .insert_prefab("Furniture/Nevera", PrefabNode::new("fridge_mesh").with_renderer())
            .insert_prefab("Furniture/Armario", PrefabNode::new("wardrobe_mesh"));
        assets
    }

    fn kitchen_with(name: &str) -> (Scene, NodeId, NodeId) {
        let mut scene = Scene::new();
        let kitchen = scene.add_object("Kitchen", None);
        scene
            .object_mut(kitchen)
            .unwrap()
            .set_translation(Vector3::new(10.0, 0.0, 0.0));
        let placeholder = scene.add_object(name, Some(kitchen));
        scene
            .object_mut(placeholder)
            .unwrap()
            .set_translation(Vector3::new(1.5, 0.0, -2.0));
        (scene, kitchen, placeholder)
    }

    #[test]
    fn test_place_rotates_scales_and_hides_placeholder() {
        let (mut scene, kitchen, placeholder) = kitchen_with("Nevera_2.0L_1.0A_45R");
        let placer = FurniturePlacer::default();

        let instance = placer
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap();
        let object = scene.object(instance).unwrap();

        assert_eq!(object.name, "Nevera_Instance");
        assert_eq!(object.parent(), Some(kitchen));
        assert_eq!(object.transform.yaw(), -45.0);
        assert!((object.transform.scale.x - 1.0911).abs() < 1e-3);
        assert_eq!(object.transform.scale.y, 1.0);
        assert!((object.transform.scale.z - 1.8304).abs() < 1e-3);
        assert!(!scene.object(placeholder).unwrap().is_active());

        let offset =
            scene.world_position(instance).unwrap() - scene.world_position(placeholder).unwrap();
        assert!(offset.magnitude() < 1e-4);
    }

    #[test]
    fn test_place_without_footprint_keeps_default_scale() {
        let (mut scene, _, placeholder) = kitchen_with("Armario");
        let instance = FurniturePlacer::default()
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap();

        let object = scene.object(instance).unwrap();
        assert_eq!(object.transform.scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(object.transform.yaw(), 0.0);
    }

    #[test]
    fn test_unknown_furniture_spawns_nothing() {
        let (mut scene, _, placeholder) = kitchen_with("Chimenea_1L_1A");
        let before = scene.get_object_count();

        let err = FurniturePlacer::default()
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap_err();

        assert_eq!(err, SceneError::NoCatalogEntry("Chimenea_1L_1A".to_string()));
        assert_eq!(scene.get_object_count(), before);
        assert!(scene.object(placeholder).unwrap().is_active());
    }

    #[test]
    fn test_missing_prefab_leaves_placeholder() {
        let (mut scene, _, placeholder) = kitchen_with("Lavadora_0.6L_0.6A");
        let before = scene.get_object_count();

        let err = FurniturePlacer::default()
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap_err();

        assert_eq!(err, SceneError::PrefabNotFound("Furniture/Lavadora".to_string()));
        assert_eq!(scene.get_object_count(), before);
        assert!(scene.object(placeholder).unwrap().is_active());
    }

    fn yawed_room_with(name: &str) -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let room = scene.add_object("Dormitorio", None);
        scene.object_mut(room).unwrap().transform = Transform::identity()
            .with_position(2.0, 0.0, 3.0)
            .with_euler(0.0, 90.0, 0.0);
        let placeholder = scene.add_object(name, Some(room));
        scene
            .object_mut(placeholder)
            .unwrap()
            .set_translation(Vector3::new(1.0, 0.0, 0.0));
        (scene, placeholder)
    }

    #[test]
    fn test_unrotated_instance_ignores_parent_yaw() {
        let (mut scene, placeholder) = yawed_room_with("Armario");
        let instance = FurniturePlacer::default()
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap();

        let x_axis = scene.world_rotation(instance) * Vector3::unit_x();
        assert!((x_axis - Vector3::unit_x()).magnitude() < 1e-4);
        let offset =
            scene.world_position(instance).unwrap() - scene.world_position(placeholder).unwrap();
        assert!(offset.magnitude() < 1e-4);
    }

    #[test]
    fn test_rotation_suffix_is_relative_to_parent() {
        let (mut scene, placeholder) = yawed_room_with("Armario_90R");
        let instance = FurniturePlacer::default()
            .place(&mut scene, &furnished_assets(), placeholder)
            .unwrap();

        let object = scene.object(instance).unwrap();
        let euler = object.transform.euler_degrees;
        assert_eq!(euler, Vector3::new(0.0, -90.0, 0.0));
        // Parent +90 and suffix -90 cancel out
        let x_axis = scene.world_rotation(instance) * Vector3::unit_x();
        assert!((x_axis - Vector3::unit_x()).magnitude() < 1e-4);
    }
}
