use cgmath::Vector3;
use log::info;

use crate::config::LightingConfig;
use crate::error::Result;
use crate::gfx::resources::AssetSource;
use crate::gfx::scene::{NodeId, Scene};

/// Replaces a light marker with a ceiling lamp
///
/// The lamp keeps the marker's horizontal position, is mounted at the configured
/// height in world space, and shares the marker's parent. It is aligned with the
/// world axes whatever the parent's rotation. The marker is hidden.
pub fn place_light(
    scene: &mut Scene,
    assets: &dyn AssetSource,
    lighting: &LightingConfig,
    marker: NodeId,
) -> Result<NodeId> {
    let parent = scene.require(marker)?.parent();
    let prefab = assets.load_prefab(&lighting.lamp_prefab)?;

    let marker_position = scene
        .world_position(marker)
        .unwrap_or(Vector3::new(0.0, 0.0, 0.0));
    let spawn = Vector3::new(marker_position.x, lighting.mount_height, marker_position.z);

    let world_aligned = Vector3::new(0.0, 0.0, 0.0);
    let lamp = scene.instantiate(&prefab, spawn, world_aligned, parent);
    info!("Ceiling lamp instantiated at {:?}", spawn);

    scene.set_active(marker, false)?;
    Ok(lamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use crate::gfx::resources::AssetLibrary;
    use crate::gfx::scene::{PrefabNode, Transform};
    use cgmath::InnerSpace;

    #[test]
    fn test_lamp_mounted_at_ceiling_height() {
        let lighting = LightingConfig::default();
        let mut assets = AssetLibrary::new();
        assets.insert_prefab(&lighting.lamp_prefab, PrefabNode::new("lamp"));

        let mut scene = Scene::new();
        let room = scene.add_object("Salon", None);
        scene
            .object_mut(room)
            .unwrap()
            .set_translation(Vector3::new(0.0, 0.5, 4.0));
        let marker = scene.add_object("Luz_salon", Some(room));
        scene
            .object_mut(marker)
            .unwrap()
            .set_translation(Vector3::new(2.0, 0.1, 1.0));

        let lamp = place_light(&mut scene, &assets, &lighting, marker).unwrap();

        let world = scene.world_position(lamp).unwrap();
        assert!((world - Vector3::new(2.0, 2.7, 5.0)).magnitude() < 1e-4);
        assert_eq!(scene.object(lamp).unwrap().parent(), Some(room));
        assert_eq!(scene.object(lamp).unwrap().name, "BA_Ceiling Light_01");
        assert!(!scene.object(marker).unwrap().is_active());
    }

    #[test]
    fn test_missing_lamp_keeps_marker() {
        let mut scene = Scene::new();
        let marker = scene.add_object("Luz", None);

        let err = place_light(
            &mut scene,
            &AssetLibrary::new(),
            &LightingConfig::default(),
            marker,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::PrefabNotFound(_)));
        assert!(scene.object(marker).unwrap().is_active());
    }

    #[test]
    fn test_lamp_ignores_parent_yaw() {
        let lighting = LightingConfig::default();
        let mut assets = AssetLibrary::new();
        assets.insert_prefab(&lighting.lamp_prefab, PrefabNode::new("lamp"));

        let mut scene = Scene::new();
        let room = scene.add_object("Cocina", None);
        scene.object_mut(room).unwrap().transform = Transform::identity()
            .with_position(1.0, 0.0, 0.0)
            .with_euler(0.0, -90.0, 0.0);
        let marker = scene.add_object("Luz_cocina", Some(room));
        scene
            .object_mut(marker)
            .unwrap()
            .set_translation(Vector3::new(0.5, 0.0, 2.0));
        let marker_world = scene.world_position(marker).unwrap();

        let lamp = place_light(&mut scene, &assets, &lighting, marker).unwrap();

        let z_axis = scene.world_rotation(lamp) * Vector3::unit_z();
        assert!((z_axis - Vector3::unit_z()).magnitude() < 1e-4);
        let world = scene.world_position(lamp).unwrap();
        let expected = Vector3::new(marker_world.x, 2.7, marker_world.z);
        assert!((world - expected).magnitude() < 1e-4);
    }
}
