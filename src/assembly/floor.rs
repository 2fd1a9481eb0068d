use std::collections::HashMap;

use cgmath::Vector3;
use log::{error, info, warn};

use crate::config::AssemblyConfig;
use crate::error::{Result, SceneError};
use crate::gfx::resources::AssetSource;
use crate::gfx::scene::{Component, ComponentKind, MovementType, NodeId, Scene, SelectMode};
use crate::layout::{FurnitureCatalog, FurniturePlacer};

use super::classify::{classify, NodeRole};
use super::lights::place_light;
use super::switch::ModelSwitch;

/// A node the assembler had to leave as it was
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedNode {
    pub node: NodeId,
    pub name: String,
    pub reason: SceneError,
}

/// What one `load_floor` call did to the scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    /// Base prefab instances, original first
    pub roots: Vec<NodeId>,
    pub roles: HashMap<NodeRole, usize>,
    pub furniture: Vec<NodeId>,
    pub lights: Vec<NodeId>,
    pub skipped: Vec<SkippedNode>,
}

impl AssemblyReport {
    pub fn role_count(&self, role: NodeRole) -> usize {
        self.roles.get(&role).copied().unwrap_or(0)
    }

    fn skip(&mut self, node: NodeId, name: String, reason: SceneError) {
        self.skipped.push(SkippedNode { node, name, reason });
    }
}

/// Builds the navigable floor from the original and reformed base prefabs
///
/// Every node of a base prefab is classified by name prefix and wired up for its
/// role. Nodes without a role prefix are treated as furniture placeholders.
/// Failures are logged and the node is skipped; assembly always runs to the end.
pub struct FloorAssembler {
    config: AssemblyConfig,
    placer: FurniturePlacer,
    loaded: bool,
}

impl Default for FloorAssembler {
    fn default() -> Self {
        Self::new(AssemblyConfig::default(), FurnitureCatalog::standard())
    }
}

impl FloorAssembler {
    pub fn new(config: AssemblyConfig, catalog: FurnitureCatalog) -> Self {
        Self {
            config,
            placer: FurniturePlacer::new(catalog),
            loaded: false,
        }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads both floor plans and prepares the model switch
    ///
    /// Returns `None` if the floor was already loaded. The loaded flag is only set
    /// once the reformed plan has been found, so a failed load can be retried.
    pub fn load_floor(
        &mut self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        switch: &mut ModelSwitch,
    ) -> Option<AssemblyReport> {
        if self.loaded {
            warn!("Floor already loaded");
            return None;
        }

        let mut report = AssemblyReport::default();
        self.load_model(scene, assets, false, &mut report);
        self.load_model(scene, assets, true, &mut report);
        switch.find_instances(scene, &self.config);

        info!(
            "Floor assembled: {} furniture, {} lights, {} skipped",
            report.furniture.len(),
            report.lights.len(),
            report.skipped.len()
        );
        Some(report)
    }

    fn load_model(
        &mut self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        reform: bool,
        report: &mut AssemblyReport,
    ) {
        let root = match self.instantiate_base(scene, assets, reform) {
            Ok(root) => root,
            Err(err) => {
                error!("{err}");
                return;
            }
        };
        report.roots.push(root);

        // Snapshot first: placing furniture and lights adds nodes under these parents
        for node in scene.descendants(root).into_iter().skip(1) {
            self.wire_node(scene, assets, node, report);
        }
    }

    fn instantiate_base(
        &mut self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        reform: bool,
    ) -> Result<NodeId> {
        let path = self.config.base_prefabs.path(reform);
        if path.is_empty() {
            return Err(SceneError::EmptyPrefabPath);
        }

        let prefab = assets.load_prefab(path)?;
        if reform {
            self.loaded = true;
        }

        let zero = Vector3::new(0.0, 0.0, 0.0);
        let root = scene.instantiate(&prefab, zero, zero, None);
        scene
            .require_mut(root)?
            .set_name(format!("{}_Instance", prefab.name));
        info!(
            "Prefab '{}' instantiated at {:?} (reform={})",
            prefab.name, zero, reform
        );
        Ok(root)
    }

    fn wire_node(
        &self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        node: NodeId,
        report: &mut AssemblyReport,
    ) {
        let Some(name) = scene.object(node).map(|obj| obj.name.clone()) else {
            return;
        };
        let role = classify(&name, &self.config.naming);
        *report.roles.entry(role).or_insert(0) += 1;

        let materials = &self.config.materials;
        let mesh = ComponentKind::MeshCollider;
        match role {
            NodeRole::Wall | NodeRole::WindowFrame => {
                self.add_surface(scene, assets, node, mesh, &materials.wall);
            }
            NodeRole::Door => {
                let collider = ComponentKind::BoxCollider;
                self.add_surface(scene, assets, node, collider, &materials.door);
                self.configure_door(scene, node);
            }
            NodeRole::DoorFrame => {
                self.add_surface(scene, assets, node, mesh, &materials.door_frame);
            }
            NodeRole::Window => {
                self.add_surface(scene, assets, node, mesh, &materials.window);
            }
            NodeRole::Floor => {
                self.add_surface(scene, assets, node, mesh, &materials.floor);
                self.configure_teleportation_area(scene, node);
            }
            NodeRole::Ceiling => {
                self.add_surface(scene, assets, node, mesh, &materials.ceiling);
            }
            NodeRole::Light => match place_light(scene, assets, &self.config.lighting, node) {
                Ok(lamp) => report.lights.push(lamp),
                Err(err) => {
                    error!("Light '{}' skipped: {}", name, err);
                    report.skip(node, name, err);
                }
            },
            NodeRole::Furniture => match self.placer.place(scene, assets, node) {
                Ok(instance) => report.furniture.push(instance),
                Err(err) => {
                    match &err {
                        SceneError::NoCatalogEntry(_) => warn!("{err}"),
                        _ => error!("Furniture '{}' skipped: {}", name, err),
                    }
                    report.skip(node, name, err);
                }
            },
        }
    }

    /// Collider plus material, the common treatment for architectural surfaces
    fn add_surface(
        &self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        node: NodeId,
        collider: ComponentKind,
        material_path: &str,
    ) {
        let material = scene.material_manager.load(material_path, assets);
        if let Some(object) = scene.object_mut(node) {
            object.ensure_component(collider);
            if let Some(material) = material {
                object.set_material(&material);
            }
        }
    }

    fn configure_door(&self, scene: &mut Scene, node: NodeId) {
        let Some(door) = scene.object_mut(node) else {
            return;
        };
        let doors = &self.config.doors;

        door.add_component(Component::HingeJoint {
            anchor: doors.hinge_anchor,
            axis: doors.hinge_axis,
        });
        if let Some(Component::Rigidbody { linear_damping }) =
            door.component_mut(ComponentKind::Rigidbody)
        {
            *linear_damping = doors.linear_damping;
        }
        if let Component::GrabInteractable { movement } =
            door.ensure_component(ComponentKind::GrabInteractable)
        {
            *movement = MovementType::VelocityTracking;
        }
    }

    fn configure_teleportation_area(&self, scene: &mut Scene, node: NodeId) {
        let Some(floor) = scene.object_mut(node) else {
            return;
        };

        if let Component::TeleportationArea {
            select_mode,
            interaction_layers,
        } = floor.ensure_component(ComponentKind::TeleportationArea)
        {
            *select_mode = SelectMode::Multiple;
            *interaction_layers = vec![self.config.teleport.interaction_layer.clone()];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::{AssetLibrary, Material};
    use crate::gfx::scene::PrefabNode;

    fn plan(prefix: &str) -> PrefabNode {
        PrefabNode::new(prefix)
            .with_child(PrefabNode::new("00_A_MUROS_norte").with_renderer())
            .with_child(PrefabNode::new("PUERTA_entrada").with_renderer())
            .with_child(PrefabNode::new("FLOOR_LOWER_salon").with_renderer())
            .with_child(PrefabNode::new("Luz_salon").at(1.0, 0.0, 1.0))
            .with_child(PrefabNode::new("Nevera_2.0L_1.0A_90R").at(3.0, 0.0, 0.5))
    }

    fn assets() -> AssetLibrary {
        let config = AssemblyConfig::default();
        let mut assets = AssetLibrary::new();
        assets
            .insert_prefab("original", plan("original"))
            .insert_prefab("reformed", plan("reformed"))
            .insert_prefab(&config.lighting.lamp_prefab, PrefabNode::new("lamp"))
            .insert_prefab("Furniture/Nevera", PrefabNode::new("fridge"))
            .insert_material(&config.materials.wall, Material::default())
            .insert_material(&config.materials.door, Material::default())
            .insert_material(&config.materials.floor, Material::default());
        assets
    }

    #[test]
    fn test_load_floor_wires_roles() {
        let mut scene = Scene::new();
        let mut switch = ModelSwitch::new();
        let mut assembler = FloorAssembler::default();

        let report = assembler
            .load_floor(&mut scene, &assets(), &mut switch)
            .unwrap();

        assert_eq!(report.roots.len(), 2);
        assert_eq!(report.role_count(NodeRole::Wall), 2);
        assert_eq!(report.furniture.len(), 2);
        assert_eq!(report.lights.len(), 2);
        assert!(report.skipped.is_empty());
        assert!(assembler.is_loaded());
        assert!(switch.is_ready());

        let door = scene.find_by_name("PUERTA_entrada").unwrap();
        let door = scene.object(door).unwrap();
        assert!(door.has_component(ComponentKind::BoxCollider));
        assert_eq!(
            door.component(ComponentKind::Rigidbody),
            Some(&Component::Rigidbody {
                linear_damping: 5.0
            })
        );
        assert_eq!(
            door.component(ComponentKind::GrabInteractable),
            Some(&Component::GrabInteractable {
                movement: MovementType::VelocityTracking
            })
        );
        assert_eq!(door.material_id().map(String::as_str), Some("Materials/BrownWood"));

        let floor = scene.find_by_name("FLOOR_LOWER_salon").unwrap();
        assert_eq!(
            scene
                .object(floor)
                .unwrap()
                .component(ComponentKind::TeleportationArea),
            Some(&Component::TeleportationArea {
                select_mode: SelectMode::Multiple,
                interaction_layers: vec!["Teleport".to_string()],
            })
        );

        let reformed = report.roots[1];
        assert!(!scene.is_active_in_hierarchy(reformed));
    }

    #[test]
    fn test_second_load_is_refused() {
        let mut scene = Scene::new();
        let mut switch = ModelSwitch::new();
        let mut assembler = FloorAssembler::default();
        let assets = assets();

        assert!(assembler.load_floor(&mut scene, &assets, &mut switch).is_some());
        let count = scene.get_object_count();
        assert!(assembler.load_floor(&mut scene, &assets, &mut switch).is_none());
        assert_eq!(scene.get_object_count(), count);
    }

    #[test]
    fn test_unknown_placeholder_is_skipped_once() {
        let mut assets = AssetLibrary::new();
        let plan = PrefabNode::new("original").with_child(PrefabNode::new("Piano_1L_1A"));
        assets.insert_prefab("original", plan);

        let mut scene = Scene::new();
        let mut switch = ModelSwitch::new();
        let mut assembler = FloorAssembler::default();
        let report = assembler.load_floor(&mut scene, &assets, &mut switch).unwrap();

        assert_eq!(report.roots.len(), 1);
        assert!(report.furniture.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            report.skipped[0].reason,
            SceneError::NoCatalogEntry("Piano_1L_1A".to_string())
        );
        // Reformed plan missing, so loading may be attempted again
        assert!(!assembler.is_loaded());
        assert!(!switch.is_ready());
    }

    #[test]
    fn test_missing_material_keeps_collider() {
        let mut assets = AssetLibrary::new();
        let ceiling = PrefabNode::new("FLOOR_UPPER").with_renderer();
        assets
            .insert_prefab("original", PrefabNode::new("original").with_child(ceiling))
            .insert_prefab("reformed", PrefabNode::new("reformed"));

        let mut scene = Scene::new();
        let mut switch = ModelSwitch::new();
        FloorAssembler::default()
            .load_floor(&mut scene, &assets, &mut switch)
            .unwrap();

        let ceiling = scene.object(scene.find_by_name("FLOOR_UPPER").unwrap()).unwrap();
        assert!(ceiling.has_component(ComponentKind::MeshCollider));
        assert!(ceiling.material_id().is_none());
        assert!(!scene.material_manager.is_cached("Materials/Concrete"));
    }
}
