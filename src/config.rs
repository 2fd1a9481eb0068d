//! Configuration for floor assembly
//!
//! Defaults follow the naming used by the CAD exporter and the resource layout of
//! the furniture library. Every field can be overridden with the `with_*`
//! builders.

use cgmath::Vector3;

use crate::gfx::scene::Prefab;

/// Name prefixes that tag a node's architectural role
#[derive(Debug, Clone, PartialEq)]
pub struct NamingConvention {
    pub wall: String,
    pub door: String,
    pub door_frame: String,
    pub window: String,
    pub window_top: String,
    pub window_base: String,
    pub floor: String,
    pub ceiling: String,
    pub light: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            wall: "00_A_MUROS".to_string(),
            door: "PUERTA".to_string(),
            door_frame: "00_A_PUERTA".to_string(),
            window: "PRISMA_MEDIO_00_A_CARP".to_string(),
            window_top: "PRISMA_TOP_00_A_CARP".to_string(),
            window_base: "PRISMA_BASE_00_A_CARP".to_string(),
            floor: "FLOOR_LOWER".to_string(),
            ceiling: "FLOOR_UPPER".to_string(),
            light: "Luz".to_string(),
        }
    }
}

/// Material resource paths per role
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPaths {
    pub wall: String,
    pub door: String,
    pub door_frame: String,
    pub window: String,
    pub floor: String,
    pub ceiling: String,
}

impl Default for MaterialPaths {
    fn default() -> Self {
        Self {
            wall: "Materials/BaseWall".to_string(),
            door: "Materials/BrownWood".to_string(),
            door_frame: "Materials/DarkWood".to_string(),
            window: "Materials/Window".to_string(),
            floor: "Materials/WoodFloor".to_string(),
            ceiling: "Materials/Concrete".to_string(),
        }
    }
}

/// The two floor plan variants loaded side by side
#[derive(Debug, Clone, PartialEq)]
pub struct BasePrefabs {
    pub original: String,
    pub reformed: String,
}

impl Default for BasePrefabs {
    fn default() -> Self {
        Self {
            original: "original".to_string(),
            reformed: "reformed".to_string(),
        }
    }
}

impl BasePrefabs {
    pub fn path(&self, reform: bool) -> &str {
        if reform {
            &self.reformed
        } else {
            &self.original
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightingConfig {
    pub lamp_prefab: String,
    /// World height every ceiling lamp is mounted at
    pub mount_height: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            lamp_prefab: "Furniture/BA_Ceiling Light_01".to_string(),
            mount_height: 2.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoorConfig {
    pub hinge_anchor: Vector3<f32>,
    pub hinge_axis: Vector3<f32>,
    pub linear_damping: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            hinge_anchor: Vector3::new(0.0, 0.0, 0.0),
            hinge_axis: Vector3::new(0.0, 0.0, 1.0),
            linear_damping: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeleportConfig {
    pub interaction_layer: String,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            interaction_layer: "Teleport".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyConfig {
    pub naming: NamingConvention,
    pub materials: MaterialPaths,
    pub base_prefabs: BasePrefabs,
    pub lighting: LightingConfig,
    pub doors: DoorConfig,
    pub teleport: TeleportConfig,
}

impl AssemblyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_materials(mut self, materials: MaterialPaths) -> Self {
        self.materials = materials;
        self
    }

    pub fn with_base_prefabs(mut self, original: &str, reformed: &str) -> Self {
        self.base_prefabs = BasePrefabs {
            original: original.to_string(),
            reformed: reformed.to_string(),
        };
        self
    }

    pub fn with_lamp_prefab(mut self, path: &str) -> Self {
        self.lighting.lamp_prefab = path.to_string();
        self
    }

    pub fn with_mount_height(mut self, height: f32) -> Self {
        self.lighting.mount_height = height;
        self
    }

    pub fn with_door_damping(mut self, damping: f32) -> Self {
        self.doors.linear_damping = damping;
        self
    }

    pub fn with_teleport_layer(mut self, layer: &str) -> Self {
        self.teleport.interaction_layer = layer.to_string();
        self
    }

    /// Scene name given to an instantiated base prefab
    pub fn instance_name(&self, reform: bool) -> String {
        let prefab = Prefab::name_from_path(self.base_prefabs.path(reform));
        format!("{prefab}_Instance")
    }
}
