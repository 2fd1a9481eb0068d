//! Asset sources
//!
//! The host engine owns asset loading. The assembler only needs to ask for a
//! prefab or a material by resource path, so that is all [`AssetSource`] covers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, SceneError};
use crate::gfx::scene::{Prefab, PrefabNode};

use super::material::Material;

pub trait AssetSource {
    fn load_prefab(&self, path: &str) -> Result<Arc<Prefab>>;
    fn load_material(&self, path: &str) -> Result<Material>;
}

/// In-memory asset source keyed by resource path
#[derive(Default)]
pub struct AssetLibrary {
    prefabs: HashMap<String, Arc<Prefab>>,
    materials: HashMap<String, Material>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prefab under `path`
    ///
    /// The prefab is named after the last path segment, whatever its root node is
    /// called, the same way a resource is named after its file.
    pub fn insert_prefab(&mut self, path: &str, root: PrefabNode) -> &mut Self {
        let prefab = Prefab {
            name: Prefab::name_from_path(path).to_string(),
            root,
        };
        self.prefabs.insert(path.to_string(), Arc::new(prefab));
        self
    }

    pub fn insert_material(&mut self, path: &str, material: Material) -> &mut Self {
        self.materials.insert(path.to_string(), material);
        self
    }
}

impl AssetSource for AssetLibrary {
    fn load_prefab(&self, path: &str) -> Result<Arc<Prefab>> {
        self.prefabs
            .get(path)
            .cloned()
            .ok_or_else(|| SceneError::PrefabNotFound(path.to_string()))
    }

    fn load_material(&self, path: &str) -> Result<Material> {
        self.materials
            .get(path)
            .cloned()
            .ok_or_else(|| SceneError::MaterialNotFound(path.to_string()))
    }
}
