use cgmath::{
    InnerSpace, Matrix, Matrix3, Matrix4, Point3, SquareMatrix, Transform as _, Vector3, Vector4,
};

use crate::error::{Result, SceneError};
use crate::gfx::resources::material::MaterialManager;

use super::object::Object;
use super::prefab::{Prefab, PrefabNode};
use super::transform::Transform;
use super::NodeId;

/// Main scene containing the object hierarchy and materials
///
/// Objects live in an arena and are never removed, so a `NodeId` stays valid for
/// the scene's lifetime. Deactivation is the only way to take a node out of play.
pub struct Scene {
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager, // Centralized material storage
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Adds an empty object, optionally under a parent
    pub fn add_object(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = self.objects.len();
        let mut object = Object::new(name);
        object.parent = parent.filter(|p| *p < id);
        self.objects.push(object);

        if let Some(parent) = self.objects[id].parent {
            self.objects[parent].children.push(id);
        }
        id
    }

    /// Gets immutable reference to an object by id
    pub fn object(&self, id: NodeId) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Gets mutable reference to an object by id
    pub fn object_mut(&mut self, id: NodeId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    pub(crate) fn require(&self, id: NodeId) -> Result<&Object> {
        self.objects.get(id).ok_or(SceneError::NodeNotFound(id))
    }

    pub(crate) fn require_mut(&mut self, id: NodeId) -> Result<&mut Object> {
        self.objects.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Deep-copies a prefab into the scene
    ///
    /// The root is placed at `world_position` with world orientation
    /// `world_euler_degrees`, both converted into the parent's space, and keeps
    /// the prefab's own scale. The root is named after the prefab, descendants
    /// keep their node names.
    pub fn instantiate(
        &mut self,
        prefab: &Prefab,
        world_position: Vector3<f32>,
        world_euler_degrees: Vector3<f32>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let root = self.spawn_subtree(&prefab.root, parent);
        self.objects[root].name = prefab.name.clone();
        // Cannot fail: root was just pushed
        let _ = self.set_world_rotation(root, world_euler_degrees);
        let _ = self.set_world_position(root, world_position);
        root
    }

    fn spawn_subtree(&mut self, node: &PrefabNode, parent: Option<NodeId>) -> NodeId {
        let id = self.add_object(node.name.clone(), parent);
        {
            let object = &mut self.objects[id];
            object.transform = node.transform;
            object.active = node.active;
            object.components = node.components.clone();
        }
        for child in &node.children {
            self.spawn_subtree(child, Some(id));
        }
        id
    }

    /// Depth-first pre-order listing of `root` and everything under it
    ///
    /// Inactive nodes are included. The result is a snapshot: nodes created while
    /// iterating it are not part of it.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if root >= self.objects.len() {
            return out;
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.objects[id].children.iter().rev());
        }
        out
    }

    /// First object whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.objects.iter().position(|obj| obj.name == name)
    }

    /// Local-to-world matrix, composed up the parent chain
    pub fn world_matrix(&self, id: NodeId) -> Matrix4<f32> {
        let mut matrix = Matrix4::identity();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|i| self.objects.get(i)) {
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vector3<f32>> {
        self.objects.get(id)?;
        let origin = self.world_matrix(id).transform_point(Point3::new(0.0, 0.0, 0.0));
        Some(Vector3::new(origin.x, origin.y, origin.z))
    }

    /// Moves a node so its origin lands on `position` in world space
    pub fn set_world_position(&mut self, id: NodeId, position: Vector3<f32>) -> Result<()> {
        let parent = self.require(id)?.parent;
        let local = match parent {
            Some(parent) => {
                let inverse = self
                    .world_matrix(parent)
                    .invert()
                    .unwrap_or_else(Matrix4::identity);
                let p = inverse.transform_point(Point3::new(position.x, position.y, position.z));
                Vector3::new(p.x, p.y, p.z)
            }
            None => position,
        };
        self.require_mut(id)?.set_translation(local);
        Ok(())
    }

    /// Rotation part of the world matrix with scale divided out
    pub fn world_rotation(&self, id: NodeId) -> Matrix3<f32> {
        let matrix = self.world_matrix(id);
        let axis = |column: Vector4<f32>| {
            let axis = column.truncate();
            let length = axis.magnitude();
            if length > f32::EPSILON {
                axis / length
            } else {
                axis
            }
        };
        Matrix3::from_cols(axis(matrix.x), axis(matrix.y), axis(matrix.z))
    }

    /// Turns a node so its world orientation matches the given Euler angles
    pub fn set_world_rotation(&mut self, id: NodeId, euler_degrees: Vector3<f32>) -> Result<()> {
        let parent = self.require(id)?.parent;
        let world = Transform::identity()
            .with_euler(euler_degrees.x, euler_degrees.y, euler_degrees.z)
            .rotation();
        let local = match parent {
            // Orthonormal, so the transpose is the inverse
            Some(parent) => self.world_rotation(parent).transpose() * world,
            None => world,
        };
        self.require_mut(id)?.transform.euler_degrees = Transform::euler_from_rotation(local);
        Ok(())
    }

    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<()> {
        self.require_mut(id)?.active = active;
        Ok(())
    }

    /// True when the node and all of its ancestors are active
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(i) = current {
            match self.objects.get(i) {
                Some(node) if node.active => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            active_object_count: (0..self.objects.len())
                .filter(|id| self.is_active_in_hierarchy(*id))
                .count(),
            material_count: self.material_manager.list_materials().len(),
            component_count: self.objects.iter().map(|obj| obj.components.len()).sum(),
        }
    }
}

/// Scene statistics for debugging and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub active_object_count: usize,
    pub material_count: usize,
    pub component_count: usize,
}
