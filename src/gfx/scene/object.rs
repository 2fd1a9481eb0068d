use cgmath::{Deg, Vector3};

use super::components::{Component, ComponentKind};
use super::transform::Transform;
use super::NodeId;
use crate::gfx::resources::material::MaterialId;

/// A node in the scene hierarchy
///
/// Objects own their transform and components. Hierarchy links are managed by
/// [`Scene`](super::Scene) so parent and child lists always agree.
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub transform: Transform,
    pub(crate) active: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) components: Vec<Component>,
}

impl Object {
    /// Create a new active Object with identity transformation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            active: true,
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Active flag of this object alone; see `Scene::is_active_in_hierarchy`
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Set local translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform.position = translation;
    }

    /// Set local rotation to a pure turn around the Y axis
    pub fn set_rotation_y(&mut self, angle: Deg<f32>) {
        self.transform.euler_degrees = Vector3::new(0.0, angle.0, 0.0);
    }

    /// Set non-uniform local scale
    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.transform.scale = scale;
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    pub fn component_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.kind() == kind)
    }

    /// Attach a component, replacing any existing one of the same kind
    pub fn add_component(&mut self, component: Component) -> &mut Component {
        let kind = component.kind();
        if kind == ComponentKind::HingeJoint {
            // Joints need a body to act on
            self.ensure_component(ComponentKind::Rigidbody);
        }

        let index = match self.components.iter().position(|c| c.kind() == kind) {
            Some(index) => {
                self.components[index] = component;
                index
            }
            None => {
                self.components.push(component);
                self.components.len() - 1
            }
        };
        &mut self.components[index]
    }

    /// Return the existing component of this kind or attach a default one
    pub fn ensure_component(&mut self, kind: ComponentKind) -> &mut Component {
        match self.components.iter().position(|c| c.kind() == kind) {
            Some(index) => &mut self.components[index],
            None => self.add_component(kind.default_component()),
        }
    }

    /// Material shown by this object's renderer, if it has one
    pub fn material_id(&self) -> Option<&MaterialId> {
        match self.component(ComponentKind::MeshRenderer) {
            Some(Component::MeshRenderer { material }) => material.as_ref(),
            _ => None,
        }
    }

    /// Assign a material to the renderer. Objects without a renderer are left alone.
    pub fn set_material(&mut self, material_id: &str) -> bool {
        match self.component_mut(ComponentKind::MeshRenderer) {
            Some(Component::MeshRenderer { material }) => {
                *material = Some(material_id.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hinge_joint_brings_rigidbody() {
        let mut door = Object::new("PUERTA_01");
        door.add_component(Component::HingeJoint {
            anchor: Vector3::new(0.0, 0.0, 0.0),
            axis: Vector3::new(0.0, 0.0, 1.0),
        });

        assert!(door.has_component(ComponentKind::Rigidbody));
        assert!(door.has_component(ComponentKind::HingeJoint));
    }

    #[test]
    fn test_ensure_component_does_not_duplicate() {
        let mut wall = Object::new("00_A_MUROS");
        wall.ensure_component(ComponentKind::MeshCollider);
        wall.ensure_component(ComponentKind::MeshCollider);
        assert_eq!(wall.components().len(), 1);
    }

    #[test]
    fn test_set_material_requires_renderer() {
        let mut bare = Object::new("bare");
        assert!(!bare.set_material("Materials/BaseWall"));
        assert!(bare.material_id().is_none());

        let mut rendered = Object::new("rendered");
        rendered.add_component(Component::MeshRenderer { material: None });
        assert!(rendered.set_material("Materials/BaseWall"));
        assert_eq!(
            rendered.material_id().map(String::as_str),
            Some("Materials/BaseWall")
        );
    }
}
