//! Prefab templates
//!
//! A prefab is an immutable subtree that `Scene::instantiate` deep-copies into
//! the live hierarchy. Asset sources hand them out behind an `Arc`.

use super::components::Component;
use super::transform::Transform;

#[derive(Debug, Clone)]
pub struct PrefabNode {
    pub name: String,
    pub transform: Transform,
    pub active: bool,
    pub components: Vec<Component>,
    pub children: Vec<PrefabNode>,
}

impl PrefabNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            active: true,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder pattern: Set local position
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = cgmath::Vector3::new(x, y, z);
        self
    }

    /// Builder pattern: Attach a component
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Builder pattern: Attach an empty mesh renderer
    pub fn with_renderer(self) -> Self {
        self.with_component(Component::MeshRenderer { material: None })
    }

    /// Builder pattern: Append a child subtree
    pub fn with_child(mut self, child: PrefabNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder pattern: Start inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Number of nodes in this subtree, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PrefabNode::node_count).sum::<usize>()
    }
}

#[derive(Debug, Clone)]
pub struct Prefab {
    pub name: String,
    pub root: PrefabNode,
}

impl Prefab {
    /// Wrap a subtree; the prefab takes the root's name
    pub fn new(root: PrefabNode) -> Self {
        Self {
            name: root.name.clone(),
            root,
        }
    }

    /// Prefab name as derived from a resource path ("Furniture/Bide/Bide" -> "Bide")
    pub fn name_from_path(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        assert_eq!(Prefab::name_from_path("Furniture/Bide/Bide"), "Bide");
        assert_eq!(Prefab::name_from_path("original"), "original");
    }

    #[test]
    fn test_node_count() {
        let root = PrefabNode::new("root")
            .with_child(PrefabNode::new("a").with_child(PrefabNode::new("a1")))
            .with_child(PrefabNode::new("b"));
        assert_eq!(root.node_count(), 4);
    }
}
